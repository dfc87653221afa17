// csv2pg-core - Platform-agnostic core logic
//
// This crate contains the PURE planning logic for turning an uploaded CSV
// file into SQL statements. No I/O, no async, no runtime dependencies.
// Fetching the file, resolving credentials and talking to PostgreSQL are
// the platform layers' problem (csv2pg-lambda, csv2pg-cli, csv2pg-db).

use std::io::Read;

pub mod classify;
pub mod records;
pub mod schema;
pub mod sql;

mod error;

// Re-export commonly used types
pub use classify::classify;
pub use error::PlanError;
pub use records::RowSet;
pub use schema::{ColumnSpec, ColumnType, TableSpec};

/// Everything the database sink needs to ingest one file.
///
/// Produced by [`prepare_ingest`] before any connection is opened: the
/// destination table, its idempotent create statement, one parameter-bound
/// insert statement matching the file's header, and the row values to bind.
#[derive(Debug)]
pub struct IngestPlan {
    pub table: &'static str,
    pub create_sql: &'static str,
    pub insert_sql: String,
    pub rows: Vec<Vec<String>>,
}

impl IngestPlan {
    /// Number of data rows the plan will insert.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Plan the ingestion of one uploaded file.
///
/// Parses `data` as CSV, routes `file_name` through the fixed classifier and
/// builds the bound insert statement from the file's header. Deterministic
/// for the same input; performs no I/O beyond draining `data`.
///
/// Classification misses surface as [`PlanError::UnrecognizedFile`] so
/// callers can turn exactly that case into a rejection response instead of
/// an invocation failure.
pub fn prepare_ingest<R: Read>(file_name: &str, data: R) -> Result<IngestPlan, PlanError> {
    let rows = records::read_rows(data)?;
    let spec = classify(file_name)
        .ok_or_else(|| PlanError::UnrecognizedFile(file_name.to_string()))?;
    let insert_sql = sql::build_insert(spec, &rows.headers)?;

    Ok(IngestPlan {
        table: spec.table,
        create_sql: spec.create_sql,
        insert_sql,
        rows: rows.rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMERS_CSV: &str = "\
CustomerID,Name,Address,Phone,Email
1,Ada Lovelace,12 Analytical Way,555-0100,ada@example.com
2,Edsger Dijkstra,1 Shortest Path,555-0101,ewd@example.com
";

    #[test]
    fn customers_file_produces_two_row_plan() {
        let plan = prepare_ingest("customers_2024.csv", CUSTOMERS_CSV.as_bytes()).unwrap();
        assert_eq!(plan.table, "customers");
        assert_eq!(plan.row_count(), 2);
        assert!(plan.create_sql.contains("IF NOT EXISTS"));
        assert_eq!(
            plan.insert_sql,
            "INSERT INTO customers (CustomerID, Name, Address, Phone, Email) \
             VALUES ($1::int4, $2, $3, $4, $5)"
        );
        assert_eq!(plan.rows[0][1], "Ada Lovelace");
    }

    #[test]
    fn unmatched_file_is_rejected_not_parsed_away() {
        let err = prepare_ingest("report.csv", CUSTOMERS_CSV.as_bytes()).unwrap_err();
        assert!(matches!(err, PlanError::UnrecognizedFile(name) if name == "report.csv"));
    }

    #[test]
    fn header_outside_schema_is_an_error() {
        let data = "CustomerID,Nickname\n1,ada\n";
        let err = prepare_ingest("customer_upload.csv", data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PlanError::UnknownColumn { table: "customers", ref column } if column == "Nickname"
        ));
    }

    #[test]
    fn file_with_no_data_rows_plans_zero_inserts() {
        let data = "ProjectID,ProjectName,StartDate,EndDate,Status\n";
        let plan = prepare_ingest("project_list.csv", data.as_bytes()).unwrap();
        assert_eq!(plan.table, "projects");
        assert_eq!(plan.row_count(), 0);
    }
}
