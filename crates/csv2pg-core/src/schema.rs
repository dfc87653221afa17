//! The three fixed destination tables.
//!
//! The uploaded files carry their surrogate key column explicitly, so the
//! serial primary keys are insertable like any other column.

/// Column type as declared in the create statement.
///
/// Only the distinctions that matter for binding are modeled: typed columns
/// get a server-side cast on their placeholder, character columns bind as
/// plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Serial,
    Integer,
    Date,
    Varchar,
    Text,
}

impl ColumnType {
    /// Cast suffix for a bound placeholder, if the column needs one.
    pub(crate) fn bind_cast(&self) -> Option<&'static str> {
        match self {
            ColumnType::Serial | ColumnType::Integer => Some("int4"),
            ColumnType::Date => Some("date"),
            ColumnType::Varchar | ColumnType::Text => None,
        }
    }
}

/// One column of a fixed table schema.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub ty: ColumnType,
}

/// A destination table: name, columns and the idempotent create statement.
#[derive(Debug)]
pub struct TableSpec {
    pub table: &'static str,
    pub columns: &'static [ColumnSpec],
    pub create_sql: &'static str,
}

impl TableSpec {
    /// Look up a column by name.
    ///
    /// Matching is case-insensitive: the create statements use unquoted
    /// identifiers, which PostgreSQL folds to lower case, so `CustomerID`
    /// in a file header and `customerid` in the catalog are the same column.
    pub fn column(&self, name: &str) -> Option<&'static ColumnSpec> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }
}

pub static CUSTOMERS: TableSpec = TableSpec {
    table: "customers",
    columns: &[
        ColumnSpec { name: "CustomerID", ty: ColumnType::Serial },
        ColumnSpec { name: "Name", ty: ColumnType::Varchar },
        ColumnSpec { name: "Address", ty: ColumnType::Varchar },
        ColumnSpec { name: "Phone", ty: ColumnType::Varchar },
        ColumnSpec { name: "Email", ty: ColumnType::Varchar },
    ],
    create_sql: "\
CREATE TABLE IF NOT EXISTS customers (
    CustomerID SERIAL PRIMARY KEY,
    Name VARCHAR(100),
    Address VARCHAR(100),
    Phone VARCHAR(20),
    Email VARCHAR(100)
)",
};

pub static PROJECTS: TableSpec = TableSpec {
    table: "projects",
    columns: &[
        ColumnSpec { name: "ProjectID", ty: ColumnType::Serial },
        ColumnSpec { name: "ProjectName", ty: ColumnType::Varchar },
        ColumnSpec { name: "StartDate", ty: ColumnType::Date },
        ColumnSpec { name: "EndDate", ty: ColumnType::Date },
        ColumnSpec { name: "Status", ty: ColumnType::Varchar },
    ],
    create_sql: "\
CREATE TABLE IF NOT EXISTS projects (
    ProjectID SERIAL PRIMARY KEY,
    ProjectName VARCHAR(100),
    StartDate DATE,
    EndDate DATE,
    Status VARCHAR(50)
)",
};

pub static MAINTENANCE_REPORTS: TableSpec = TableSpec {
    table: "maintenance_reports",
    columns: &[
        ColumnSpec { name: "ReportID", ty: ColumnType::Serial },
        ColumnSpec { name: "ProjectID", ty: ColumnType::Integer },
        ColumnSpec { name: "Date", ty: ColumnType::Date },
        ColumnSpec { name: "Description", ty: ColumnType::Text },
        ColumnSpec { name: "Technician", ty: ColumnType::Varchar },
    ],
    create_sql: "\
CREATE TABLE IF NOT EXISTS maintenance_reports (
    ReportID SERIAL PRIMARY KEY,
    ProjectID INT,
    Date DATE,
    Description TEXT,
    Technician VARCHAR(100)
)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_is_case_insensitive() {
        assert!(CUSTOMERS.column("customerid").is_some());
        assert!(CUSTOMERS.column("CUSTOMERID").is_some());
        assert!(CUSTOMERS.column("Fax").is_none());
    }

    #[test]
    fn create_statements_are_idempotent() {
        for spec in [&CUSTOMERS, &PROJECTS, &MAINTENANCE_REPORTS] {
            assert!(spec.create_sql.starts_with("CREATE TABLE IF NOT EXISTS"));
            assert!(spec.create_sql.contains(spec.table));
        }
    }

    #[test]
    fn every_declared_column_appears_in_the_create_statement() {
        for spec in [&CUSTOMERS, &PROJECTS, &MAINTENANCE_REPORTS] {
            for column in spec.columns {
                assert!(
                    spec.create_sql.contains(column.name),
                    "{} missing from {}",
                    column.name,
                    spec.table
                );
            }
        }
    }
}
