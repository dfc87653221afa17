//! Insert statement construction.
//!
//! The column list comes from the uploaded file's header, but only after
//! each name has been resolved against the fixed schema - the rendered SQL
//! contains schema identifiers and numbered placeholders, never file text.

use crate::error::PlanError;
use crate::schema::TableSpec;

/// Build the single-row insert statement for a file header.
///
/// Every header field must name a column of `spec`; the resulting statement
/// binds one parameter per field, with an explicit cast for typed columns
/// (`$n::date`, `$n::int4`) so values travel as text.
pub fn build_insert(spec: &TableSpec, headers: &[String]) -> Result<String, PlanError> {
    let mut columns = Vec::with_capacity(headers.len());
    let mut placeholders = Vec::with_capacity(headers.len());

    for (idx, header) in headers.iter().enumerate() {
        let column = spec.column(header).ok_or_else(|| PlanError::UnknownColumn {
            table: spec.table,
            column: header.clone(),
        })?;
        columns.push(column.name);
        placeholders.push(match column.ty.bind_cast() {
            Some(cast) => format!("${}::{}", idx + 1, cast),
            None => format!("${}", idx + 1),
        });
    }

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        spec.table,
        columns.join(", "),
        placeholders.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{MAINTENANCE_REPORTS, PROJECTS};

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn typed_columns_get_casts() {
        let sql = build_insert(
            &PROJECTS,
            &headers(&["ProjectID", "ProjectName", "StartDate", "EndDate", "Status"]),
        )
        .unwrap();
        assert_eq!(
            sql,
            "INSERT INTO projects (ProjectID, ProjectName, StartDate, EndDate, Status) \
             VALUES ($1::int4, $2, $3::date, $4::date, $5)"
        );
    }

    #[test]
    fn column_order_follows_the_file_header() {
        let sql = build_insert(&MAINTENANCE_REPORTS, &headers(&["Technician", "ReportID"])).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO maintenance_reports (Technician, ReportID) VALUES ($1, $2::int4)"
        );
    }

    #[test]
    fn header_names_resolve_case_insensitively() {
        let sql = build_insert(&PROJECTS, &headers(&["projectname"])).unwrap();
        // the schema's spelling wins in the rendered statement
        assert_eq!(sql, "INSERT INTO projects (ProjectName) VALUES ($1)");
    }

    #[test]
    fn unknown_header_is_rejected() {
        let err = build_insert(&PROJECTS, &headers(&["ProjectName", "Budget"])).unwrap_err();
        assert!(matches!(
            err,
            PlanError::UnknownColumn { table: "projects", ref column } if column == "Budget"
        ));
    }
}
