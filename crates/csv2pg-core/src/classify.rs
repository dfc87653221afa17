//! Filename classifier.
//!
//! Routes an uploaded file to its destination table by substring match on
//! the filename. The match is case-sensitive and the order is fixed: a file
//! named `customer_projects.csv` lands in `customers`.

use crate::schema::{TableSpec, CUSTOMERS, MAINTENANCE_REPORTS, PROJECTS};

static CLASSIFIERS: [(&str, &TableSpec); 3] = [
    ("customer", &CUSTOMERS),
    ("project", &PROJECTS),
    ("maintenance", &MAINTENANCE_REPORTS),
];

/// Classify a filename; `None` means the upload is not ours to ingest.
pub fn classify(file_name: &str) -> Option<&'static TableSpec> {
    CLASSIFIERS
        .iter()
        .find(|(needle, _)| file_name.contains(needle))
        .map(|(_, spec)| *spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_selects_the_table() {
        assert_eq!(classify("customers_2024.csv").unwrap().table, "customers");
        assert_eq!(classify("q3_project_list.csv").unwrap().table, "projects");
        assert_eq!(
            classify("maintenance-march.csv").unwrap().table,
            "maintenance_reports"
        );
    }

    #[test]
    fn first_match_wins() {
        // "customer" outranks "project" regardless of position in the name
        assert_eq!(
            classify("project_customer_export.csv").unwrap().table,
            "customers"
        );
        // "project" outranks "maintenance"
        assert_eq!(
            classify("maintenance_project.csv").unwrap().table,
            "projects"
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(classify("Customers.csv").is_none());
        assert!(classify("PROJECT.csv").is_none());
    }

    #[test]
    fn unmatched_names_are_rejected() {
        assert!(classify("report.csv").is_none());
        assert!(classify("").is_none());
    }
}
