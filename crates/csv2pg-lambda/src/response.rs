// Response payload returned to the invoking platform
//
// Proxy-style contract: an integer status code plus a short human-readable
// body. 200 = file ingested, 400 = upload not recognized.

use serde::Serialize;

use crate::handlers::IngestOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    pub status_code: i64,
    pub body: String,
}

impl IngestResponse {
    pub(crate) fn success(outcome: &IngestOutcome) -> Self {
        Self {
            status_code: 200,
            body: format!(
                "Success: inserted {} rows from '{}' into {}",
                outcome.rows, outcome.file_name, outcome.table
            ),
        }
    }

    pub(crate) fn rejected(file_name: &str) -> Self {
        Self {
            status_code: 400,
            body: format!("Invalid file name: '{}'", file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_the_platform_field_names() {
        let response = IngestResponse::rejected("report.csv");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 400);
        assert_eq!(value["body"], "Invalid file name: 'report.csv'");
    }

    #[test]
    fn success_reports_the_row_count() {
        let outcome = IngestOutcome {
            table: "customers",
            file_name: "customers_2024.csv".to_string(),
            rows: 2,
        };
        let response = IngestResponse::success(&outcome);
        assert_eq!(response.status_code, 200);
        assert!(response.body.contains("2 rows"));
        assert!(response.body.contains("customers"));
    }
}
