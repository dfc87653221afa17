use thiserror::Error;

/// Errors that can occur while planning the ingestion of one file.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The filename matched none of the known classifiers. Callers turn
    /// this into a rejection response; every other variant is a failure.
    #[error("no table matches file name '{0}'")]
    UnrecognizedFile(String),

    /// The file is not well-formed CSV.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The file is empty or starts with an empty header row.
    #[error("file has no header row")]
    MissingHeader,

    /// The header names a column outside the destination table's schema.
    #[error("column '{column}' does not exist in table '{table}'")]
    UnknownColumn {
        table: &'static str,
        column: String,
    },
}
