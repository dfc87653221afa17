use csv2pg_core::PlanError;
use csv2pg_db::DbError;
use thiserror::Error;

/// Faults that can end an invocation.
///
/// Only `Plan(PlanError::UnrecognizedFile)` is recovered by the adapter
/// (it becomes a 400 response); every other variant terminates the
/// invocation and is recorded by the platform.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The event payload lacks an expected nested field
    #[error("malformed event: missing {0}")]
    MalformedEvent(&'static str),

    /// The object could not be fetched and staged locally
    #[error("failed to retrieve s3://{bucket}/{key}: {reason}")]
    Retrieval {
        bucket: String,
        key: String,
        reason: String,
    },

    /// Planning failed: malformed CSV, unknown column, or no matching table
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Database credentials could not be resolved
    #[error("failed to resolve database credentials: {0}")]
    Credential(String),

    /// Connection, DDL, insert or commit fault
    #[error(transparent)]
    Database(#[from] DbError),
}

impl HandlerError {
    pub(crate) fn retrieval(bucket: &str, key: &str, reason: impl std::fmt::Display) -> Self {
        Self::Retrieval {
            bucket: bucket.to_string(),
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn credential(secret_id: &str, reason: impl std::fmt::Display) -> Self {
        Self::Credential(format!("secret '{}': {}", secret_id, reason))
    }
}
