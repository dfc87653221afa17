//! Error types for the database sink

use thiserror::Error;

/// Errors that can occur while connecting or executing an ingest plan
#[derive(Debug, Error)]
pub enum DbError {
    /// Connection establishment failed (network or auth fault)
    #[error("failed to connect to database '{database}' at {host}:{port}: {source}")]
    Connect {
        database: String,
        host: String,
        port: u16,
        #[source]
        source: sqlx::Error,
    },

    /// Transaction could not be opened
    #[error("failed to begin transaction: {0}")]
    Begin(#[source] sqlx::Error),

    /// The idempotent create statement failed
    #[error("failed to create table '{table}': {source}")]
    CreateTable {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A row insert failed (constraint violation, bad literal, ...)
    #[error("failed to insert row {row} into '{table}': {source}")]
    Insert {
        table: &'static str,
        row: usize,
        #[source]
        source: sqlx::Error,
    },

    /// The final commit failed
    #[error("failed to commit {rows} rows into '{table}': {source}")]
    Commit {
        table: &'static str,
        rows: usize,
        #[source]
        source: sqlx::Error,
    },
}

/// Result type alias for DbError
pub type Result<T> = std::result::Result<T, DbError>;
