// csv2pg-db - PostgreSQL sink
//
// Executes the plans produced by csv2pg-core: one connection per call site,
// one transaction per plan. Who resolves the credentials (inline config,
// Secrets Manager) is the platform layer's concern; this crate only ever
// sees a ready username/password pair.

mod connect;
mod error;
mod ingest;

pub use connect::{close, connect, connect_options, DbCredentials};
pub use error::{DbError, Result};
pub use ingest::ingest;

// Platform layers hold connections without depending on sqlx themselves
pub use sqlx::postgres::PgConnection;
