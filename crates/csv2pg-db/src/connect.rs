//! Connection establishment from config plus resolved credentials.

use csv2pg_config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use crate::error::{DbError, Result};

/// A live username/password pair, resolved just before connecting.
///
/// Never cached across invocations: each handler run resolves and connects
/// fresh, so a rotated secret takes effect on the next upload.
#[derive(Debug, Clone)]
pub struct DbCredentials {
    pub username: String,
    pub password: String,
}

/// Build connect options for the configured endpoint.
pub fn connect_options(database: &DatabaseConfig, credentials: &DbCredentials) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&database.host)
        .port(database.port)
        .database(&database.name)
        .username(&credentials.username)
        .password(&credentials.password)
}

/// Open a single connection to the destination database.
pub async fn connect(
    database: &DatabaseConfig,
    credentials: &DbCredentials,
) -> Result<PgConnection> {
    let options = connect_options(database, credentials);
    PgConnection::connect_with(&options)
        .await
        .map_err(|source| DbError::Connect {
            database: database.name.clone(),
            host: database.host.clone(),
            port: database.port,
            source,
        })
}

/// Gracefully close a connection on the success path.
///
/// A shutdown fault after a committed transaction is logged, not propagated.
pub async fn close(conn: PgConnection) {
    if let Err(err) = Connection::close(conn).await {
        tracing::warn!(error = %err, "connection close failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_carry_the_configured_endpoint() {
        let database = DatabaseConfig {
            name: "fielddata".to_string(),
            host: "db.internal".to_string(),
            port: 5433,
        };
        let credentials = DbCredentials {
            username: "ingest".to_string(),
            password: "hunter2".to_string(),
        };

        let options = connect_options(&database, &credentials);
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("fielddata"));
        assert_eq!(options.get_username(), "ingest");
    }
}
