//! Local-file ingestion.
//!
//! Development path through the same pipeline the Lambda runs: plan the
//! file, connect with inline credentials, execute. Secret-backed
//! credentials are Lambda-only; asking for them here is an error rather
//! than a silent AWS dependency.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv2pg_config::{CredentialsConfig, RuntimeConfig};
use csv2pg_core::prepare_ingest;
use csv2pg_db::DbCredentials;
use tracing::info;

pub(crate) async fn run(config: &RuntimeConfig, path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("file path has no usable file name")?;

    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let plan = prepare_ingest(file_name, BufReader::new(file))?;

    let credentials = match config.credentials.as_ref() {
        Some(CredentialsConfig::Inline { username, password }) => DbCredentials {
            username: username.clone(),
            password: password.clone(),
        },
        Some(CredentialsConfig::Secret { .. }) => bail!(
            "secret-backed credentials are resolved in the Lambda runtime; \
             set DB_USER/DB_PASSWORD (or a [credentials] section) for local ingestion"
        ),
        None => bail!("no database credentials configured"),
    };

    info!(
        table = plan.table,
        rows = plan.row_count(),
        "ingesting {}",
        path.display()
    );

    let mut conn = csv2pg_db::connect(&config.database, &credentials).await?;
    let rows = csv2pg_db::ingest(&mut conn, &plan).await?;
    csv2pg_db::close(conn).await;

    info!(rows, table = plan.table, "ingest complete");
    Ok(())
}
