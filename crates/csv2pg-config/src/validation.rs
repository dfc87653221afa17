// Configuration validation
//
// Validates that required fields are present and values are sensible

use crate::{CredentialsConfig, DatabaseConfig, RuntimeConfig, StorageConfig};
use anyhow::{bail, Result};
use tracing::warn;

pub fn validate_config(config: &RuntimeConfig) -> Result<()> {
    validate_storage_config(&config.storage)?;
    validate_database_config(&config.database)?;
    validate_credentials(config.credentials.as_ref())?;
    Ok(())
}

fn validate_storage_config(config: &StorageConfig) -> Result<()> {
    if let Some(bucket) = &config.bucket {
        if bucket.is_empty() {
            bail!("storage.bucket must not be empty when set");
        }
    } else {
        warn!("no upload bucket configured; deploy defaults will prompt for one");
    }
    Ok(())
}

fn validate_database_config(config: &DatabaseConfig) -> Result<()> {
    if config.name.is_empty() {
        bail!("database.name must not be empty");
    }
    if config.host.is_empty() {
        bail!("database.host is required (set DB_HOST or [database] host)");
    }
    if config.port == 0 {
        bail!("database.port must be greater than 0");
    }
    Ok(())
}

fn validate_credentials(credentials: Option<&CredentialsConfig>) -> Result<()> {
    match credentials {
        None => bail!(
            "database credentials are required \
             (set DB_USER/DB_PASSWORD or DB_SECRET_ID, or a [credentials] section)"
        ),
        Some(CredentialsConfig::Inline { username, .. }) => {
            if username.is_empty() {
                bail!("credentials.username must not be empty");
            }
        }
        Some(CredentialsConfig::Secret { secret_id }) => {
            if secret_id.is_empty() {
                bail!("credentials.secret_id must not be empty");
            }
        }
    }
    Ok(())
}
