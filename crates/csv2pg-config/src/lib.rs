// csv2pg-config - Unified configuration for all runtimes
//
// Supports configuration from multiple sources:
// 1. Environment variables (raw provisioner names + CSV2PG_* overrides)
// 2. Config file path from CSV2PG_CONFIG env var
// 3. Config file contents from CSV2PG_CONFIG_CONTENT env var
// 4. Default config file locations (./csv2pg.toml, ./.csv2pg.toml)
// 5. Platform-specific defaults (lowest priority)

use anyhow::Result;
use serde::Deserialize;

mod env_overrides;
mod platform;
mod sources;
mod validation;

pub use env_overrides::{EnvSource, ENV_PREFIX};
pub use platform::Platform;

/// Main runtime configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub credentials: Option<CredentialsConfig>,

    #[serde(default)]
    pub log: LogConfig,
}

/// Upload bucket configuration.
///
/// The Lambda handler trusts the event payload for the object's location;
/// the bucket recorded here is the provisioner wiring and the default used
/// by the deploy generator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

/// Destination database endpoint (credentials live separately).
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_name")]
    pub name: String,
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
}

fn default_db_name() -> String {
    "csv2pg".to_string()
}

fn default_db_port() -> u16 {
    5432
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: default_db_name(),
            host: String::new(),
            port: default_db_port(),
        }
    }
}

/// Where the handler gets its database credentials from.
///
/// Inline values serve local development; the Lambda deployment points at
/// the Secrets Manager entry the provisioner generated. Resolution of the
/// secret happens per invocation, in the platform layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CredentialsConfig {
    Secret { secret_id: String },
    Inline { username: String, password: String },
}

/// Log output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl RuntimeConfig {
    /// Load configuration from all sources with priority
    pub fn load() -> Result<Self> {
        let platform = Platform::detect();
        sources::load_config(platform)
    }

    /// Load configuration for a specific platform (useful for testing)
    pub fn load_for_platform(platform: Platform) -> Result<Self> {
        sources::load_config(platform)
    }

    /// Load configuration from an explicit file path (CLI --config flag)
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        sources::load_from_file_path(path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    pub(crate) fn from_platform_defaults(platform: Platform) -> Self {
        let defaults = platform.defaults();
        Self {
            storage: StorageConfig::default(),
            database: DatabaseConfig {
                name: defaults.database_name.to_string(),
                host: defaults.database_host.to_string(),
                port: default_db_port(),
            },
            credentials: None,
            log: LogConfig::default(),
        }
    }

    pub(crate) fn merge(&mut self, file: sources::FileConfig) {
        if let Some(storage) = file.storage {
            self.storage = storage;
        }
        if let Some(database) = file.database {
            self.database = database;
        }
        if let Some(credentials) = file.credentials {
            self.credentials = Some(credentials);
        }
        if let Some(log) = file.log {
            self.log = log;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let database = DatabaseConfig::default();
        assert_eq!(database.port, 5432);
        assert_eq!(database.name, "csv2pg");

        let log = LogConfig::default();
        assert_eq!(log.level, "info");
        assert_eq!(log.format, LogFormat::Text);
    }

    #[test]
    fn credentials_deserialize_both_shapes() {
        let secret: CredentialsConfig =
            toml::from_str(r#"secret_id = "arn:aws:secretsmanager:xyz""#).unwrap();
        assert!(matches!(secret, CredentialsConfig::Secret { .. }));

        let inline: CredentialsConfig =
            toml::from_str("username = \"ingest\"\npassword = \"hunter2\"").unwrap();
        assert!(matches!(inline, CredentialsConfig::Inline { .. }));
    }
}
