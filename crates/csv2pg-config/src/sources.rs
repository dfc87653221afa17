// Configuration source loading.
//
// Priority order:
// 1. Environment variables (provisioner names + CSV2PG_* prefix)
// 2. Config file path from CSV2PG_CONFIG
// 3. Inline config content from CSV2PG_CONFIG_CONTENT
// 4. Default config files (./csv2pg.toml, ./.csv2pg.toml)
// 5. Platform defaults (based on auto-detected Platform)

use crate::env_overrides::{self, EnvSource, ENV_PREFIX};
use crate::platform::Platform;
use crate::{CredentialsConfig, DatabaseConfig, LogConfig, RuntimeConfig, StorageConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// A partially-specified config as it appears in a TOML file.
/// Absent sections keep whatever the lower-priority sources provided.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FileConfig {
    pub(crate) storage: Option<StorageConfig>,
    pub(crate) database: Option<DatabaseConfig>,
    pub(crate) credentials: Option<CredentialsConfig>,
    pub(crate) log: Option<LogConfig>,
}

/// Load configuration for the given platform using native environment/file access.
pub(crate) fn load_config(platform: Platform) -> Result<RuntimeConfig> {
    let mut config = RuntimeConfig::from_platform_defaults(platform);

    if let Some(file_config) = load_from_file()? {
        config.merge(file_config);
    }

    let env_source = StdEnvSource;
    env_overrides::apply_env_overrides(&mut config, &env_source)?;
    config.validate()?;
    Ok(config)
}

fn load_from_file() -> Result<Option<FileConfig>> {
    if let Ok(path) = env::var("CSV2PG_CONFIG") {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: FileConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        return Ok(Some(config));
    }

    if let Ok(content) = env::var("CSV2PG_CONFIG_CONTENT") {
        let config: FileConfig = toml::from_str(&content)
            .context("Failed to parse inline config from CSV2PG_CONFIG_CONTENT")?;
        return Ok(Some(config));
    }

    for path in &["./csv2pg.toml", "./.csv2pg.toml"] {
        if Path::new(path).exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            let config: FileConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path))?;
            return Ok(Some(config));
        }
    }

    Ok(None)
}

/// Load configuration from a specific file path (for CLI --config flag).
/// Starts from platform defaults, merges the file content, then applies
/// environment overrides - same pipeline as load_config with the file
/// location pinned.
pub(crate) fn load_from_file_path(path: impl AsRef<Path>) -> Result<RuntimeConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let file_config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    let platform = Platform::detect();
    let mut config = RuntimeConfig::from_platform_defaults(platform);
    config.merge(file_config);

    let env_source = StdEnvSource;
    env_overrides::apply_env_overrides(&mut config, &env_source)?;

    config.validate()?;
    Ok(config)
}

struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    }

    fn get_raw(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_defaults_match_expectations() {
        let cli = RuntimeConfig::from_platform_defaults(Platform::Cli);
        assert_eq!(cli.database.host, "localhost");
        assert!(cli.credentials.is_none());

        let lambda = RuntimeConfig::from_platform_defaults(Platform::Lambda);
        assert_eq!(lambda.database.host, "");
    }

    #[test]
    fn file_sections_replace_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            [storage]
            bucket = "uploads"

            [database]
            name = "fielddata"
            host = "db.internal"

            [credentials]
            username = "ingest"
            password = "hunter2"
            "#,
        )
        .unwrap();

        let mut config = RuntimeConfig::from_platform_defaults(Platform::Cli);
        config.merge(file);

        assert_eq!(config.storage.bucket.as_deref(), Some("uploads"));
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 5432); // default survives a partial section
        assert!(matches!(
            config.credentials,
            Some(CredentialsConfig::Inline { .. })
        ));
        assert_eq!(config.log.level, "info"); // untouched section keeps defaults
    }
}
