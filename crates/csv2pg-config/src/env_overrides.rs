use crate::{CredentialsConfig, LogFormat, RuntimeConfig};
use anyhow::{anyhow, bail, Result};

pub const ENV_PREFIX: &str = "CSV2PG_";

/// Abstraction over environment-variable lookups so tests can supply their
/// own source of overrides without mutating process state.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;

    /// Get an environment variable WITHOUT the CSV2PG_ prefix.
    /// Used for the names the provisioner wires into the function
    /// (BUCKET, DB_NAME, ...) and for AWS standard variables.
    fn get_raw(&self, key: &str) -> Option<String>;
}

/// Apply environment-variable overrides (highest priority) to the runtime config.
pub fn apply_env_overrides<E: EnvSource>(config: &mut RuntimeConfig, env: &E) -> Result<()> {
    // Provisioner contract: unprefixed names set by the CloudFormation stack
    if let Some(bucket) = env.get_raw("BUCKET") {
        config.storage.bucket = Some(bucket);
    }
    if let Some(region) = env.get_raw("AWS_REGION") {
        config.storage.region = Some(region);
    }
    if let Some(name) = env.get_raw("DB_NAME") {
        config.database.name = name;
    }
    if let Some(host) = env.get_raw("DB_HOST") {
        config.database.host = host;
    }
    if let Some(port) = get_raw_env_u16(env, "DB_PORT")? {
        config.database.port = port;
    }

    // Credential source: a secret id, overridden by explicit values when
    // both are present.
    if let Some(secret_id) = env.get_raw("DB_SECRET_ID") {
        config.credentials = Some(CredentialsConfig::Secret { secret_id });
    }
    match (env.get_raw("DB_USER"), env.get_raw("DB_PASSWORD")) {
        (Some(username), Some(password)) => {
            config.credentials = Some(CredentialsConfig::Inline { username, password });
        }
        (None, None) => {}
        _ => bail!("DB_USER and DB_PASSWORD must be set together"),
    }

    // Log configuration (CSV2PG_ prefixed)
    if let Some(level) = env.get("LOG_LEVEL") {
        config.log.level = level;
    }
    if let Some(format) = env.get("LOG_FORMAT") {
        config.log.format = match format.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };
    }

    Ok(())
}

fn get_raw_env_u16<E: EnvSource>(env: &E, key: &str) -> Result<Option<u16>> {
    match env.get_raw(key) {
        Some(val) => {
            let parsed = val
                .parse::<u16>()
                .map_err(|e| anyhow!("Failed to parse {}: {}", key, e))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Platform;
    use std::collections::HashMap;

    struct MapEnv(HashMap<&'static str, &'static str>);

    impl EnvSource for MapEnv {
        fn get(&self, key: &str) -> Option<String> {
            self.0
                .get(format!("{}{}", ENV_PREFIX, key).as_str())
                .map(|v| v.to_string())
        }

        fn get_raw(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|v| v.to_string())
        }
    }

    fn env(pairs: &[(&'static str, &'static str)]) -> MapEnv {
        MapEnv(pairs.iter().copied().collect())
    }

    #[test]
    fn provisioner_names_populate_the_config() {
        let mut config = RuntimeConfig::from_platform_defaults(Platform::Lambda);
        let source = env(&[
            ("BUCKET", "uploads-123"),
            ("DB_NAME", "fielddata"),
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "5433"),
            ("DB_SECRET_ID", "csv2pg/db"),
        ]);
        apply_env_overrides(&mut config, &source).unwrap();

        assert_eq!(config.storage.bucket.as_deref(), Some("uploads-123"));
        assert_eq!(config.database.name, "fielddata");
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 5433);
        assert!(matches!(
            config.credentials,
            Some(CredentialsConfig::Secret { ref secret_id }) if secret_id == "csv2pg/db"
        ));
    }

    #[test]
    fn explicit_credentials_win_over_the_secret_id() {
        let mut config = RuntimeConfig::from_platform_defaults(Platform::Lambda);
        let source = env(&[
            ("DB_SECRET_ID", "csv2pg/db"),
            ("DB_USER", "ingest"),
            ("DB_PASSWORD", "hunter2"),
        ]);
        apply_env_overrides(&mut config, &source).unwrap();

        assert!(matches!(
            config.credentials,
            Some(CredentialsConfig::Inline { ref username, .. }) if username == "ingest"
        ));
    }

    #[test]
    fn half_a_credential_pair_is_an_error() {
        let mut config = RuntimeConfig::from_platform_defaults(Platform::Cli);
        let source = env(&[("DB_USER", "ingest")]);
        assert!(apply_env_overrides(&mut config, &source).is_err());
    }

    #[test]
    fn unparsable_port_is_an_error() {
        let mut config = RuntimeConfig::from_platform_defaults(Platform::Cli);
        let source = env(&[("DB_PORT", "fivefour32")]);
        assert!(apply_env_overrides(&mut config, &source).is_err());
    }

    #[test]
    fn prefixed_log_overrides_apply() {
        let mut config = RuntimeConfig::from_platform_defaults(Platform::Cli);
        let source = env(&[("CSV2PG_LOG_LEVEL", "debug"), ("CSV2PG_LOG_FORMAT", "json")]);
        apply_env_overrides(&mut config, &source).unwrap();

        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, LogFormat::Json);
    }
}
