//! Database credential resolution.
//!
//! Inline values pass straight through; a secret id triggers an on-demand
//! Secrets Manager fetch. Nothing is cached: each invocation resolves
//! fresh so rotation takes effect on the next upload.

use csv2pg_config::CredentialsConfig;
use csv2pg_db::DbCredentials;
use serde::Deserialize;

use crate::error::HandlerError;
use crate::LambdaState;

/// Document shape of the database secret: the provisioner's generated
/// secret stores a JSON object with username/password keys.
#[derive(Deserialize)]
struct SecretPayload {
    username: String,
    password: String,
}

/// Resolve live credentials for this invocation.
pub(crate) async fn resolve_credentials(
    state: &LambdaState,
) -> Result<DbCredentials, HandlerError> {
    match state.config.credentials.as_ref() {
        Some(CredentialsConfig::Inline { username, password }) => Ok(DbCredentials {
            username: username.clone(),
            password: password.clone(),
        }),
        Some(CredentialsConfig::Secret { secret_id }) => fetch_secret(state, secret_id).await,
        // Config validation requires a credential source, so this only
        // trips when a caller skips RuntimeConfig::load()
        None => Err(HandlerError::Credential(
            "no credential source configured".to_string(),
        )),
    }
}

async fn fetch_secret(state: &LambdaState, secret_id: &str) -> Result<DbCredentials, HandlerError> {
    let output = state
        .secrets
        .get_secret_value()
        .secret_id(secret_id)
        .send()
        .await
        .map_err(|err| {
            HandlerError::credential(secret_id, aws_sdk_secretsmanager::Error::from(err))
        })?;

    let raw = output
        .secret_string()
        .ok_or_else(|| HandlerError::credential(secret_id, "secret has no string value"))?;

    let payload: SecretPayload = serde_json::from_str(raw)
        .map_err(|err| HandlerError::credential(secret_id, err))?;

    Ok(DbCredentials {
        username: payload.username,
        password: payload.password,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_payload_parses_the_generated_document() {
        let raw = r#"{"username":"ingest","password":"s3cr3t","engine":"postgres","host":"db.internal"}"#;
        let payload: SecretPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.username, "ingest");
        assert_eq!(payload.password, "s3cr3t");
    }
}
