// AWS Lambda runtime adapter
//
// Decodes S3 object-created events and drives the ingest pipeline:
// fetch -> plan (csv2pg-core) -> execute (csv2pg-db).
//
// Philosophy: lambda_runtime provides the tokio runtime; SDK clients are
// built once per cold start, credentials and connections once per
// invocation.

use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_lambda_events::event::s3::S3Event;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_secretsmanager::Client as SecretsClient;
use csv2pg_config::RuntimeConfig;
use csv2pg_core::PlanError;
use lambda_runtime::{service_fn, Error, LambdaEvent};

mod error;
mod handlers;
mod response;
mod secrets;

pub use error::HandlerError;
pub use response::IngestResponse;

pub(crate) struct LambdaState {
    pub config: RuntimeConfig,
    pub s3: S3Client,
    pub secrets: SecretsClient,
}

/// Handle one invocation.
///
/// The unrecognized-filename case is the only fault recovered here; it
/// becomes a 400 response. Everything else propagates to the runtime and
/// surfaces as an invocation failure.
async fn handle_event(
    event: LambdaEvent<S3Event>,
    state: Arc<LambdaState>,
) -> Result<IngestResponse, Error> {
    let (event, _context) = event.into_parts();

    match handlers::process_event(&event, &state).await {
        Ok(outcome) => Ok(IngestResponse::success(&outcome)),
        Err(HandlerError::Plan(PlanError::UnrecognizedFile(name))) => {
            tracing::warn!(file = %name, "upload matches no table; rejecting");
            Ok(IngestResponse::rejected(&name))
        }
        Err(err) => Err(err.into()),
    }
}

/// Lambda runtime entry point
pub async fn run() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git = env!("GIT_HASH"),
        "csv2pg lambda starting"
    );

    let config = RuntimeConfig::load()?;

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let state = Arc::new(LambdaState {
        s3: S3Client::new(&aws_config),
        secrets: SecretsClient::new(&aws_config),
        config,
    });

    lambda_runtime::run(service_fn(move |event: LambdaEvent<S3Event>| {
        let state = state.clone();
        async move { handle_event(event, state).await }
    }))
    .await
}
