// Event handlers for S3 object-created notifications
//
// One invocation handles the first record of one event: stage the object,
// plan the ingest, resolve credentials, execute against PostgreSQL.

use std::io::Write;

use aws_lambda_events::event::s3::S3Event;
use csv2pg_core::prepare_ingest;
use tempfile::NamedTempFile;

use crate::error::HandlerError;
use crate::secrets;
use crate::LambdaState;

/// What a successful invocation accomplished.
pub(crate) struct IngestOutcome {
    pub table: &'static str,
    pub file_name: String,
    pub rows: u64,
}

/// Handle one storage-creation event end to end.
pub(crate) async fn process_event(
    event: &S3Event,
    state: &LambdaState,
) -> Result<IngestOutcome, HandlerError> {
    let (bucket, key) = object_location(event)?;
    let file_name = object_file_name(&key);
    tracing::info!(%bucket, %key, "processing upload");

    let staged = fetch_object(state, &bucket, &key).await?;
    let file = std::fs::File::open(staged.path())
        .map_err(|err| HandlerError::retrieval(&bucket, &key, err))?;
    let plan = prepare_ingest(&file_name, std::io::BufReader::new(file))?;

    // Credentials are resolved per invocation so secret rotation takes
    // effect on the next upload.
    let credentials = secrets::resolve_credentials(state).await?;
    let mut conn = csv2pg_db::connect(&state.config.database, &credentials).await?;
    let rows = csv2pg_db::ingest(&mut conn, &plan).await?;
    csv2pg_db::close(conn).await;

    tracing::info!(table = plan.table, rows, "ingest complete");
    Ok(IngestOutcome {
        table: plan.table,
        file_name,
        rows,
    })
}

/// Bucket and key of the first record in the event.
fn object_location(event: &S3Event) -> Result<(String, String), HandlerError> {
    let record = event
        .records
        .first()
        .ok_or(HandlerError::MalformedEvent("records"))?;
    let bucket = record
        .s3
        .bucket
        .name
        .clone()
        .ok_or(HandlerError::MalformedEvent("bucket name"))?;
    let key = record
        .s3
        .object
        .key
        .clone()
        .ok_or(HandlerError::MalformedEvent("object key"))?;
    Ok((bucket, key))
}

/// Final path segment of the object key.
fn object_file_name(key: &str) -> String {
    key.rsplit('/').next().unwrap_or(key).to_string()
}

/// Stream the object into a transient file under the function's /tmp.
async fn fetch_object(
    state: &LambdaState,
    bucket: &str,
    key: &str,
) -> Result<NamedTempFile, HandlerError> {
    let response = state
        .s3
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|err| HandlerError::retrieval(bucket, key, aws_sdk_s3::Error::from(err)))?;

    let data = response
        .body
        .collect()
        .await
        .map_err(|err| HandlerError::retrieval(bucket, key, err))?
        .into_bytes();

    let mut staged =
        NamedTempFile::new().map_err(|err| HandlerError::retrieval(bucket, key, err))?;
    staged
        .write_all(&data)
        .map_err(|err| HandlerError::retrieval(bucket, key, err))?;
    Ok(staged)
}
