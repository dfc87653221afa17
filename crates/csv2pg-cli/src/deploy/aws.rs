//! AWS CloudFormation deployment config generator

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{Confirm, Input};
use std::fs;
use std::path::Path;

use super::names;

const TEMPLATE: &str = include_str!("../../templates/cloudformation.yaml");
const GITHUB_RELEASES_URL: &str = "https://github.com/csv2pg/csv2pg/releases/latest";

#[derive(Args)]
pub(crate) struct AwsArgs {
    /// S3 URI of the Lambda binary (e.g., s3://my-bucket/csv2pg-lambda-arm64.zip)
    #[arg(long)]
    pub lambda_s3_uri: Option<String>,

    /// CloudFormation stack name
    #[arg(long)]
    pub stack_name: Option<String>,

    /// S3 bucket name for uploads
    #[arg(long)]
    pub bucket: Option<String>,

    /// Database name created on the RDS instance
    #[arg(long, default_value = "csv2pg")]
    pub db_name: String,

    /// CloudWatch log retention in days
    #[arg(long, default_value = "7")]
    pub retention: u16,

    /// Overwrite existing file without asking
    #[arg(long)]
    pub force: bool,
}

pub(crate) fn run(args: AwsArgs) -> Result<()> {
    println!();
    println!("csv2pg deploy - AWS Lambda + S3 + RDS");
    println!();

    // Collect values via wizard or flags
    let lambda_s3_uri = match args.lambda_s3_uri {
        Some(uri) => {
            validate_s3_uri(&uri).map_err(|e| anyhow::anyhow!("Invalid S3 URI: {}", e))?;
            uri
        }
        None => {
            println!("Download the Lambda binary from:");
            println!("  {}", GITHUB_RELEASES_URL);
            println!();
            Input::new()
                .with_prompt("S3 URI of Lambda binary")
                .validate_with(validate_s3_uri)
                .interact_text()?
        }
    };

    let (lambda_bucket, lambda_key) = parse_s3_uri(&lambda_s3_uri)?;

    let default_name = names::generate();
    let stack_name = match args.stack_name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Stack name")
            .default(default_name)
            .interact_text()?,
    };

    let bucket_name = match args.bucket {
        Some(bucket) => {
            validate_bucket_name(&bucket)
                .map_err(|e| anyhow::anyhow!("Invalid bucket name: {}", e))?;
            bucket
        }
        None => Input::new()
            .with_prompt("S3 bucket name for uploads")
            .validate_with(validate_bucket_name)
            .interact_text()?,
    };

    // Check if file exists
    let output_path = Path::new("template.yaml");
    if output_path.exists() && !args.force {
        let overwrite = Confirm::new()
            .with_prompt("template.yaml already exists. Overwrite?")
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let content = render_template(
        &stack_name,
        &bucket_name,
        &args.db_name,
        args.retention,
        &lambda_bucket,
        &lambda_key,
    );

    fs::write(output_path, &content).context("Failed to write template.yaml")?;

    println!();
    println!("Created template.yaml");
    println!();
    println!("Next steps:");
    println!("  1. Deploy:");
    println!("     aws cloudformation deploy \\");
    println!("       --template-file template.yaml \\");
    println!("       --stack-name {} \\", stack_name);
    println!("       --capabilities CAPABILITY_IAM");
    println!();
    println!("  2. Upload a CSV whose name contains 'customer', 'project'");
    println!("     or 'maintenance' to s3://{}/", bucket_name);
    println!();

    Ok(())
}

fn render_template(
    stack_name: &str,
    bucket_name: &str,
    db_name: &str,
    retention: u16,
    lambda_bucket: &str,
    lambda_key: &str,
) -> String {
    TEMPLATE
        .replace("{{STACK_NAME}}", stack_name)
        .replace("{{BUCKET_NAME}}", bucket_name)
        .replace("{{DB_NAME}}", db_name)
        .replace("{{LOG_RETENTION}}", &retention.to_string())
        .replace("{{LAMBDA_S3_BUCKET}}", lambda_bucket)
        .replace("{{LAMBDA_S3_KEY}}", lambda_key)
}

#[allow(clippy::ptr_arg)]
fn validate_s3_uri(input: &String) -> Result<(), String> {
    if !input.starts_with("s3://") {
        return Err("S3 URI must start with 's3://'".to_string());
    }
    let path = input.strip_prefix("s3://").unwrap();
    if !path.contains('/') {
        return Err(
            "S3 URI must include both bucket and key (e.g., s3://bucket/key.zip)".to_string(),
        );
    }
    Ok(())
}

fn parse_s3_uri(uri: &str) -> Result<(String, String)> {
    let path = uri.strip_prefix("s3://").context("Invalid S3 URI")?;
    let (bucket, key) = path.split_once('/').context("Invalid S3 URI format")?;
    Ok((bucket.to_string(), key.to_string()))
}

#[allow(clippy::ptr_arg)]
fn validate_bucket_name(input: &String) -> Result<(), String> {
    if input.is_empty() {
        return Err("Bucket name cannot be empty".to_string());
    }
    if input.len() < 3 || input.len() > 63 {
        return Err("Bucket name must be 3-63 characters".to_string());
    }
    if !input
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(
            "Bucket name must contain only lowercase letters, numbers, and hyphens".to_string(),
        );
    }
    if input.starts_with('-') || input.ends_with('-') {
        return Err("Bucket name cannot start or end with a hyphen".to_string());
    }
    Ok(())
}
