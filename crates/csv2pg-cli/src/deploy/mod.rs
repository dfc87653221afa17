//! Deployment configuration generators

use anyhow::Result;
use clap::Subcommand;

mod aws;
mod names;

#[derive(Subcommand)]
pub(crate) enum DeployCommand {
    /// Generate a CloudFormation template (VPC + S3 + RDS + Lambda)
    Aws(aws::AwsArgs),
}

impl DeployCommand {
    pub(crate) fn run(self) -> Result<()> {
        match self {
            DeployCommand::Aws(args) => aws::run(args),
        }
    }
}
