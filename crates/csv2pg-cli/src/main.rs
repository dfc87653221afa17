use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use csv2pg_config::{LogFormat, RuntimeConfig};
use std::path::{Path, PathBuf};

mod deploy;
mod ingest;

/// CSV upload ingestion for PostgreSQL
#[derive(Parser)]
#[command(name = "csv2pg")]
#[command(version)]
#[command(about = "Ingest classified CSV uploads into PostgreSQL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'v', long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a local CSV file into the configured database
    Ingest {
        /// CSV file whose name selects the destination table
        file: PathBuf,
    },
    /// Generate deployment configuration for AWS
    #[command(alias = "deploy")]
    Create {
        #[command(subcommand)]
        platform: deploy::DeployCommand,
    },
}

fn main() -> Result<()> {
    let Cli {
        command,
        config,
        log_level,
    } = Cli::parse();

    match command {
        Commands::Create { platform } => platform.run(),
        Commands::Ingest { file } => {
            let mut runtime_config = load_config(config.as_deref())?;
            if let Some(level) = log_level {
                runtime_config.log.level = level;
            }
            init_tracing(&runtime_config);

            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to build tokio runtime")?
                .block_on(ingest::run(&runtime_config, &file))
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<RuntimeConfig> {
    match path {
        Some(path) => RuntimeConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => RuntimeConfig::load().context("Failed to load configuration"),
    }
}

fn init_tracing(config: &RuntimeConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.level.clone()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
