// Platform detection based on environment variables
//
// Auto-detects runtime environment:
// - AWS Lambda: AWS_LAMBDA_FUNCTION_NAME env var present
// - Cli: not present (default)

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Cli,
    Lambda,
}

impl Platform {
    /// Auto-detect the current platform based on environment variables
    pub fn detect() -> Self {
        if env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
            Platform::Lambda
        } else {
            Platform::Cli
        }
    }

    /// Get platform-specific defaults
    pub fn defaults(&self) -> PlatformDefaults {
        match self {
            // Local development: a database on localhost is a sane default.
            Platform::Cli => PlatformDefaults {
                database_name: "csv2pg",
                database_host: "localhost",
            },
            // In Lambda the endpoint always comes from the provisioner's
            // environment wiring; an empty host fails validation loudly
            // instead of quietly dialing localhost.
            Platform::Lambda => PlatformDefaults {
                database_name: "csv2pg",
                database_host: "",
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlatformDefaults {
    pub database_name: &'static str,
    pub database_host: &'static str,
}
