//! CLI error types.

use thiserror::Error;

use nivesh_config::ConfigError;
use nivesh_core::NiveshError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Limits file could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Calculation request was rejected.
    #[error("Calculation error: {0}")]
    Calculation(#[from] NiveshError),

    /// No limits file was given.
    #[error("No limits file given (use --config or set NIVESH_CONFIG)")]
    NoConfigFile,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
