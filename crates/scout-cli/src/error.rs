//! CLI error types.

use scout_core::ScoutError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The command cannot produce the requested format.
    #[error("The {command} command does not support --format {format}")]
    UnsupportedFormat {
        /// Command name.
        command: &'static str,
        /// Requested format.
        format: &'static str,
    },

    /// Error from loading or assembly.
    #[error(transparent)]
    Scout(#[from] ScoutError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
