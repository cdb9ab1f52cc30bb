//! Error handling for the CLI application

use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or decoded
    #[error("Configuration error in {}: {message}", path.display())]
    ConfigError {
        /// Path of the configuration file
        path: PathBuf,
        /// What went wrong
        message: String,
    },
    /// Dictionary failed to load
    #[error("Dictionary error: {0}")]
    DictionaryError(#[from] istm_core::DictionaryError),
    /// A key path did not resolve
    #[error("Unresolved key path: {0}")]
    Unresolved(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
