//! Dictionary load errors
//!
//! Lookups never produce these: a missing key, locale or template is reported
//! inside the resolved string. Only reading and decoding the dictionary source
//! can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the dictionary file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The YAML source is malformed or its root is not a mapping
    #[error("failed to decode YAML dictionary: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The TOML source is malformed
    #[error("failed to decode TOML dictionary: {0}")]
    Toml(#[from] toml::de::Error),

    /// A process-wide store was installed before
    #[error("a global dictionary store is already installed")]
    AlreadyInstalled,
}

/// Result type for dictionary loading
pub type Result<T> = std::result::Result<T, DictionaryError>;
