//! Configuration module

use crate::error::CliError;
use istm_core::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration file structure
///
/// ```toml
/// [dictionary]
/// path = "config.yaml"
/// locale = "jp"
/// ```
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Dictionary store configuration
    #[serde(default)]
    pub dictionary: StoreConfig,
}

impl CliConfig {
    /// Read a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Store configuration after command-line overrides
    pub fn store_config(self, dict: Option<PathBuf>, locale: Option<String>) -> StoreConfig {
        let mut config = self.dictionary;
        if let Some(path) = dict {
            config.path = path;
            config.format = None;
        }
        if let Some(locale) = locale {
            config = config.with_locale(locale);
        }
        config
    }
}
