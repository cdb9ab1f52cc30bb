//! Store configuration

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming the dictionary file
pub const DICT_PATH_ENV: &str = "ISTM_DICT";

/// Environment variable selecting the locale
pub const LOCALE_ENV: &str = "ISTM_LOCALE";

/// Dictionary file used when nothing else is configured
pub const DEFAULT_DICT_PATH: &str = "config.yaml";

/// Locale used when nothing else is configured
pub const DEFAULT_LOCALE: &str = "jp";

/// Locale identifier selecting a leaf under a dictionary entry (`jp`, `en`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from its identifier
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Identifier as used for dictionary keys
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// On-disk syntax of a dictionary file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryFormat {
    /// YAML mapping
    Yaml,
    /// TOML tables
    Toml,
}

impl DictionaryFormat {
    /// Pick the format from a file extension, defaulting to YAML
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => DictionaryFormat::Toml,
            _ => DictionaryFormat::Yaml,
        }
    }
}

/// Where a store loads its dictionary from and which locale it renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Dictionary file, relative paths resolve against the working directory
    pub path: PathBuf,

    /// Locale used for every lookup made through the store
    pub locale: Locale,

    /// Explicit file format (detected from the extension when absent)
    pub format: Option<DictionaryFormat>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICT_PATH),
            locale: Locale::default(),
            format: None,
        }
    }
}

impl StoreConfig {
    /// Configuration for a dictionary file with the default locale
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `ISTM_DICT` and `ISTM_LOCALE`
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var_os(key))
    }

    /// Defaults overridden by the variables `lookup` returns
    ///
    /// Empty values count as unset. A locale that is not valid UTF-8 is
    /// ignored.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(DICT_PATH_ENV).filter(|p| !p.is_empty()) {
            config.path = PathBuf::from(path);
        }
        if let Some(locale) = lookup(LOCALE_ENV).and_then(|l| l.into_string().ok()) {
            if !locale.is_empty() {
                config.locale = Locale::new(locale);
            }
        }
        config
    }

    /// Set the locale
    pub fn with_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the file format explicitly
    pub fn with_format(mut self, format: DictionaryFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Format to decode the file with
    pub fn resolved_format(&self) -> DictionaryFormat {
        self.format
            .unwrap_or_else(|| DictionaryFormat::from_path(&self.path))
    }
}
