//! Lazily loaded dictionary store
//!
//! A [`DictionaryStore`] reads its dictionary on first use and keeps it for
//! the rest of its lifetime. Loading happens exactly once even when many
//! threads ask at the same time; callers racing the first load block until
//! it finishes. A dictionary that cannot be read is fatal: the first lookup
//! panics rather than letting lookups run against an empty dictionary.
//!
//! The process-wide store used by [`LocalizedError::new`] is installed with
//! [`init_global`], or built from the environment on first use.
//!
//! [`LocalizedError::new`]: crate::LocalizedError::new

use crate::args::{self, Arg};
use crate::config::{Locale, StoreConfig};
use crate::dictionary::Dictionary;
use crate::error::{DictionaryError, Result};
use crate::resolver::{KeyPath, Resolution};
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

static GLOBAL: OnceLock<DictionaryStore> = OnceLock::new();

/// Dictionary loaded at most once, then shared read-only
#[derive(Debug)]
pub struct DictionaryStore {
    config: StoreConfig,
    dictionary: OnceCell<Dictionary>,
    loads: AtomicUsize,
}

impl DictionaryStore {
    /// Store that loads `config.path` on first use
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            dictionary: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// Store around an already built dictionary
    pub fn preloaded(dictionary: Dictionary, locale: impl Into<Locale>) -> Self {
        Self {
            config: StoreConfig::default().with_locale(locale),
            dictionary: OnceCell::with_value(dictionary),
            loads: AtomicUsize::new(0),
        }
    }

    /// Configuration the store was built with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Locale used for every lookup
    pub fn locale(&self) -> &Locale {
        &self.config.locale
    }

    /// Whether the dictionary is available without loading
    pub fn is_loaded(&self) -> bool {
        self.dictionary.get().is_some()
    }

    /// How many times the loader ran
    ///
    /// 0 or 1 once loading succeeded; each failed attempt also counts.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Read the configured file without caching the result
    pub fn try_load(&self) -> Result<Dictionary> {
        Dictionary::from_file(&self.config.path, self.config.format)
    }

    /// The dictionary, loading it first if needed, with load failures reported
    ///
    /// Concurrent first callers block while one of them loads. A failed load
    /// caches nothing, so a later call tries again.
    pub fn load(&self) -> Result<&Dictionary> {
        self.dictionary.get_or_try_init(|| {
            self.loads.fetch_add(1, Ordering::SeqCst);
            let dictionary = self.try_load()?;
            log::info!("loaded dictionary {}", self.config.path.display());
            Ok(dictionary)
        })
    }

    /// The dictionary, loading it first if needed
    ///
    /// # Panics
    ///
    /// Panics when the dictionary file cannot be read or decoded.
    pub fn ensure_loaded(&self) -> &Dictionary {
        match self.load() {
            Ok(dictionary) => dictionary,
            Err(e) => panic!(
                "failed to load dictionary {}: {e}",
                self.config.path.display()
            ),
        }
    }

    /// Resolve a key path with the store's locale
    pub fn resolve(&self, keys: &KeyPath, args: &[Arg]) -> Resolution {
        self.ensure_loaded().resolve(keys, self.locale(), args)
    }

    /// Resolve a dotted path such as `dict.word.sbom-form-name`
    pub fn lookup(&self, path: &str) -> Resolution {
        self.resolve(&KeyPath::parse_dotted(path), &[])
    }

    /// Render the message for an error code
    ///
    /// Dictionary-reference arguments are resolved first. The message is
    /// returned whether or not the lookup succeeded.
    pub fn error_message(&self, code: &str, args: &[Arg]) -> String {
        let dictionary = self.ensure_loaded();
        let args = args::preprocess(dictionary, self.locale(), args);
        dictionary
            .resolve(&KeyPath::error_code(code), self.locale(), &args)
            .into_message()
    }
}

/// Install the process-wide store
///
/// Fails when a store was installed before, including one created implicitly
/// by [`global`].
pub fn init_global(config: StoreConfig) -> Result<&'static DictionaryStore> {
    GLOBAL
        .set(DictionaryStore::new(config))
        .map_err(|_| DictionaryError::AlreadyInstalled)?;
    GLOBAL.get().ok_or(DictionaryError::AlreadyInstalled)
}

/// The process-wide store, created from the environment if none was installed
pub fn global() -> &'static DictionaryStore {
    GLOBAL.get_or_init(|| DictionaryStore::new(StoreConfig::from_env()))
}
