//! Localized structured error

use crate::args::Arg;
use crate::store::{self, DictionaryStore};
use thiserror::Error;

/// Error whose message comes from the `dict.error.<code>` dictionary entry
///
/// The message is rendered once, at construction. Only the rendered text is
/// kept; the error code and the arguments are not retained.
///
/// ```no_run
/// use istm_core::{localized_error, LocalizedError};
///
/// // Error code only
/// let err = LocalizedError::new("E1234", &[]);
/// // Arguments may name dictionary entries ...
/// let err = localized_error!("E1235", "dict.word.sbom-form-name");
/// // ... or be used as they are
/// let err = localized_error!("E1236", "名前", 2);
/// println!("{err}");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LocalizedError {
    message: String,
}

impl LocalizedError {
    /// Build the error from the process-wide dictionary
    ///
    /// # Panics
    ///
    /// Panics on first use if the global dictionary cannot be loaded.
    pub fn new(code: &str, args: &[Arg]) -> Self {
        Self::with_store(store::global(), code, args)
    }

    /// Build the error from a given store
    pub fn with_store(store: &DictionaryStore, code: &str, args: &[Arg]) -> Self {
        Self {
            message: store.error_message(code, args),
        }
    }

    /// The localized message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Take the localized message
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Build a [`LocalizedError`] from an error code and any number of arguments
///
/// Each argument is converted with `Arg::from`.
#[macro_export]
macro_rules! localized_error {
    ($code:expr $(,)?) => {
        $crate::LocalizedError::new($code, &[])
    };
    ($code:expr, $($arg:expr),+ $(,)?) => {
        $crate::LocalizedError::new($code, &[$($crate::Arg::from($arg)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dictionary;

    fn store() -> DictionaryStore {
        let dictionary = Dictionary::from_yaml_str(
            r#"
dict:
  word:
    sbom-form-name:
      jp: "名前"
      en: "Name"
  error:
    E1234:
      jp: テストエラー
      en: the test error
    E1235:
      jp: "'%s'の型が不正です"
      en: "'%s' is invalid type"
    E1236:
      jp: "'%s'の数値が不正です: %d"
      en: "The number of '%s' is invalid: %d"
"#,
        )
        .unwrap();
        DictionaryStore::preloaded(dictionary, "jp")
    }

    #[test]
    fn test_code_only() {
        let err = LocalizedError::with_store(&store(), "E1234", &[]);
        assert_eq!(err.message(), "テストエラー");
        assert_eq!(err.to_string(), "テストエラー");
    }

    #[test]
    fn test_dictionary_argument() {
        let err = LocalizedError::with_store(
            &store(),
            "E1236",
            &[Arg::from("dict.word.sbom-form-name"), Arg::from(2)],
        );
        assert_eq!(err.message(), "'名前'の数値が不正です: 2");
    }

    #[test]
    fn test_literal_argument() {
        let err = LocalizedError::with_store(&store(), "E1235", &[Arg::from("名前")]);
        assert_eq!(err.message(), "'名前'の型が不正です");
    }

    #[test]
    fn test_unresolved_argument_kept() {
        let err = LocalizedError::with_store(&store(), "E1235", &[Arg::from("dict.word.nope")]);
        assert_eq!(err.message(), "'dict.word.nope'の型が不正です");
    }

    #[test]
    fn test_unknown_code_is_diagnostic() {
        let err = LocalizedError::with_store(&store(), "E9999", &[]);
        assert_eq!(err.message(), "Invalid dict of '[dict error E9999]'");
    }

    #[test]
    fn test_into_message() {
        let err = LocalizedError::with_store(&store(), "E1234", &[]);
        assert_eq!(err.clone().into_message(), err.message());
    }

    #[test]
    fn test_is_std_error() {
        let err = LocalizedError::with_store(&store(), "E1234", &[]);
        let dynamic: &dyn std::error::Error = &err;
        assert!(dynamic.source().is_none());
    }
}
