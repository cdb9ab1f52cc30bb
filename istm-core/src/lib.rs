//! Localized structured errors
//!
//! Error messages live in a nested dictionary file, one template per locale:
//!
//! ```yaml
//! dict:
//!   word:
//!     sbom-form-name:
//!       jp: "名前"
//!       en: "Name"
//!   error:
//!     E1236:
//!       jp: "'%s'の数値が不正です: %d"
//!       en: "The number of '%s' is invalid: %d"
//! ```
//!
//! [`LocalizedError`] renders `dict.error.<code>` with printf-style arguments.
//! Text arguments containing a `.` are dictionary paths and are resolved
//! before formatting, so `localized_error!("E1236", "dict.word.sbom-form-name", 2)`
//! reads `'名前'の数値が不正です: 2`. A [`LocalizedError`] wrapped in other
//! errors is recovered with [`unwrap_error`].

#![warn(missing_docs)]

pub mod args;
pub mod chain;
pub mod config;
pub mod decorate;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod localized;
pub mod resolver;
pub mod store;

// Re-export key types
pub use args::{preprocess, Arg, ArgRef};
pub use chain::{find_localized, unwrap_error, ErrorChain};
pub use config::{DictionaryFormat, Locale, StoreConfig};
pub use decorate::{DecorateExt, Decorated, RUNTIME_ERROR};
pub use dictionary::{Dictionary, Node};
pub use error::{DictionaryError, Result};
pub use format::sprintf;
pub use localized::LocalizedError;
pub use resolver::{KeyPath, Resolution};
pub use store::{global, init_global, DictionaryStore};
