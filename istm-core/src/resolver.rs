//! Key path resolution
//!
//! Walks the dictionary along a [`KeyPath`], selects the locale leaf and
//! formats it. Resolution never fails: when the path, the locale or the leaf
//! type is wrong the result carries a diagnostic message instead of the
//! template, with `resolved` set to `false`.

use crate::args::{Arg, PATH_SEPARATOR};
use crate::config::Locale;
use crate::dictionary::Node;
use crate::format;
use std::collections::HashMap;
use std::fmt;

/// Ordered keys locating an entry, e.g. `[dict error E1234]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Build a path from its keys
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// Split a dotted path such as `dict.word.sbom-form-name`
    pub fn parse_dotted(path: &str) -> Self {
        Self::new(path.split(PATH_SEPARATOR))
    }

    /// Path of an error template: `[dict error <code>]`
    pub fn error_code(code: &str) -> Self {
        Self::new(["dict", "error", code])
    }

    /// The keys in order
    pub fn keys(&self) -> &[String] {
        &self.0
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self::parse_dotted(path)
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(keys: Vec<String>) -> Self {
        Self(keys)
    }
}

impl From<&[&str]> for KeyPath {
    fn from(keys: &[&str]) -> Self {
        Self::new(keys.iter().copied())
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Rendered message, or a diagnostic when the lookup failed
    pub message: String,
    /// `true` only for a template found and returned without arguments
    pub resolved: bool,
}

impl Resolution {
    fn found(message: String) -> Self {
        Self {
            message,
            resolved: true,
        }
    }

    fn formatted(message: String) -> Self {
        Self {
            message,
            resolved: false,
        }
    }

    fn unresolved(message: String) -> Self {
        log::debug!("dictionary lookup failed: {message}");
        Self {
            message,
            resolved: false,
        }
    }

    /// Take the message
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Resolve `keys` from `root` and render the `locale` leaf
///
/// A key whose value is not a mapping is consumed without descending, so the
/// next key is looked up in the same mapping. With arguments the template is
/// formatted and the result is reported as not resolved, even when every
/// verb matched.
pub fn resolve(
    root: &HashMap<String, Node>,
    keys: &KeyPath,
    locale: &Locale,
    args: &[Arg],
) -> Resolution {
    let mut node = root;
    for key in keys {
        match node.get(key) {
            None => return Resolution::unresolved(format!("Invalid dict of '{keys}'")),
            Some(Node::Branch(children)) => node = children,
            Some(_) => {}
        }
    }

    match node.get(locale.as_str()) {
        None => Resolution::unresolved(format!("Invalid locale for '{keys}': {locale}")),
        Some(Node::Text(template)) if args.is_empty() => Resolution::found(template.clone()),
        Some(Node::Text(template)) => Resolution::formatted(format::sprintf(template, args)),
        Some(_) => Resolution::unresolved(format!("Invalid type for '{keys}': {locale}")),
    }
}
