//! Nested message dictionary
//!
//! A dictionary is a tree of string-keyed mappings. Leaves are locale
//! mappings (`jp: "..."`, `en: "..."`) holding message templates:
//!
//! ```yaml
//! dict:
//!   word:
//!     sbom-form-name:
//!       jp: "名前"
//!   error:
//!     E1236:
//!       jp: "'%s'の数値が不正です: %d"
//! ```

use crate::args::Arg;
use crate::config::{DictionaryFormat, Locale};
use crate::error::{DictionaryError, Result};
use crate::resolver::{self, KeyPath, Resolution};
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A value in the dictionary tree
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Text leaf, a message template when it sits under a locale key
    Text(String),
    /// Nested mapping
    Branch(HashMap<String, Node>),
    /// Numbers, booleans, sequences and nulls; never rendered
    Other(IgnoredAny),
}

impl Node {
    /// Child mapping if this node is a branch
    pub fn as_branch(&self) -> Option<&HashMap<String, Node>> {
        match self {
            Node::Branch(children) => Some(children),
            _ => None,
        }
    }

    /// Text if this node is a text leaf
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Parsed dictionary, immutable once built
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: HashMap<String, Node>,
}

impl Dictionary {
    /// Build a dictionary from an already decoded root mapping
    pub fn from_root(root: HashMap<String, Node>) -> Self {
        Self { root }
    }

    /// Decode a YAML document whose root is a mapping
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(Self::from_root(serde_yaml::from_str(source)?))
    }

    /// Decode a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(Self::from_root(toml::from_str(source)?))
    }

    /// Decode `source` in the given format
    pub fn parse(source: &str, format: DictionaryFormat) -> Result<Self> {
        match format {
            DictionaryFormat::Yaml => Self::from_yaml_str(source),
            DictionaryFormat::Toml => Self::from_toml_str(source),
        }
    }

    /// Read and decode a dictionary file
    ///
    /// The format is taken from the file extension unless given explicitly.
    pub fn from_file(path: impl AsRef<Path>, format: Option<DictionaryFormat>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let format = format.unwrap_or_else(|| DictionaryFormat::from_path(path));
        Self::parse(&source, format)
    }

    /// Top-level mapping
    pub fn root(&self) -> &HashMap<String, Node> {
        &self.root
    }

    /// Whether the dictionary has no entries at all
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Resolve `keys` for `locale`, formatting the template with `args`
    pub fn resolve(&self, keys: &KeyPath, locale: &Locale, args: &[Arg]) -> Resolution {
        resolver::resolve(&self.root, keys, locale, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const YAML: &str = r#"
dict:
  word:
    sbom-form-name:
      jp: "名前"
      en: "Name"
  error:
    E1234:
      jp: テストエラー
      en: the test error
    E2001:
      jp: 42
"#;

    const TOML: &str = r#"
[dict.word.sbom-form-name]
jp = "名前"
en = "Name"

[dict.error.E1234]
jp = "テストエラー"
en = "the test error"
"#;

    fn text_at<'a>(dictionary: &'a Dictionary, keys: &[&str]) -> Option<&'a str> {
        let (last, branches) = keys.split_last()?;
        let mut node = dictionary.root();
        for key in branches {
            node = node.get(*key)?.as_branch()?;
        }
        node.get(*last)?.as_text()
    }

    #[test]
    fn test_parse_yaml() {
        let dictionary = Dictionary::from_yaml_str(YAML).unwrap();
        assert_eq!(
            text_at(&dictionary, &["dict", "word", "sbom-form-name", "jp"]),
            Some("名前")
        );
        assert_eq!(
            text_at(&dictionary, &["dict", "error", "E1234", "en"]),
            Some("the test error")
        );
    }

    #[test]
    fn test_non_text_leaf_is_other() {
        let dictionary = Dictionary::from_yaml_str(YAML).unwrap();
        let entry = dictionary.root()["dict"].as_branch().unwrap()["error"]
            .as_branch()
            .unwrap()["E2001"]
            .as_branch()
            .unwrap();
        assert!(matches!(entry["jp"], Node::Other(_)));
    }

    #[test]
    fn test_parse_toml() {
        let dictionary = Dictionary::from_toml_str(TOML).unwrap();
        assert_eq!(
            text_at(&dictionary, &["dict", "word", "sbom-form-name", "jp"]),
            Some("名前")
        );
        assert_eq!(
            text_at(&dictionary, &["dict", "error", "E1234", "jp"]),
            Some("テストエラー")
        );
    }

    #[test]
    fn test_root_must_be_mapping() {
        assert!(matches!(
            Dictionary::from_yaml_str("- a\n- b\n"),
            Err(DictionaryError::Yaml(_))
        ));
        assert!(matches!(
            Dictionary::from_yaml_str("dict: [unclosed"),
            Err(DictionaryError::Yaml(_))
        ));
        assert!(matches!(
            Dictionary::from_toml_str("dict = "),
            Err(DictionaryError::Toml(_))
        ));
    }

    #[test]
    fn test_from_file_detects_format() {
        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(yaml, "{YAML}").unwrap();
        let dictionary = Dictionary::from_file(yaml.path(), None).unwrap();
        assert!(!dictionary.is_empty());

        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(toml_file, "{TOML}").unwrap();
        let dictionary = Dictionary::from_file(toml_file.path(), None).unwrap();
        assert_eq!(
            text_at(&dictionary, &["dict", "error", "E1234", "en"]),
            Some("the test error")
        );
    }

    #[test]
    fn test_from_file_explicit_format() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{TOML}").unwrap();
        let dictionary = Dictionary::from_file(file.path(), Some(DictionaryFormat::Toml)).unwrap();
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn test_from_file_missing() {
        match Dictionary::from_file("definitely/not/here.yaml", None) {
            Err(DictionaryError::Io { path, .. }) => {
                assert_eq!(path, Path::new("definitely/not/here.yaml"));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
