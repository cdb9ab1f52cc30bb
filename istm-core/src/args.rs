//! Formatting arguments and dictionary-reference preprocessing

use crate::config::Locale;
use crate::dictionary::Dictionary;
use crate::format;
use crate::resolver::KeyPath;
use std::fmt;

/// Separator that marks a text argument as a dictionary key path
pub const PATH_SEPARATOR: char = '.';

/// A value substituted into a message template
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Text, possibly a dotted dictionary path
    Text(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    Uint(u64),
    /// Floating point number
    Float(f64),
    /// Boolean
    Bool(bool),
}

/// How an argument takes part in formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgRef {
    /// Used as given
    Literal,
    /// Looked up in the dictionary before formatting
    DictRef(KeyPath),
}

impl Arg {
    /// Type name used in formatting diagnostics (`%!d(string=...)`)
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Text(_) => "string",
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint",
            Arg::Float(_) => "float64",
            Arg::Bool(_) => "bool",
        }
    }

    /// Whether the argument is a number
    pub fn is_numeric(&self) -> bool {
        matches!(self, Arg::Int(_) | Arg::Uint(_) | Arg::Float(_))
    }

    /// Text containing a `.` refers to a dictionary entry; anything else is literal
    pub fn classify(&self) -> ArgRef {
        match self {
            Arg::Text(text) if text.contains(PATH_SEPARATOR) => {
                ArgRef::DictRef(KeyPath::parse_dotted(text))
            }
            _ => ArgRef::Literal,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(text) => f.write_str(text),
            Arg::Int(n) => write!(f, "{n}"),
            Arg::Uint(n) => write!(f, "{n}"),
            Arg::Float(v) => f.write_str(&format::float_value(*v)),
            Arg::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Arg::Text(text.to_string())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Arg::Text(text)
    }
}

impl From<&String> for Arg {
    fn from(text: &String) -> Self {
        Arg::Text(text.clone())
    }
}

impl From<char> for Arg {
    fn from(ch: char) -> Self {
        Arg::Text(ch.to_string())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($variant:ident, $target:ty, $($source:ty),+) => {
        $(
            impl From<$source> for Arg {
                fn from(n: $source) -> Self {
                    Arg::$variant(<$target>::from(n))
                }
            }
        )+
    };
}

impl_from_number!(Int, i64, i8, i16, i32, i64);
impl_from_number!(Uint, u64, u8, u16, u32, u64);
impl_from_number!(Float, f64, f32, f64);

impl From<isize> for Arg {
    fn from(n: isize) -> Self {
        Arg::Int(n as i64)
    }
}

impl From<usize> for Arg {
    fn from(n: usize) -> Self {
        Arg::Uint(n as u64)
    }
}

/// Replace dictionary-reference arguments by their resolved text
///
/// A reference that does not resolve keeps its original text, so the path
/// itself ends up in the message.
pub fn preprocess(dictionary: &Dictionary, locale: &Locale, args: &[Arg]) -> Vec<Arg> {
    args.iter()
        .map(|arg| match arg.classify() {
            ArgRef::DictRef(path) => {
                let resolution = dictionary.resolve(&path, locale, &[]);
                if resolution.resolved {
                    Arg::Text(resolution.message)
                } else {
                    arg.clone()
                }
            }
            ArgRef::Literal => arg.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_yaml_str(
            r#"
dict:
  word:
    sbom-form-name:
      jp: "名前"
      en: "Name"
    english-only:
      en: "English"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_classify() {
        assert_eq!(Arg::from("名前").classify(), ArgRef::Literal);
        assert_eq!(Arg::from(2).classify(), ArgRef::Literal);
        assert_eq!(Arg::from(2.5).classify(), ArgRef::Literal);
        assert_eq!(
            Arg::from("dict.word.sbom-form-name").classify(),
            ArgRef::DictRef(KeyPath::new(["dict", "word", "sbom-form-name"]))
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Arg::from("x").type_name(), "string");
        assert_eq!(Arg::from(-1i32).type_name(), "int");
        assert_eq!(Arg::from(1u8).type_name(), "uint");
        assert_eq!(Arg::from(1.0f32).type_name(), "float64");
        assert_eq!(Arg::from(true).type_name(), "bool");
    }

    #[test]
    fn test_number_conversions() {
        assert_eq!(Arg::from(7usize), Arg::Uint(7));
        assert_eq!(Arg::from(-7isize), Arg::Int(-7));
        assert_eq!(Arg::from(u64::MAX), Arg::Uint(u64::MAX));
        assert_eq!(Arg::from('x'), Arg::Text("x".to_string()));
    }

    #[test]
    fn test_display_matches_value_verb() {
        assert_eq!(Arg::from("abc").to_string(), "abc");
        assert_eq!(Arg::from(-3).to_string(), "-3");
        assert_eq!(Arg::from(2.5).to_string(), "2.5");
        assert_eq!(Arg::from(false).to_string(), "false");
    }

    #[test]
    fn test_preprocess_resolves_reference() {
        let args = preprocess(
            &dictionary(),
            &Locale::default(),
            &[Arg::from("dict.word.sbom-form-name"), Arg::from(2)],
        );
        assert_eq!(args, vec![Arg::from("名前"), Arg::from(2)]);
    }

    #[test]
    fn test_preprocess_uses_locale() {
        let args = preprocess(
            &dictionary(),
            &Locale::new("en"),
            &[Arg::from("dict.word.sbom-form-name")],
        );
        assert_eq!(args, vec![Arg::from("Name")]);
    }

    #[test]
    fn test_preprocess_keeps_unresolved_reference() {
        let args = preprocess(
            &dictionary(),
            &Locale::default(),
            &[
                Arg::from("dict.word.unknown"),
                Arg::from("dict.word.english-only"),
                Arg::from("v1.2"),
            ],
        );
        assert_eq!(
            args,
            vec![
                Arg::from("dict.word.unknown"),
                Arg::from("dict.word.english-only"),
                Arg::from("v1.2"),
            ]
        );
    }

    #[test]
    fn test_preprocess_keeps_literals_in_order() {
        let input = vec![Arg::from("a"), Arg::from(1), Arg::from(true), Arg::from(0.5)];
        assert_eq!(preprocess(&dictionary(), &Locale::default(), &input), input);
    }
}
