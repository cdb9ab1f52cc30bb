//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One rendered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Error code or dotted key path that produced the message
    pub key: String,
    /// Locale used for the lookup
    pub locale: String,
    /// Rendered message or diagnostic
    pub message: String,
    /// Resolver outcome, when the command has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single message
    fn format_record(&mut self, record: &MessageRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The message text, one per line
    Text,
    /// JSON array of records
    Json,
}

impl OutputFormat {
    /// Formatter writing to `writer`
    pub fn formatter<'a, W: std::io::Write + 'a>(self, writer: W) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
