//! Plain text output formatter

use super::{MessageRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Text formatter - outputs one message per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &MessageRecord) -> Result<()> {
        writeln!(self.writer, "{}", record.message)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
