//! Plain text output formatter

use rwbuf_engine::{EngineError, Word, WordSink};
use std::io::{self, Write};

/// Plain text formatter - writes each word followed by a separator
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter with one word per line
    pub fn new(writer: W) -> Self {
        Self::with_separator(writer, "\n")
    }

    /// Create a text formatter that writes `separator` after every word
    pub fn with_separator(writer: W, separator: &str) -> Self {
        Self {
            writer,
            separator: separator.to_string(),
        }
    }

    /// Take back the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> WordSink for TextFormatter<W> {
    fn emit(&mut self, word: &Word) -> Result<(), EngineError> {
        self.writer.write_all(word.as_bytes())?;
        self.writer.write_all(self.separator.as_bytes())?;
        // Words trickle in one per tick; show each as it arrives.
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), EngineError> {
        self.writer.flush()?;
        Ok(())
    }
}
