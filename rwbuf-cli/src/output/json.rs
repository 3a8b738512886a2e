//! JSON output formatter

use rwbuf_engine::{EngineError, Word, WordSink};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs words as a JSON array when flushed
pub struct JsonFormatter<W: Write> {
    writer: W,
    words: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WordData {
    /// Position of the word in scan order, starting at 0
    pub index: usize,
    /// The word, with invalid UTF-8 replaced
    pub text: String,
    /// Length of the word in bytes
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            words: Vec::new(),
        }
    }

    /// Take back the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> WordSink for JsonFormatter<W> {
    fn emit(&mut self, word: &Word) -> Result<(), EngineError> {
        self.words.push(WordData {
            index: self.words.len(),
            text: word.to_string_lossy(),
            length: word.len(),
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<(), EngineError> {
        serde_json::to_writer_pretty(&mut self.writer, &self.words)
            .map_err(|e| EngineError::Sink(e.to_string()))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        self.words.clear();
        Ok(())
    }
}
