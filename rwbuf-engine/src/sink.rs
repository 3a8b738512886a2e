//! Destinations for scanned words

use crate::error::Result;
use log::info;
use parking_lot::Mutex;
use rwbuf_core::Word;
use std::sync::Arc;

/// Receives every word the scanner extracts
pub trait WordSink: Send {
    /// Accept one word
    fn emit(&mut self, word: &Word) -> Result<()>;

    /// Flush buffered output; called when the scanner stops
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: WordSink + ?Sized> WordSink for Box<S> {
    fn emit(&mut self, word: &Word) -> Result<()> {
        (**self).emit(word)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// Writes each word to the `log` facade at info level
#[derive(Debug, Default)]
pub struct LogSink;

impl WordSink for LogSink {
    fn emit(&mut self, word: &Word) -> Result<()> {
        info!(target: "rwbuf::words", "{}", word);
        Ok(())
    }
}

/// Keeps every word in a shared vector
///
/// Clones share the same storage, so a test can hand one clone to the
/// scanner and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    words: Arc<Mutex<Vec<Word>>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the words collected so far
    pub fn words(&self) -> Vec<Word> {
        self.words.lock().clone()
    }

    /// Number of words collected so far
    pub fn len(&self) -> usize {
        self.words.lock().len()
    }

    /// True if nothing was collected
    pub fn is_empty(&self) -> bool {
        self.words.lock().is_empty()
    }
}

impl WordSink for CollectingSink {
    fn emit(&mut self, word: &Word) -> Result<()> {
        self.words.lock().push(word.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_clones_share_storage() {
        let sink = CollectingSink::new();
        let mut writer = sink.clone();

        writer.emit(&Word::from(&b"shared"[..])).unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.words()[0].as_bytes(), b"shared");
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let sink = CollectingSink::new();
        let mut boxed: Box<dyn WordSink> = Box::new(sink.clone());

        boxed.emit(&Word::from(&b"boxed"[..])).unwrap();
        boxed.flush().unwrap();
        assert_eq!(sink.len(), 1);
    }
}
