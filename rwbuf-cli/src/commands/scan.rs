//! Scan command implementation
//!
//! Builds a buffer from the given inputs, one fragment per input, and pulls
//! words from the cursor directly without any background threads. Useful
//! for seeing exactly how the cursor walks and wraps.

use crate::input::InputSource;
use crate::output::{stdout_sink, OutputFormat};
use anyhow::Result;
use clap::Args;
use rwbuf_core::{CopyTransfer, WordBuffer};
use rwbuf_engine::WordSink;
use std::io::BufRead;
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Input file; each file becomes one fragment
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Literal text; each occurrence becomes one fragment
    #[arg(short, long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Number of words to pull from the cursor
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose.max(self.format.min_verbosity()), false);

        let buffer = self.build_buffer()?;
        log::info!(
            "scanning {} fragments, {} bytes",
            buffer.stats().fragments,
            buffer.len()
        );

        let mut sink = stdout_sink(self.format, "\n");
        for word in self.collect_words(buffer) {
            sink.emit(&word)?;
        }
        sink.flush()?;
        Ok(())
    }

    /// Enqueue every input as its own fragment.
    ///
    /// With no `--input` and no `--text`, each line of stdin is a fragment.
    pub fn build_buffer(&self) -> Result<WordBuffer> {
        let mut buffer = WordBuffer::new();
        let mut transfer = CopyTransfer;

        if self.input.is_empty() && self.text.is_empty() {
            let mut reader = InputSource::Stdin.open()?;
            let mut line = Vec::new();
            while reader.read_until(b'\n', &mut line)? > 0 {
                buffer.try_enqueue(&line, &mut transfer)?;
                line.clear();
            }
            return Ok(buffer);
        }

        for path in &self.input {
            let bytes = InputSource::File(path.clone()).read_all()?;
            buffer.try_enqueue(&bytes, &mut transfer)?;
        }
        for text in &self.text {
            buffer.try_enqueue(text.as_bytes(), &mut transfer)?;
        }
        Ok(buffer)
    }

    /// Pull up to `count` words, stopping early when none is available
    pub fn collect_words(&self, mut buffer: WordBuffer) -> Vec<rwbuf_core::Word> {
        (0..self.count).map_while(|_| buffer.next_word()).collect()
    }
}
