//! Output formatting module
//!
//! Formatters implement the engine's [`WordSink`] so the scan worker can
//! write to them directly.

use rwbuf_engine::{LogSink, WordSink};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One word per line (or per configured separator)
    #[default]
    Text,
    /// JSON array of words with their scan order
    Json,
    /// Each word as an info record on the `rwbuf::words` log target
    Log,
}

impl OutputFormat {
    /// Log level the logger needs for this format to produce anything
    pub fn min_verbosity(self) -> u8 {
        match self {
            OutputFormat::Log => 1,
            OutputFormat::Text | OutputFormat::Json => 0,
        }
    }
}

/// Build a sink for `format` that writes to stdout
pub fn stdout_sink(format: OutputFormat, separator: &str) -> Box<dyn WordSink> {
    writer_sink(format, separator, io::stdout())
}

/// Build a sink for `format` around any writer
pub fn writer_sink<W>(format: OutputFormat, separator: &str, writer: W) -> Box<dyn WordSink>
where
    W: Write + Send + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_separator(writer, separator)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Log => Box::new(LogSink),
    }
}
