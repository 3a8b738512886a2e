//! Exclusion domain and periodic scanning for rwbuf
//!
//! This crate wraps a [`WordBuffer`](rwbuf_core::WordBuffer) in the single
//! lock shared by producers, consumers and the scanner, and runs the scanner
//! on its own thread. The periodic ticker only sends signals; it never takes
//! the lock itself.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod scanner;
pub mod shared;
pub mod sink;
pub mod ticker;
pub mod worker;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use scanner::Scanner;
pub use shared::SharedBuffer;
pub use sink::{CollectingSink, LogSink, WordSink};
pub use worker::ScanSignal;

// Re-export from core for convenience
pub use rwbuf_core::{
    BufferStats, CopyTransfer, CursorPosition, LimitedTransfer, Transfer, Word, WordBuffer,
};
