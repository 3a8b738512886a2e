//! rwbuf CLI library
//!
//! This library provides the command-line host for the rwbuf word buffer:
//! it feeds files or stdin into the queue, drains it, and prints the words
//! the scanner extracts along the way.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
