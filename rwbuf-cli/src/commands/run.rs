//! Run command implementation
//!
//! Hosts all three collaborators at once: the main thread is the producer,
//! the engine's scanner prints words on its own cadence, and once the input
//! is exhausted and the linger time has passed, the queue is drained.

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{ChunkReader, InputSource};
use crate::output::{stdout_sink, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use rwbuf_engine::{CopyTransfer, LimitedTransfer, Scanner, SharedBuffer, Transfer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Input file ("-" or omitted for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bytes per enqueued fragment
    #[arg(long, value_name = "BYTES")]
    pub chunk_size: Option<usize>,

    /// Bytes requested per dequeue while draining
    #[arg(long, value_name = "BYTES")]
    pub drain_size: Option<usize>,

    /// Milliseconds between scan ticks
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Milliseconds to keep scanning after the input is exhausted
    #[arg(long, value_name = "MS")]
    pub linger_ms: Option<u64>,

    /// Write drained bytes to this file (default: discard)
    #[arg(long, value_name = "FILE")]
    pub drain_to: Option<PathBuf>,

    /// Make the producer's transfer fail after this many bytes
    #[arg(long, value_name = "BYTES")]
    pub fault_after: Option<usize>,

    /// Output format for scanned words
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Byte counts reported at the end of a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Bytes accepted by the queue
    pub enqueued: usize,
    /// Chunks the queue refused
    pub rejected_chunks: usize,
    /// Bytes drained from the queue
    pub drained: usize,
    /// Words the scanner emitted
    pub words: u64,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> Result<()> {
        let config = self.effective_config()?;
        super::init_logging(
            self.verbose.max(config.output.format.min_verbosity()),
            self.quiet,
        );
        log::debug!("effective configuration: {:?}", config);

        let summary = self.run(&config)?;
        eprintln!(
            "enqueued {} bytes ({} chunks rejected), drained {} bytes, scanned {} words",
            summary.enqueued, summary.rejected_chunks, summary.drained, summary.words
        );
        Ok(())
    }

    /// Configuration file values with command-line overrides applied
    pub fn effective_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;

        if let Some(chunk_size) = self.chunk_size {
            config.queue.chunk_size = chunk_size;
        }
        if let Some(drain_size) = self.drain_size {
            config.queue.drain_size = drain_size;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.scan.interval_ms = interval_ms;
        }
        if let Some(linger_ms) = self.linger_ms {
            config.scan.linger_ms = linger_ms;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }

        config.validate()?;
        Ok(config)
    }

    fn run(&self, config: &CliConfig) -> Result<RunSummary> {
        let buffer = SharedBuffer::new();
        let sink = stdout_sink(config.output.format, &config.output.separator);
        let scanner = Scanner::start(buffer.clone(), sink, &config.to_engine_config())
            .map_err(CliError::from)?;

        let mut summary = RunSummary::default();
        let produced = self.produce(&buffer, config.queue.chunk_size, &mut summary);

        if produced.is_ok() {
            thread::sleep(Duration::from_millis(config.scan.linger_ms));
        }

        let (_, stats) = scanner.shutdown().map_err(CliError::from)?;
        summary.words = stats.words;
        produced?;

        summary.drained = self.drain(&buffer, config.queue.drain_size)?;
        Ok(summary)
    }

    /// Feed the input into the buffer chunk by chunk
    fn produce(
        &self,
        buffer: &SharedBuffer,
        chunk_size: usize,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let source = InputSource::from_arg(self.input.as_deref());
        let mut transfer: Box<dyn Transfer> = match self.fault_after {
            Some(budget) => Box::new(LimitedTransfer::new(budget)),
            None => Box::new(CopyTransfer),
        };

        for chunk in ChunkReader::new(source.open()?, chunk_size) {
            let chunk = chunk.with_context(|| format!("Failed to read input: {}", source))?;
            match buffer.enqueue(&chunk, transfer.as_mut()) {
                0 => summary.rejected_chunks += 1,
                accepted => summary.enqueued += accepted,
            }
        }

        log::info!(
            "producer finished: {} bytes in {} fragments",
            summary.enqueued,
            buffer.stats().fragments
        );
        Ok(())
    }

    /// Empty the buffer into `--drain-to`, or discard the bytes
    fn drain(&self, buffer: &SharedBuffer, drain_size: usize) -> Result<usize> {
        let mut out: Box<dyn Write> = match &self.drain_to {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create drain file: {}", path.display())
            })?)),
            None => Box::new(io::sink()),
        };

        let mut chunk = vec![0u8; drain_size];
        let mut drained = 0;
        loop {
            let n = buffer.dequeue(&mut chunk, &mut CopyTransfer);
            if n == 0 {
                break;
            }
            out.write_all(&chunk[..n])?;
            drained += n;
        }
        out.flush()?;

        log::info!("consumer drained {} bytes", drained);
        Ok(drained)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_args(input: PathBuf) -> RunArgs {
        RunArgs {
            input: Some(input),
            config: None,
            chunk_size: Some(8),
            drain_size: Some(5),
            interval_ms: Some(5),
            linger_ms: Some(0),
            drain_to: None,
            fault_after: None,
            format: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let args = run_args(PathBuf::from("unused"));
        let config = args.effective_config().unwrap();

        assert_eq!(config.queue.chunk_size, 8);
        assert_eq!(config.queue.drain_size, 5);
        assert_eq!(config.scan.interval_ms, 5);
        assert_eq!(config.scan.lock_timeout_ms, 250);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let args = RunArgs {
            chunk_size: Some(0),
            ..run_args(PathBuf::from("unused"))
        };
        assert!(args.effective_config().is_err());
    }

    #[test]
    fn test_run_drains_everything_in_order() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("drained.txt");
        let content = "the quick brown fox jumps over the lazy dog\n";
        std::fs::write(&input, content).unwrap();

        let args = RunArgs {
            drain_to: Some(output.clone()),
            ..run_args(input)
        };
        let config = args.effective_config().unwrap();
        let summary = args.run(&config).unwrap();

        assert_eq!(summary.enqueued, content.len());
        assert_eq!(summary.rejected_chunks, 0);
        assert_eq!(summary.drained, content.len());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), content);
    }

    #[test]
    fn test_fault_rejects_whole_chunks() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        std::fs::write(&input, "0123456789abcdefghij").unwrap();

        let args = RunArgs {
            fault_after: Some(12),
            ..run_args(input)
        };
        let config = args.effective_config().unwrap();
        let summary = args.run(&config).unwrap();

        // Chunks of 8: the first fits the budget, the second runs out
        // part-way and is dropped whole, and the third gets nothing.
        assert_eq!(summary.enqueued, 8);
        assert_eq!(summary.rejected_chunks, 2);
        assert_eq!(summary.drained, 8);
    }
}
