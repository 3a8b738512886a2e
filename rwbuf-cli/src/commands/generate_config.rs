//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Adjust the scan cadence and chunk sizes");
        println!("2. Validate your configuration:");
        println!("   rwbuf validate --config {}", self.output.display());
        println!("3. Use it for a run:");
        println!(
            "   rwbuf run -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template content; every value is the built-in default
    pub fn template() -> &'static str {
        r#"# rwbuf configuration

[scan]
# Milliseconds between scan ticks
interval_ms = 1000
# Longest wait for the buffer lock before a tick is skipped
lock_timeout_ms = 250
# Scan signals that may be pending at once; extra ticks are coalesced
signal_capacity = 1
# How long `run` keeps scanning after the input is exhausted
linger_ms = 3000

[queue]
# Bytes per enqueued fragment when reading input
chunk_size = 4096
# Bytes requested per dequeue when draining
drain_size = 4096

[output]
# "text", "json" or "log" (info records on the rwbuf::words target)
format = "text"
# Written after each word in text format
separator = "\n"
"#
    }
}
