//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod run;
pub mod scan;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Feed input through the buffer while the periodic scanner prints words
    Run(run::RunArgs),

    /// Enqueue inputs and pull words from the cursor synchronously
    Scan(scan::ScanArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Run(args) => args.execute(),
            Commands::Scan(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A second init (e.g. from tests in the same process) is harmless.
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .format_timestamp_millis()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let validate_cmd = Commands::Validate(validate::ValidateArgs {
            config: PathBuf::from("rwbuf.toml"),
        });

        let debug_str = format!("{:?}", validate_cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("rwbuf.toml"));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(2, false);
        init_logging(0, false);
        init_logging(0, true);
    }
}
