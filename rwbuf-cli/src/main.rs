//! rwbuf command-line entry point

use clap::Parser;
use rwbuf_cli::commands::Commands;

/// FIFO byte buffer with a periodic word scanner
#[derive(Debug, Parser)]
#[command(name = "rwbuf", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
