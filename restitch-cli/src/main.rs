//! Command-line entry point for restitch

use clap::Parser;
use restitch_cli::commands::Commands;

/// Reassemble an original message from overlapping string fragments
#[derive(Debug, Parser)]
#[command(name = "restitch", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
