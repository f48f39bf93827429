//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod list;
pub mod reconstruct;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reassemble a delimited fragment set into the original message
    Reconstruct(reconstruct::ReconstructArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Reconstruct(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
