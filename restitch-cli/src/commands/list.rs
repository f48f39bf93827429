//! List command implementation

use anyhow::Result;
use clap::Subcommand;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available reconstruction strategies
    Strategies,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the selected listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Strategies => {
                println!("auto      - pick a strategy from the fragment count");
                println!("brute     - rescan all pairs after every merge");
                println!("priority  - priority-ordered incremental rescoring");
            }
            ListCommands::Formats => {
                println!("text - the reconstructed message on a single line");
                println!("json - JSON object with the message and run statistics");
            }
        }
        Ok(())
    }
}
