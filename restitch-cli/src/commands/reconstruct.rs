//! Reconstruct command implementation

use crate::{
    error::CliError,
    input,
    output::{JsonFormatter, OutputFormatter, TextFormatter},
};
use anyhow::Result;
use clap::Args;
use restitch_engine::{EngineConfig, MessageReconstructor, Strategy};
use std::path::PathBuf;

/// Arguments for the reconstruct command
#[derive(Debug, Args)]
pub struct ReconstructArgs {
    /// Input file with delimited fragments (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Delimiter separating fragments in the input
    #[arg(short, long, default_value = ";")]
    pub delimiter: char,

    /// Reconstruction strategy
    #[arg(short, long, value_enum, default_value = "auto")]
    pub strategy: StrategyArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Score the initial pairs sequentially
    #[arg(long)]
    pub no_parallel: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported reconstruction strategies
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    /// Pick a strategy from the fragment count
    Auto,
    /// Rescan all pairs after every merge
    Brute,
    /// Priority-ordered incremental rescoring
    Priority,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// The reconstructed message on a single line
    Text,
    /// JSON object with the message and run statistics
    Json,
}

impl ReconstructArgs {
    /// Execute the reconstruct command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting fragment reconstruction");
        let fragments = input::read_fragments(self.input.as_deref(), self.delimiter)?;
        if fragments.is_empty() {
            return Err(CliError::EmptyInput.into());
        }
        log::debug!("Read {} fragments", fragments.len());

        let config = EngineConfig {
            strategy: match self.strategy {
                StrategyArg::Auto => None,
                StrategyArg::Brute => Some(Strategy::BruteForce),
                StrategyArg::Priority => Some(Strategy::Priority),
            },
            parallel_init: !self.no_parallel,
            ..EngineConfig::default()
        };

        let reconstruction = MessageReconstructor::with_config(config).reconstruct(fragments)?;
        log::info!(
            "Merged {} fragments in {:.3} ms using the {} strategy",
            reconstruction.metadata.initial_fragments,
            reconstruction.metadata.elapsed_ms,
            reconstruction.metadata.strategy
        );

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::stdout()),
        };
        formatter.write_reconstruction(&reconstruction)?;

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }

        Ok(())
    }
}
