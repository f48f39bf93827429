//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use restitch_engine::Reconstruction;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// JSON formatter - outputs the message with run statistics
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ReconstructionData {
    /// The reconstructed message
    pub message: String,
    /// Strategy that produced it
    pub strategy: String,
    /// Number of fragments supplied
    pub initial_fragments: usize,
    /// Number of merges performed
    pub merges: usize,
    /// Number of overlap computations performed
    pub pairs_scored: usize,
    /// Wall-clock reconstruction time in milliseconds
    pub elapsed_ms: f64,
}

impl From<&Reconstruction> for ReconstructionData {
    fn from(reconstruction: &Reconstruction) -> Self {
        let metadata = &reconstruction.metadata;
        Self {
            message: reconstruction.message.clone(),
            strategy: metadata.strategy.to_string(),
            initial_fragments: metadata.initial_fragments,
            merges: metadata.merges,
            pairs_scored: metadata.pairs_scored,
            elapsed_ms: metadata.elapsed_ms,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl JsonFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_reconstruction(&mut self, reconstruction: &Reconstruction) -> Result<()> {
        let data = ReconstructionData::from(reconstruction);
        serde_json::to_writer_pretty(&mut self.writer, &data)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
