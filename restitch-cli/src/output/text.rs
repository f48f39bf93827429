//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use restitch_engine::Reconstruction;
use std::io::{self, Write};

/// Plain text formatter - outputs the reconstructed message on one line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_reconstruction(&mut self, reconstruction: &Reconstruction) -> Result<()> {
        writeln!(self.writer, "{}", reconstruction.message)?;
        self.writer.flush()?;
        Ok(())
    }
}
