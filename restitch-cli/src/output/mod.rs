//! Output formatting module

use anyhow::Result;
use restitch_engine::Reconstruction;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write a finished reconstruction
    fn write_reconstruction(&mut self, reconstruction: &Reconstruction) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
