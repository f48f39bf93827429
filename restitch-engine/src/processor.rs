//! Top-level reconstruction entry point

use crate::{
    config::{auto_select, EngineConfig},
    error::Result,
    reconstructor::{
        BruteForceReconstructor, PriorityReconstructor, Reconstruction, Reconstructor,
    },
    Strategy,
};

/// Main reconstruction driver
///
/// Wraps the two strategies behind a single configurable entry point:
/// a fixed strategy runs as asked, otherwise one is auto-selected from
/// the fragment count.
#[derive(Debug, Clone, Default)]
pub struct MessageReconstructor {
    config: EngineConfig,
}

impl MessageReconstructor {
    /// Create a reconstructor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reconstructor with a custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Reassemble the original message from `fragments`
    pub fn reconstruct(&self, fragments: Vec<String>) -> Result<Reconstruction> {
        let strategy = self
            .config
            .strategy
            .unwrap_or_else(|| auto_select(fragments.len(), self.config.auto_threshold));

        match strategy {
            Strategy::BruteForce => BruteForceReconstructor.reconstruct(fragments),
            Strategy::Priority => {
                PriorityReconstructor::with_parallel_init(self.config.parallel_init)
                    .reconstruct(fragments)
            }
        }
    }
}
