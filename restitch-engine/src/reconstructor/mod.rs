//! Reconstruction strategies

use crate::{
    config::Strategy,
    error::{EngineError, Result},
    pool::FragmentPool,
};

pub mod brute;
pub mod priority;

pub use brute::BruteForceReconstructor;
pub use priority::PriorityReconstructor;

/// Result of a completed reconstruction
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// The reassembled message
    pub message: String,
    /// Statistics recorded while reconstructing
    pub metadata: ReconstructionMetadata,
}

/// Statistics recorded while reconstructing
#[derive(Debug, Clone)]
pub struct ReconstructionMetadata {
    /// Strategy that produced the message
    pub strategy: Strategy,
    /// Number of fragments supplied
    pub initial_fragments: usize,
    /// Number of merges performed (always `initial_fragments - 1` on success)
    pub merges: usize,
    /// Number of overlap computations performed
    pub pairs_scored: usize,
    /// Wall-clock reconstruction time in milliseconds
    pub elapsed_ms: f64,
}

/// Trait for reconstruction strategies
pub trait Reconstructor {
    /// Reassemble the original message from `fragments`
    ///
    /// Fails with [`EngineError::EmptyInput`] when no fragments are given
    /// and with [`EngineError::NoRemainingOverlap`] when more than one
    /// fragment is live but no pair has a positive anchored overlap. No
    /// partial output is produced on failure.
    fn reconstruct(&self, fragments: Vec<String>) -> Result<Reconstruction>;

    /// The strategy this reconstructor implements
    fn strategy(&self) -> Strategy;
}

/// Extract the single survivor once a merge loop has drained the pool
pub(crate) fn survivor_message(pool: FragmentPool) -> Result<String> {
    match pool.into_survivor() {
        Some((_, message)) => Ok(message),
        None => Err(EngineError::EmptyInput),
    }
}
