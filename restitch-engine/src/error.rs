//! Engine error types

use restitch_core::{CoreError, FragmentId};
use thiserror::Error;

/// Engine-level errors (orchestration layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// No fragments were supplied
    #[error("no fragments to reconstruct")]
    EmptyInput,

    /// More than one fragment remains but nothing overlaps
    #[error("no anchored overlap remains between the {remaining} unmerged fragments")]
    NoRemainingOverlap {
        /// Number of fragments still live in the pool
        remaining: usize,
    },

    /// A popped pair referenced a fragment no longer in the pool
    ///
    /// Pairs touching a merged fragment are purged eagerly, so this
    /// indicates broken purge bookkeeping rather than bad input.
    #[error("scored pair ({a}, {b}) references a retired fragment")]
    StalePair {
        /// First fragment of the pair
        a: FragmentId,
        /// Second fragment of the pair
        b: FragmentId,
    },

    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
