//! Core error types (deterministic only)

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Merge requested for a pair with no usable overlap
    #[error("fragments share no anchored overlap to merge on")]
    EmptyOverlap,

    /// Positive-length descriptor that fits no anchored merge case
    #[error(
        "overlap of length {len} at a[{a_start}..{a_end}) / b[{b_start}..{b_end}) \
         fits no anchored merge geometry"
    )]
    InvalidGeometry {
        /// Length of the matched region
        len: usize,
        /// Start of the matched region in the first fragment
        a_start: usize,
        /// End (exclusive) of the matched region in the first fragment
        a_end: usize,
        /// Start of the matched region in the second fragment
        b_start: usize,
        /// End (exclusive) of the matched region in the second fragment
        b_end: usize,
    },
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
