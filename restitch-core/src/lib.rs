//! Anchored-overlap detection and fragment merging
//!
//! This crate implements the pure algorithm layer of the restitch
//! reconstruction pipeline: given two string fragments, find the longest
//! boundary-anchored match between them and, when one exists, splice the
//! fragments into a single string. Anchoring is what separates a genuine
//! prefix/suffix relationship from an incidental repeat in the middle of
//! both strings; only anchored matches may drive a merge.
//!
//! Orchestration (the fragment pool, pair scoring, and the greedy merge
//! loops) lives in `restitch-engine`. Nothing in this crate performs I/O
//! or holds state between calls.
//!
//! # Example
//!
//! ```rust
//! use restitch_core::{detect, merge};
//!
//! let overlap = detect("greatpeking", "pekingduckfordinner");
//! assert_eq!(overlap.len, 6);
//!
//! let merged = merge("greatpeking", "pekingduckfordinner").unwrap();
//! assert_eq!(merged, "greatpekingduckfordinner");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod merge;
pub mod overlap;
pub mod types;

pub use error::{CoreError, Result};
pub use merge::{merge, merge_with, Geometry};
pub use overlap::detect;
pub use types::{FragmentId, Overlap};
