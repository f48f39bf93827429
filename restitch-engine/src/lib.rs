//! Orchestration for greedy fragment reconstruction
//!
//! This crate drives the algorithm layer of `restitch-core`: it owns the
//! live fragment pool, scores fragment pairs, and runs one of two greedy
//! merge strategies until a single fragment remains. The brute-force
//! strategy rescans every live pair after each merge; the priority
//! strategy keeps pair scores in a max-heap and recomputes only the pairs
//! touching the fragments a merge consumed.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod pair;
pub mod pool;
pub mod processor;
pub mod reconstructor;
mod scoring;

pub use config::{auto_select, EngineConfig, Strategy};
pub use error::{EngineError, Result};
pub use pair::ScoredPair;
pub use pool::FragmentPool;
pub use processor::MessageReconstructor;
pub use reconstructor::{
    BruteForceReconstructor, PriorityReconstructor, Reconstruction, ReconstructionMetadata,
    Reconstructor,
};

// Re-export from core for convenience
pub use restitch_core::{detect, merge, CoreError, FragmentId, Overlap};
