//! Brute-force reconstruction strategy

use crate::{
    config::Strategy,
    error::{EngineError, Result},
    pool::FragmentPool,
    reconstructor::{survivor_message, Reconstruction, ReconstructionMetadata, Reconstructor},
};
use restitch_core::{detect, merge_with, Overlap};
use std::time::Instant;

/// Rescans every live pair on every iteration
///
/// Each round computes the overlap of all unordered pairs, in ascending ID
/// order, and merges the strictly best one (first found keeps ties). The
/// work per round is quadratic in the live fragment count, cubic overall.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceReconstructor;

impl Reconstructor for BruteForceReconstructor {
    fn reconstruct(&self, fragments: Vec<String>) -> Result<Reconstruction> {
        if fragments.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let started = Instant::now();
        let initial_fragments = fragments.len();
        let mut pool = FragmentPool::seed(fragments);
        let mut merges = 0;
        let mut pairs_scored = 0;

        while pool.len() > 1 {
            let entries = pool.entries_sorted();

            // Only a strictly positive overlap may win; a round where the
            // maximum stays at zero has nothing left to merge.
            let mut best: Option<(Overlap, usize, usize)> = None;
            for i in 0..entries.len() {
                for j in i + 1..entries.len() {
                    let overlap = detect(entries[i].1, entries[j].1);
                    pairs_scored += 1;
                    if overlap.len > best.map_or(0, |(o, _, _)| o.len) {
                        best = Some((overlap, i, j));
                    }
                }
            }

            let Some((overlap, i, j)) = best else {
                return Err(EngineError::NoRemainingOverlap {
                    remaining: pool.len(),
                });
            };

            let merged = merge_with(entries[i].1, entries[j].1, &overlap)?;
            let (a_id, b_id) = (entries[i].0, entries[j].0);
            pool.remove(a_id);
            pool.remove(b_id);
            pool.mint(merged);
            merges += 1;
        }

        Ok(Reconstruction {
            message: survivor_message(pool)?,
            metadata: ReconstructionMetadata {
                strategy: Strategy::BruteForce,
                initial_fragments,
                merges,
                pairs_scored,
                elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
            },
        })
    }

    fn strategy(&self) -> Strategy {
        Strategy::BruteForce
    }
}
