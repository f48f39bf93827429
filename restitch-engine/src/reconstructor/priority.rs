//! Priority-ordered reconstruction strategy

use crate::{
    config::Strategy,
    error::{EngineError, Result},
    pair::ScoredPair,
    pool::FragmentPool,
    reconstructor::{survivor_message, Reconstruction, ReconstructionMetadata, Reconstructor},
    scoring,
};
use restitch_core::{detect, merge, FragmentId};
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

/// Keeps pair scores in a max-heap across merges
///
/// All pairs are scored once up front; afterwards each merge purges the
/// pairs that touched a consumed fragment and rescans only their surviving
/// partners against the merge result. Per-merge work drops from all pairs
/// to the pairs the merge invalidated.
#[derive(Debug, Clone, Copy)]
pub struct PriorityReconstructor {
    parallel_init: bool,
}

impl PriorityReconstructor {
    /// Create a reconstructor that scores the initial pairs in parallel
    /// when the `parallel` feature is enabled
    pub fn new() -> Self {
        Self {
            parallel_init: true,
        }
    }

    /// Control whether the initial scoring may use the rayon pool
    pub fn with_parallel_init(parallel_init: bool) -> Self {
        Self { parallel_init }
    }
}

impl Default for PriorityReconstructor {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconstructor for PriorityReconstructor {
    fn reconstruct(&self, fragments: Vec<String>) -> Result<Reconstruction> {
        if fragments.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let started = Instant::now();
        let initial_fragments = fragments.len();
        let mut pool = FragmentPool::seed(fragments);
        let mut merges = 0;

        // Score every pair once; only positive scores enter the heap.
        let scored = scoring::score_pairs(&pool, self.parallel_init);
        let mut pairs_scored = scored.len();
        let mut heap: BinaryHeap<ScoredPair> =
            scored.into_iter().filter(|pair| pair.len > 0).collect();

        while pool.len() > 1 {
            // An empty heap, or a zero score at the top, means no anchored
            // overlap remains among the live fragments.
            let Some(pair) = heap.pop() else {
                return Err(EngineError::NoRemainingOverlap {
                    remaining: pool.len(),
                });
            };
            if pair.len == 0 {
                return Err(EngineError::NoRemainingOverlap {
                    remaining: pool.len(),
                });
            }

            let (content_a, content_b) =
                pool.take_pair(pair.a, pair.b)
                    .ok_or(EngineError::StalePair {
                        a: pair.a,
                        b: pair.b,
                    })?;
            let merged_id = pool.mint(merge(&content_a, &content_b)?);
            merges += 1;

            // Two-phase purge: drain the heap, drop every pair touching a
            // consumed fragment, and note each dropped pair's surviving
            // partner exactly once.
            let mut partners: HashSet<FragmentId> = HashSet::new();
            let mut retained = Vec::with_capacity(heap.len());
            for entry in std::mem::take(&mut heap).into_vec() {
                if entry.contains(pair.a) || entry.contains(pair.b) {
                    for id in [entry.a, entry.b] {
                        if id != pair.a && id != pair.b {
                            partners.insert(id);
                        }
                    }
                } else {
                    retained.push(entry);
                }
            }
            heap = BinaryHeap::from(retained);

            // Rescore the partners against the merged fragment. Scores go
            // in unconditionally; zero scores are caught at pop time.
            for partner in partners {
                if let (Some(merged), Some(other)) = (pool.get(merged_id), pool.get(partner)) {
                    let len = detect(merged, other).len;
                    pairs_scored += 1;
                    heap.push(ScoredPair::new(len, merged_id, partner));
                }
            }
        }

        Ok(Reconstruction {
            message: survivor_message(pool)?,
            metadata: ReconstructionMetadata {
                strategy: Strategy::Priority,
                initial_fragments,
                merges,
                pairs_scored,
                elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
            },
        })
    }

    fn strategy(&self) -> Strategy {
        Strategy::Priority
    }
}
