//! Initial all-pairs overlap scoring
//!
//! Scoring the initial pairs is the only region of the reconstruction that
//! may run in parallel: it is read-only over the seeded pool. Everything
//! that mutates the pool or the priority structure stays on the single
//! reconstruction thread.

use crate::{pair::ScoredPair, pool::FragmentPool};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use restitch_core::{detect, FragmentId};

/// Score every unordered pair of live fragments
///
/// Pairs are emitted in ascending `(a, b)` ID order with their detected
/// overlap lengths, zero-length pairs included; callers filter as needed.
pub(crate) fn score_pairs(pool: &FragmentPool, parallel: bool) -> Vec<ScoredPair> {
    let entries = pool.entries_sorted();

    let mut index_pairs = Vec::with_capacity(entries.len() * entries.len().saturating_sub(1) / 2);
    for i in 0..entries.len() {
        for j in i + 1..entries.len() {
            index_pairs.push((i, j));
        }
    }

    #[cfg(feature = "parallel")]
    if parallel {
        return index_pairs
            .par_iter()
            .map(|&(i, j)| score_one(&entries, i, j))
            .collect();
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    index_pairs
        .iter()
        .map(|&(i, j)| score_one(&entries, i, j))
        .collect()
}

fn score_one(entries: &[(FragmentId, &str)], i: usize, j: usize) -> ScoredPair {
    let (a_id, a) = entries[i];
    let (b_id, b) = entries[j];
    ScoredPair::new(detect(a, b).len, a_id, b_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_every_unordered_pair() {
        let pool = FragmentPool::seed(vec!["abcd".into(), "cdef".into(), "xyz".into()]);
        let scored = score_pairs(&pool, false);
        assert_eq!(scored.len(), 3);

        let bridge = scored
            .iter()
            .find(|p| p.a == FragmentId(0) && p.b == FragmentId(1))
            .unwrap();
        assert_eq!(bridge.len, 2);

        let disjoint = scored
            .iter()
            .find(|p| p.b == FragmentId(2))
            .unwrap();
        assert_eq!(disjoint.len, 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_and_sequential_agree() {
        let fragments: Vec<String> = (0..20)
            .map(|i| format!("fragment{i:02}tail{}", i % 7))
            .collect();
        let pool = FragmentPool::seed(fragments);

        let mut sequential = score_pairs(&pool, false);
        let mut parallel = score_pairs(&pool, true);
        sequential.sort();
        parallel.sort();
        assert_eq!(sequential, parallel);
    }
}
