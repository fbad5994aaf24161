//! Merge candidate ordering and selection.
//!
//! The best candidate is the one with the highest count; among equal counts
//! the lexicographically smallest pair wins, so selection never depends on
//! hash map iteration order.

use crate::core::merges::Pair;
use ahash::AHashMap;
use std::cmp::Ordering;

/// A merge candidate during BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of symbols to merge
    pub pair: Pair,
    /// The frequency/count of this pair
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }
}

// Greater = better: higher count, then smaller pair.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pick the winning pair from a frequency table.
///
/// Returns `None` when `counts` is empty.
pub fn select_best(counts: &AHashMap<Pair, u64>) -> Option<MergeCandidate> {
    counts
        .iter()
        .map(|(pair, &count)| MergeCandidate::new(pair.clone(), count))
        .max()
}
