//! Merge rule management for BPE.
//!
//! Merge rules are kept in rank order (the order they were learned) alongside
//! a pair -> rank index so membership checks never scan the list.

use ahash::AHashMap;
use compact_str::CompactString;
use std::fmt;

/// A single BPE symbol: a character, a merged unit, or the boundary marker.
pub type Symbol = CompactString;

/// An ordered pair of adjacent symbols.
///
/// Ordering is lexicographic on `first`, then `second`, which is the
/// tie-break order used when selecting merges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    pub first: Symbol,
    pub second: Symbol,
}

impl Pair {
    /// Create a new pair.
    pub fn new(first: impl Into<Symbol>, second: impl Into<Symbol>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The symbol produced by merging this pair.
    pub fn merged(&self) -> Symbol {
        let mut merged = CompactString::with_capacity(self.first.len() + self.second.len());
        merged.push_str(&self.first);
        merged.push_str(&self.second);
        merged
    }

    /// Check whether `(left, right)` is this pair.
    #[inline]
    pub fn matches(&self, left: &str, right: &str) -> bool {
        self.first == left && self.second == right
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// A learned merge: the pair plus its rank (0 = learned first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRule {
    pub pair: Pair,
    pub rank: u32,
}

/// Ordered collection of BPE merge rules.
///
/// Ranks are always contiguous from 0 and equal to list position; the only
/// way to add a rule is [`MergeRules::push`], which assigns the next rank.
#[derive(Debug, Clone, Default)]
pub struct MergeRules {
    /// Rules in rank order
    rules: Vec<MergeRule>,
    /// Pair -> rank
    index: AHashMap<Pair, u32>,
}

impl MergeRules {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new collection with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Largest number of rules a collection can hold; ranks are `u32`.
    pub const MAX_LEN: usize = u32::MAX as usize;

    /// Rank for the rule at `position`, if it fits below [`Self::MAX_LEN`].
    fn rank_for(position: usize) -> Option<u32> {
        if position < Self::MAX_LEN {
            u32::try_from(position).ok()
        } else {
            None
        }
    }

    /// Append a pair with the next sequential rank and return that rank.
    ///
    /// A pair that is already present keeps its first (lower) rank in the
    /// index; the list still records the duplicate so replay order matches
    /// what was learned or loaded.
    ///
    /// # Panics
    ///
    /// Panics if the collection already holds [`Self::MAX_LEN`] rules.
    pub fn push(&mut self, pair: Pair) -> u32 {
        let rank = Self::rank_for(self.rules.len())
            .unwrap_or_else(|| panic!("merge rule capacity of {} exceeded", Self::MAX_LEN));
        self.index.entry(pair.clone()).or_insert(rank);
        self.rules.push(MergeRule { pair, rank });
        rank
    }

    /// Rank of a pair, if it is a known merge.
    #[inline]
    pub fn rank_of(&self, pair: &Pair) -> Option<u32> {
        self.index.get(pair).copied()
    }

    /// Check if a pair is a known merge.
    #[inline]
    pub fn contains(&self, pair: &Pair) -> bool {
        self.index.contains_key(pair)
    }

    /// Rule at the given rank.
    #[inline]
    pub fn get(&self, rank: u32) -> Option<&MergeRule> {
        self.rules.get(rank as usize)
    }

    /// Iterate rules in ascending rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, MergeRule> {
        self.rules.iter()
    }

    /// Rules in ascending rank order.
    pub fn as_slice(&self) -> &[MergeRule] {
        &self.rules
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Create merge rules from a list of pairs.
    ///
    /// The pairs are assigned ranks in order (0, 1, 2, ...).
    pub fn from_pairs(pairs: impl IntoIterator<Item = Pair>) -> Self {
        let mut rules = Self::new();
        for pair in pairs {
            rules.push(pair);
        }
        rules
    }
}

impl PartialEq for MergeRules {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl Eq for MergeRules {}

impl<'a> IntoIterator for &'a MergeRules {
    type Item = &'a MergeRule;
    type IntoIter = std::slice::Iter<'a, MergeRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<Pair> for MergeRules {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
