//! Pair counting for BPE training.
//!
//! This module keeps the segmented training words (deduplicated, with their
//! occurrence counts) and counts adjacent symbol pair frequencies over them,
//! with an optional parallel path.

use ahash::AHashMap;
use mergetok_core::{apply_merge, segment, Pair, Symbol, Word};
use rayon::prelude::*;

/// Count every adjacent pair across a sequence of words.
///
/// A word of `k + 1` symbols contributes exactly `k` pair occurrences.
/// Pairs that never occur are absent from the result.
pub fn count_pairs(words: &[Word]) -> AHashMap<Pair, u64> {
    let mut pair_counts: AHashMap<Pair, u64> = AHashMap::new();
    for word in words {
        add_word_pairs(&mut pair_counts, word, 1);
    }
    pair_counts
}

#[inline]
fn add_word_pairs(pair_counts: &mut AHashMap<Pair, u64>, word: &[Symbol], weight: u64) {
    for window in word.windows(2) {
        let pair = Pair::new(window[0].clone(), window[1].clone());
        *pair_counts.entry(pair).or_insert(0) += weight;
    }
}

/// Counter for BPE pair frequencies.
///
/// Identical words are stored once with an occurrence count; every count it
/// reports is weighted by those occurrences, so the result equals counting
/// over the full word sequence.
pub struct PairCounter {
    /// Boundary marker appended to every word
    boundary: Symbol,
    /// Segmented words in first-seen order
    words: Vec<Word>,
    /// Occurrences of each word
    word_counts: Vec<u64>,
    /// Raw word -> position in `words`
    positions: AHashMap<String, usize>,
}

impl PairCounter {
    /// Create a new pair counter using the given boundary marker.
    pub fn new(boundary: &str) -> Self {
        Self {
            boundary: Symbol::new(boundary),
            words: Vec::new(),
            word_counts: Vec::new(),
            positions: AHashMap::new(),
        }
    }

    /// Add text to be processed for pair counting.
    ///
    /// The text is split on whitespace and each word is segmented.
    pub fn add_text(&mut self, text: &str) {
        for word in text.split_whitespace() {
            self.add_word(word);
        }
    }

    /// Add a single word to the counter.
    pub fn add_word(&mut self, word: &str) {
        if let Some(&pos) = self.positions.get(word) {
            self.word_counts[pos] += 1;
            return;
        }

        self.positions.insert(word.to_string(), self.words.len());
        self.words.push(segment(word, &self.boundary));
        self.word_counts.push(1);
    }

    /// Count all pairs in parallel.
    ///
    /// Produces exactly the same map as [`PairCounter::count_pairs_sequential`].
    pub fn count_pairs_parallel(&self) -> AHashMap<Pair, u64> {
        self.words
            .par_iter()
            .zip(self.word_counts.par_iter())
            .fold(AHashMap::new, |mut acc, (word, &count)| {
                add_word_pairs(&mut acc, word, count);
                acc
            })
            .reduce(AHashMap::new, |mut acc, pair_counts| {
                for (pair, count) in pair_counts {
                    *acc.entry(pair).or_insert(0) += count;
                }
                acc
            })
    }

    /// Count all pairs sequentially.
    pub fn count_pairs_sequential(&self) -> AHashMap<Pair, u64> {
        let mut pair_counts: AHashMap<Pair, u64> = AHashMap::new();

        for (word, &count) in self.words.iter().zip(self.word_counts.iter()) {
            add_word_pairs(&mut pair_counts, word, count);
        }

        pair_counts
    }

    /// Merge a pair in all words (mutates words in place).
    ///
    /// Returns how many symbols the corpus lost, weighted by word occurrences.
    pub fn merge_pair_in_words(&mut self, pair: &Pair) -> u64 {
        self.words
            .iter_mut()
            .zip(self.word_counts.iter())
            .map(|(word, &count)| apply_merge(word, pair) as u64 * count)
            .sum()
    }

    /// Parallel variant of [`PairCounter::merge_pair_in_words`].
    pub fn merge_pair_in_words_parallel(&mut self, pair: &Pair) -> u64 {
        self.words
            .par_iter_mut()
            .zip(self.word_counts.par_iter())
            .map(|(word, &count)| apply_merge(word, pair) as u64 * count)
            .sum()
    }

    /// Get the number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total count of all word occurrences.
    pub fn total_word_occurrences(&self) -> u64 {
        self.word_counts.iter().sum()
    }

    /// Total symbols across all word occurrences.
    pub fn symbol_count(&self) -> u64 {
        self.words
            .iter()
            .zip(self.word_counts.iter())
            .map(|(word, &count)| word.len() as u64 * count)
            .sum()
    }

    /// Get a reference to the words.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Get a reference to the word counts.
    pub fn word_counts(&self) -> &[u64] {
        &self.word_counts
    }

    /// Clear all data from the counter.
    pub fn clear(&mut self) {
        self.words.clear();
        self.word_counts.clear();
        self.positions.clear();
    }
}

impl Default for PairCounter {
    fn default() -> Self {
        Self::new(mergetok_core::DEFAULT_BOUNDARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_word() {
        let mut counter = PairCounter::default();
        counter.add_word("abc");

        assert_eq!(counter.word_count(), 1);
        assert_eq!(counter.words()[0], vec!["a", "b", "c", "</w>"]);
    }

    #[test]
    fn test_add_text_deduplicates() {
        let mut counter = PairCounter::default();
        counter.add_text("low lower\tlow\n lowest low");

        assert_eq!(counter.word_count(), 3);
        assert_eq!(counter.word_counts(), &[3, 1, 1]);
        assert_eq!(counter.total_word_occurrences(), 5);
        // 3 * 4 + 6 + 7
        assert_eq!(counter.symbol_count(), 25);
    }

    #[test]
    fn test_count_pairs_sequential() {
        let mut counter = PairCounter::new("_");
        counter.add_word("ab");
        counter.add_word("bc");

        let pairs = counter.count_pairs_sequential();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs.get(&Pair::new("a", "b")), Some(&1));
        assert_eq!(pairs.get(&Pair::new("b", "_")), Some(&1));
        assert_eq!(pairs.get(&Pair::new("b", "c")), Some(&1));
        assert_eq!(pairs.get(&Pair::new("c", "_")), Some(&1));
        assert_eq!(pairs.get(&Pair::new("a", "c")), None);
    }

    #[test]
    fn test_count_pairs_with_frequency() {
        let mut counter = PairCounter::default();
        counter.add_word("ab");
        counter.add_word("ab"); // Same word twice
        counter.add_word("ab"); // Three times total

        let pairs = counter.count_pairs_sequential();
        assert_eq!(pairs.get(&Pair::new("a", "b")), Some(&3));
        assert_eq!(pairs.get(&Pair::new("b", "</w>")), Some(&3));
    }

    #[test]
    fn test_count_pairs_parallel_matches_sequential() {
        let mut counter = PairCounter::default();
        counter.add_text("abc bcd cde abc low lower lowest aaaa");

        assert_eq!(
            counter.count_pairs_parallel(),
            counter.count_pairs_sequential()
        );
    }

    #[test]
    fn test_free_count_pairs_counts_k_pairs_per_word() {
        let words = vec![segment("lowest", "</w>"), segment("", "</w>")];
        let pairs = count_pairs(&words);

        // "lowest</w>" has 7 symbols -> 6 pairs; "</w>" alone has none
        assert_eq!(pairs.values().sum::<u64>(), 6);
        assert!(pairs.values().all(|&count| count > 0));
    }

    #[test]
    fn test_merge_pair_in_words_weighted() {
        let mut counter = PairCounter::default();
        counter.add_text("low low lowest");

        let before = counter.symbol_count();
        let removed = counter.merge_pair_in_words(&Pair::new("l", "o"));

        assert_eq!(removed, 3);
        assert_eq!(counter.symbol_count(), before - removed);
        assert_eq!(counter.words()[0], vec!["lo", "w", "</w>"]);
    }

    #[test]
    fn test_merge_pair_in_words_parallel() {
        let mut sequential = PairCounter::default();
        let mut parallel = PairCounter::default();
        sequential.add_text("aaa aaaa banana");
        parallel.add_text("aaa aaaa banana");

        let pair = Pair::new("a", "a");
        assert_eq!(
            sequential.merge_pair_in_words(&pair),
            parallel.merge_pair_in_words_parallel(&pair)
        );
        assert_eq!(sequential.words(), parallel.words());
    }
}
