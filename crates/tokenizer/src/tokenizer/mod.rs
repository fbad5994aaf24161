//! Main tokenizer implementation.
//!
//! A [`Tokenizer`] is an ordered merge list plus the boundary marker it was
//! learned with. Encoding replays the list in rank order over a freshly
//! segmented word; nothing is re-derived from frequencies. The tokenizer is
//! immutable once built and can be shared across threads without locking.

use crate::io::{TokenizerLoader, TokenizerSaver};
use mergetok_core::{
    apply_merge, segment, validate_boundary, MergeRules, Pair, Result, Symbol,
};
use mergetok_training::{BpeTrainer, TrainingConfig};
use std::path::Path;

/// BPE tokenizer.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Merge rules in rank order
    merges: MergeRules,
    /// Word boundary marker
    boundary: Symbol,
}

impl Tokenizer {
    /// Create a tokenizer from learned merge rules.
    ///
    /// Fails if the boundary marker is empty or contains whitespace.
    pub fn new(merges: MergeRules, boundary: impl AsRef<str>) -> Result<Self> {
        let boundary = boundary.as_ref();
        validate_boundary(boundary)?;

        Ok(Self {
            merges,
            boundary: Symbol::new(boundary),
        })
    }

    /// Train merge rules on `text` and build a tokenizer from them.
    pub fn train(text: &str, config: &TrainingConfig) -> Result<Self> {
        let merges = BpeTrainer::new(config.clone()).train(text)?;
        Self::new(merges, &config.boundary)
    }

    /// Load a tokenizer from a model directory.
    ///
    /// Skipped merge lines are logged; use [`TokenizerLoader::load`] to get
    /// them back as values.
    pub fn load(path: &Path) -> Result<Self> {
        TokenizerLoader::load(path).map(|loaded| loaded.tokenizer)
    }

    /// Save the tokenizer to a model directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        TokenizerSaver::new(self).save(path)
    }

    /// Encode a single word into symbols.
    ///
    /// The input is treated as one word: it is segmented as-is, so callers
    /// with multi-word text should use [`Tokenizer::encode_text`]. A
    /// standalone trailing marker symbol is dropped; a marker that a merge
    /// absorbed into the last symbol (`low</w>`) stays, since that symbol is
    /// what the rules produced.
    pub fn encode(&self, word: &str) -> Vec<Symbol> {
        let mut symbols = segment(word, &self.boundary);

        for rule in &self.merges {
            if symbols.len() < 2 {
                break;
            }
            apply_merge(&mut symbols, &rule.pair);
        }

        self.strip_boundary(&mut symbols);
        symbols
    }

    /// Encode whitespace-separated text, one space-joined group per word.
    pub fn encode_text(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| join_symbols(&self.encode(word)))
            .collect()
    }

    /// Decode the tokens of ONE original word.
    ///
    /// Each token may itself be a space-joined group of symbols. Spaces are
    /// removed, everything is concatenated, and one trailing boundary marker
    /// is cut off. Marker text anywhere else belongs to the word and is kept,
    /// so tokens from different words must not be mixed in one call. Use
    /// [`Tokenizer::decode_text`] for multiple words.
    ///
    /// A word whose own text ends with the marker cannot be told apart from
    /// one that carries the marker, so it loses that suffix when [`encode`]
    /// dropped its standalone marker symbol.
    ///
    /// [`encode`]: Tokenizer::encode
    pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let mut word = String::new();
        for token in tokens {
            for symbol in token.as_ref().split_whitespace() {
                word.push_str(symbol);
            }
        }

        if word.ends_with(self.boundary.as_str()) {
            word.truncate(word.len() - self.boundary.len());
        }
        word
    }

    /// Decode several words, one group (space-joined symbols) per word, and
    /// re-join them with single spaces.
    pub fn decode_text<S: AsRef<str>>(&self, groups: &[S]) -> String {
        groups
            .iter()
            .map(|group| self.decode(&[group.as_ref()]))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Merge rules in rank order.
    pub fn merges(&self) -> &MergeRules {
        &self.merges
    }

    /// The boundary marker.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Number of merge rules.
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Whether the tokenizer has no merge rules (encodes to characters).
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// Whether `pair` is one of the learned merges.
    pub fn contains_merge(&self, pair: &Pair) -> bool {
        self.merges.contains(pair)
    }

    /// Rank of a learned merge.
    pub fn rank_of(&self, pair: &Pair) -> Option<u32> {
        self.merges.rank_of(pair)
    }

    fn strip_boundary(&self, symbols: &mut Vec<Symbol>) {
        if symbols.last() == Some(&self.boundary) {
            symbols.pop();
        }
    }
}

fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
