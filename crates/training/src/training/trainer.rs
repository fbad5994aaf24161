//! BPE trainer implementation.
//!
//! Each iteration recounts every adjacent pair, picks the most frequent one
//! (lexicographically smallest on ties), merges it everywhere, and appends it
//! to the rule list with the next rank. Iterations are strictly sequential:
//! the counts of one depend on the merges of the previous.

use super::counter::PairCounter;
use mergetok_core::{
    select_best, validate_boundary, MergeRules, Result, TokenizerError, DEFAULT_BOUNDARY,
};

/// Configuration for BPE training.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Upper bound on the number of merges to learn
    pub max_merges: usize,
    /// Marker appended to every word
    pub boundary: String,
    /// Minimum frequency for a pair to be merged
    pub min_frequency: u64,
    /// Whether to count and apply merges across words with rayon
    pub parallel: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_merges: 1_000,
            boundary: DEFAULT_BOUNDARY.to_string(),
            min_frequency: 1,
            parallel: false,
        }
    }
}

impl TrainingConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> TrainingConfigBuilder {
        TrainingConfigBuilder::default()
    }

    /// Check the configuration before training.
    pub fn validate(&self) -> Result<()> {
        if self.max_merges == 0 {
            return Err(TokenizerError::InvalidArgument(
                "max_merges must be at least 1".to_string(),
            ));
        }
        if self.max_merges > MergeRules::MAX_LEN {
            return Err(TokenizerError::InvalidArgument(format!(
                "max_merges must be at most {}",
                MergeRules::MAX_LEN
            )));
        }
        validate_boundary(&self.boundary)
    }
}

/// Builder for [`TrainingConfig`].
#[derive(Debug, Clone, Default)]
pub struct TrainingConfigBuilder {
    config: TrainingConfig,
}

impl TrainingConfigBuilder {
    /// Set the merge budget.
    pub fn max_merges(mut self, max_merges: usize) -> Self {
        self.config.max_merges = max_merges;
        self
    }

    /// Set the boundary marker.
    pub fn boundary(mut self, boundary: impl Into<String>) -> Self {
        self.config.boundary = boundary.into();
        self
    }

    /// Set the minimum frequency for merges.
    pub fn min_frequency(mut self, freq: u64) -> Self {
        self.config.min_frequency = freq;
        self
    }

    /// Enable or disable rayon within each iteration.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<TrainingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Summary of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainingStats {
    /// Whitespace-delimited words in the corpus
    pub words: u64,
    /// Distinct words in the corpus
    pub unique_words: usize,
    /// Symbols (boundary markers included) before the first merge
    pub initial_symbols: u64,
    /// Symbols left after the last merge
    pub final_symbols: u64,
    /// Merges learned
    pub merges: usize,
}

/// BPE trainer.
///
/// Learns an ordered list of merge rules from text by iteratively merging the
/// most frequent adjacent symbol pair.
pub struct BpeTrainer {
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new BPE trainer with the given merge budget and defaults
    /// for everything else.
    pub fn with_max_merges(max_merges: usize) -> Self {
        Self::new(TrainingConfig {
            max_merges,
            ..Default::default()
        })
    }

    /// The configuration this trainer runs with.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on the given text.
    ///
    /// Fails with `InvalidArgument` if the text holds no words or the
    /// configuration is invalid. Learning fewer than `max_merges` rules is a
    /// normal outcome once no pairs remain.
    pub fn train(&self, text: &str) -> Result<MergeRules> {
        self.train_with_stats(text).map(|(rules, _)| rules)
    }

    /// Train on the given text and also report corpus statistics.
    pub fn train_with_stats(&self, text: &str) -> Result<(MergeRules, TrainingStats)> {
        self.config.validate()?;

        let mut counter = PairCounter::new(&self.config.boundary);
        counter.add_text(text);

        if counter.word_count() == 0 {
            return Err(TokenizerError::InvalidArgument(
                "corpus contains no words".to_string(),
            ));
        }

        let initial_symbols = counter.symbol_count();
        log::info!(
            "Training on {} words ({} unique, {} symbols), max_merges={}",
            counter.total_word_occurrences(),
            counter.word_count(),
            initial_symbols,
            self.config.max_merges
        );

        let mut rules = MergeRules::with_capacity(self.config.max_merges.min(1 << 16));

        while rules.len() < self.config.max_merges {
            let pair_counts = if self.config.parallel {
                counter.count_pairs_parallel()
            } else {
                counter.count_pairs_sequential()
            };

            let candidate = match select_best(&pair_counts) {
                Some(c) => c,
                None => {
                    log::debug!("No pairs left after {} merges", rules.len());
                    break;
                }
            };

            if candidate.count < self.config.min_frequency {
                log::debug!(
                    "Best pair ({}) occurs {} times, below min_frequency {}",
                    candidate.pair,
                    candidate.count,
                    self.config.min_frequency
                );
                break;
            }

            if self.config.parallel {
                counter.merge_pair_in_words_parallel(&candidate.pair);
            } else {
                counter.merge_pair_in_words(&candidate.pair);
            }

            let rank = rules.push(candidate.pair.clone());
            log::debug!(
                "Merge {}: ({}) count={}",
                rank,
                candidate.pair,
                candidate.count
            );
        }

        let stats = TrainingStats {
            words: counter.total_word_occurrences(),
            unique_words: counter.word_count(),
            initial_symbols,
            final_symbols: counter.symbol_count(),
            merges: rules.len(),
        };

        log::info!(
            "Learned {} merges ({} -> {} symbols)",
            stats.merges,
            stats.initial_symbols,
            stats.final_symbols
        );

        Ok((rules, stats))
    }
}

/// Train merge rules from raw corpus text.
///
/// Shorthand for a [`BpeTrainer`] with the given merge budget and boundary
/// marker and defaults for everything else.
pub fn train(corpus_text: &str, max_merges: usize, boundary: &str) -> Result<MergeRules> {
    let config = TrainingConfig {
        max_merges,
        boundary: boundary.to_string(),
        ..Default::default()
    };
    BpeTrainer::new(config).train(corpus_text)
}
