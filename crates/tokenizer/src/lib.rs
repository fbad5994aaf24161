//! Mergetok-tokenizer - High-level tokenizer API
//!
//! This crate wraps learned merge rules into a [`Tokenizer`] that encodes
//! words into subword symbols and decodes them back, and persists merge
//! rules as a plain two-column text file.
//!
//! # Features
//!
//! - Encoding by strict replay of the learned merge order
//! - One-word-at-a-time decoding, plus multi-word helpers that keep word
//!   groups apart
//! - Lenient merge-file loading that reports skipped lines
//! - Atomic (temp file + rename) writes
//! - Whitespace and Unicode normalization for incoming text
//!
//! # Example
//!
//! ```rust
//! use mergetok_tokenizer::{Tokenizer, TrainingConfig};
//!
//! let config = TrainingConfig::builder().max_merges(10).build()?;
//! let tokenizer = Tokenizer::train("low lower lowest low lower lowest", &config)?;
//!
//! let groups = tokenizer.encode_text("lowest lowly");
//! assert_eq!(groups, vec!["lowest</w>", "low l y"]);
//! assert_eq!(tokenizer.decode_text(&groups), "lowest lowly");
//! # Ok::<(), mergetok_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use mergetok_core::{MergeRule, MergeRules, Pair, Result, Symbol, TokenizerError};
pub use mergetok_training::{BpeTrainer, TrainingConfig};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::Tokenizer;

// IO/Serialization
pub mod io;
pub use io::{
    LoadedTokenizer, MalformedMergeLine, MergeTableLoad, ModelMetadata, TokenizerLoader,
    TokenizerSaver,
};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{NormalizationForm, Normalizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
