//! Mergetok-core - Core BPE data structures and primitives
//!
//! This crate provides the symbol, pair and merge-rule types shared by the
//! trainer and the tokenizer, plus the primitive operations both are built
//! from.
//!
//! # Features
//!
//! - Compact symbol storage using `CompactString`
//! - Rank-ordered merge rules with an `AHashMap` pair index
//! - Deterministic merge selection (count, then lexicographic pair order)
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use mergetok_core::{apply_merge, segment, Pair};
//!
//! let mut word = segment("low", "</w>");
//! apply_merge(&mut word, &Pair::new("l", "o"));
//! assert_eq!(word, vec!["lo", "w", "</w>"]);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE algorithm modules
pub mod core;
pub use core::{
    apply_merge, apply_merge_all, segment, select_best, MergeCandidate, MergeRule, MergeRules,
    Pair, Symbol, Word,
};

/// Boundary marker appended to every word unless configured otherwise.
pub const DEFAULT_BOUNDARY: &str = "</w>";

/// Check that a boundary marker can be used both as a symbol and as a
/// merge-file field: non-empty and free of whitespace.
pub fn validate_boundary(boundary: &str) -> Result<()> {
    if boundary.is_empty() {
        return Err(TokenizerError::InvalidArgument(
            "boundary marker must not be empty".to_string(),
        ));
    }
    if boundary.chars().any(char::is_whitespace) {
        return Err(TokenizerError::InvalidArgument(format!(
            "boundary marker {:?} must not contain whitespace",
            boundary
        )));
    }
    Ok(())
}
