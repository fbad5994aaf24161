//! Core BPE algorithm implementation.
//!
//! This module contains the symbol-level data structures and the two
//! primitive operations every other component is built from: segmenting a
//! word and applying one merge rule to it.

pub mod merges;
pub mod priority;
pub mod word;

pub use merges::{MergeRule, MergeRules, Pair, Symbol};
pub use priority::{select_best, MergeCandidate};
pub use word::{apply_merge, apply_merge_all, segment, Word};
