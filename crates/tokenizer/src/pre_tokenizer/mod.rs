//! Pre-tokenization pipeline.
//!
//! Normalization applied to raw text before it reaches the trainer or the
//! tokenizer.

pub mod normalize;

pub use normalize::{NormalizationForm, Normalizer};
