//! Training infrastructure for BPE tokenizers.
//!
//! This module provides the training loop and the pair counting it is
//! built on.

pub mod counter;
pub mod trainer;

pub use counter::{count_pairs, PairCounter};
pub use trainer::{train, BpeTrainer, TrainingConfig, TrainingConfigBuilder, TrainingStats};
