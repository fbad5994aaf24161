//! Mergetok-training - BPE training infrastructure
//!
//! This crate learns an ordered list of BPE merge rules from text.
//!
//! # Features
//!
//! - Pair frequency counting with an optional parallel path (rayon)
//! - Deterministic merge selection, so the same corpus always yields the
//!   same rules
//! - Configurable merge budget, boundary marker and minimum frequency
//!
//! # Example
//!
//! ```rust
//! use mergetok_training::{BpeTrainer, TrainingConfig};
//!
//! let config = TrainingConfig::builder()
//!     .max_merges(10)
//!     .boundary("</w>")
//!     .build()?;
//!
//! let rules = BpeTrainer::new(config).train("low lower lowest")?;
//! assert_eq!(rules.get(0).unwrap().pair.to_string(), "l o");
//! # Ok::<(), mergetok_training::TokenizerError>(())
//! ```

pub use mergetok_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{
    count_pairs, train, BpeTrainer, PairCounter, TrainingConfig, TrainingConfigBuilder,
    TrainingStats,
};
