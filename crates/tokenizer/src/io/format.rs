//! Format definitions for tokenizer serialization.
//!
//! A model directory holds two files: the plain merge table and a small JSON
//! document describing how to interpret it.

use serde::{Deserialize, Serialize};

/// Merge table file name inside a model directory.
pub const MERGES_FILE: &str = "merges.txt";

/// Metadata file name inside a model directory.
pub const METADATA_FILE: &str = "tokenizer.json";

/// Current metadata format version.
pub const FORMAT_VERSION: u32 = 1;

/// Contents of `tokenizer.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Metadata format version
    pub format_version: u32,
    /// Version of the library that wrote the model
    pub version: String,
    /// Boundary marker the merges were learned with
    pub boundary: String,
    /// Number of rules written to the merge table
    pub merges: usize,
}

impl ModelMetadata {
    /// Metadata for a model written by this library version.
    pub fn new(boundary: &str, merges: usize) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            boundary: boundary.to_string(),
            merges,
        }
    }
}
