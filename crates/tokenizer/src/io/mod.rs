//! Serialization and deserialization for BPE models.
//!
//! The merge table itself lives in [`merges`]; [`TokenizerSaver`] and
//! [`TokenizerLoader`] wrap it into a model directory with metadata.

pub mod format;
pub mod load;
pub mod merges;
pub mod save;

pub use format::{ModelMetadata, FORMAT_VERSION, MERGES_FILE, METADATA_FILE};
pub use load::{LoadedTokenizer, TokenizerLoader};
pub use merges::{MalformedMergeLine, MergeTableLoad};
pub use save::TokenizerSaver;
