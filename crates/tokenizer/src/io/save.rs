//! Save functionality for trained tokenizers.

use super::format::{ModelMetadata, MERGES_FILE, METADATA_FILE};
use super::merges::{self, write_atomic};
use crate::tokenizer::Tokenizer;
use mergetok_core::{Result, TokenizerError};
use std::path::Path;

/// Tokenizer saver - writes a model directory.
pub struct TokenizerSaver<'a> {
    tokenizer: &'a Tokenizer,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Save the tokenizer into `path`, creating the directory if needed.
    ///
    /// Writes `merges.txt` first and `tokenizer.json` second; each file is
    /// replaced atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| TokenizerError::io(path, e))?;

        merges::save(self.tokenizer.merges(), &path.join(MERGES_FILE))?;

        let metadata = self.metadata();
        let json = serde_json::to_vec_pretty(&metadata)?;
        write_atomic(&path.join(METADATA_FILE), &json)?;

        log::info!(
            "Saved {} merges to {}",
            metadata.merges,
            path.display()
        );
        Ok(())
    }

    /// Metadata describing the tokenizer.
    pub fn metadata(&self) -> ModelMetadata {
        ModelMetadata::new(self.tokenizer.boundary(), self.tokenizer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergetok_core::{MergeRules, Pair};

    #[test]
    fn test_save_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let rules = MergeRules::from_pairs(vec![Pair::new("a", "b"), Pair::new("ab", "_")]);
        let tokenizer = Tokenizer::new(rules, "_").unwrap();

        TokenizerSaver::new(&tokenizer).save(dir.path()).unwrap();

        let merges = std::fs::read_to_string(dir.path().join(MERGES_FILE)).unwrap();
        assert_eq!(merges, "a b\nab _\n");

        let json = std::fs::read_to_string(dir.path().join(METADATA_FILE)).unwrap();
        let metadata: ModelMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, ModelMetadata::new("_", 2));
    }
}
