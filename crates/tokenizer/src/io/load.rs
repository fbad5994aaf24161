//! Load functionality for saved tokenizers.

use super::format::{ModelMetadata, FORMAT_VERSION, MERGES_FILE, METADATA_FILE};
use super::merges::{self, MalformedMergeLine};
use crate::tokenizer::Tokenizer;
use mergetok_core::{Result, TokenizerError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A tokenizer read back from disk, with any merge lines that were skipped.
#[derive(Debug)]
pub struct LoadedTokenizer {
    pub tokenizer: Tokenizer,
    pub skipped: Vec<MalformedMergeLine>,
}

/// Tokenizer loader - reads a model directory.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load a tokenizer from a directory written by
    /// [`TokenizerSaver`](super::TokenizerSaver).
    ///
    /// Malformed merge lines are skipped and returned; a merge count that
    /// disagrees with the metadata is logged. An unknown format version is
    /// an error.
    pub fn load(path: &Path) -> Result<LoadedTokenizer> {
        let metadata = Self::read_metadata(path)?;

        if metadata.format_version != FORMAT_VERSION {
            return Err(TokenizerError::Load(format!(
                "unsupported format version {} in {} (expected {})",
                metadata.format_version,
                path.join(METADATA_FILE).display(),
                FORMAT_VERSION
            )));
        }

        let table = merges::load(&path.join(MERGES_FILE))?;

        if table.rules.len() != metadata.merges {
            log::warn!(
                "{} lists {} merges but {} were loaded",
                METADATA_FILE,
                metadata.merges,
                table.rules.len()
            );
        }

        let tokenizer = Tokenizer::new(table.rules, metadata.boundary)?;
        Ok(LoadedTokenizer {
            tokenizer,
            skipped: table.skipped,
        })
    }

    /// Read and parse `tokenizer.json` from a model directory.
    pub fn read_metadata(path: &Path) -> Result<ModelMetadata> {
        let file_path = path.join(METADATA_FILE);
        let file = File::open(&file_path).map_err(|e| TokenizerError::io(&file_path, e))?;
        let metadata: ModelMetadata = serde_json::from_reader(BufReader::new(file))?;
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::TokenizerSaver;
    use mergetok_core::{MergeRules, Pair};

    fn saved_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let rules = MergeRules::from_pairs(vec![Pair::new("l", "o"), Pair::new("lo", "w")]);
        let tokenizer = Tokenizer::new(rules, "</w>").unwrap();
        TokenizerSaver::new(&tokenizer).save(dir.path()).unwrap();
        dir
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = saved_dir();

        let loaded = TokenizerLoader::load(dir.path()).unwrap();

        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.tokenizer.boundary(), "</w>");
        assert_eq!(loaded.tokenizer.len(), 2);
        assert_eq!(loaded.tokenizer.encode("low"), vec!["low"]);
    }

    #[test]
    fn test_load_reports_skipped_lines() {
        let dir = saved_dir();
        std::fs::write(dir.path().join(MERGES_FILE), "l o\nlo w oops\nlo w\n").unwrap();

        let loaded = TokenizerLoader::load(dir.path()).unwrap();

        assert_eq!(loaded.tokenizer.len(), 2);
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].line_number, 2);
    }

    #[test]
    fn test_load_rejects_unknown_format_version() {
        let dir = saved_dir();
        let mut metadata = TokenizerLoader::read_metadata(dir.path()).unwrap();
        metadata.format_version = FORMAT_VERSION + 1;
        std::fs::write(
            dir.path().join(METADATA_FILE),
            serde_json::to_string(&metadata).unwrap(),
        )
        .unwrap();

        assert!(matches!(
            TokenizerLoader::load(dir.path()),
            Err(TokenizerError::Load(_))
        ));
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            TokenizerLoader::load(&dir.path().join("nope")),
            Err(TokenizerError::Io { .. })
        ));
    }
}
