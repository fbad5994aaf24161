//! Plain-text merge table.
//!
//! One merge per line, `first second`, line order = rank order, no header.
//! Loading is lenient: a line that does not split into exactly two
//! whitespace-separated fields is skipped and reported instead of failing the
//! whole load.

use mergetok_core::{MergeRules, Pair, Result, TokenizerError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A merge-file line that was skipped during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedMergeLine {
    /// 1-based line number in the file
    pub line_number: usize,
    /// The offending line, verbatim
    pub content: String,
}

/// Result of parsing a merge table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeTableLoad {
    /// Accepted rules; rank = position among accepted lines
    pub rules: MergeRules,
    /// Lines that were skipped
    pub skipped: Vec<MalformedMergeLine>,
}

impl MergeTableLoad {
    /// Whether every line was accepted.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Render rules in rank order, one `first second` line each.
pub fn render(rules: &MergeRules) -> String {
    let mut out = String::new();
    for rule in rules {
        out.push_str(&rule.pair.first);
        out.push(' ');
        out.push_str(&rule.pair.second);
        out.push('\n');
    }
    out
}

/// Parse a merge table from text.
pub fn parse(contents: &str) -> MergeTableLoad {
    let mut load = MergeTableLoad::default();

    for (index, line) in contents.lines().enumerate() {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(first), Some(second), None) => {
                load.rules.push(Pair::new(first, second));
            }
            _ => {
                log::warn!(
                    "Skipping malformed merge at line {}: {:?}",
                    index + 1,
                    line
                );
                load.skipped.push(MalformedMergeLine {
                    line_number: index + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    load
}

/// Write rules to `path`, replacing any existing file atomically.
///
/// Symbols that are empty or contain whitespace cannot be represented and
/// are rejected before anything is written.
pub fn save(rules: &MergeRules, path: &Path) -> Result<()> {
    for rule in rules {
        for symbol in [&rule.pair.first, &rule.pair.second] {
            if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
                return Err(TokenizerError::InvalidArgument(format!(
                    "merge {} ({}) has a symbol that cannot be written as a field",
                    rule.rank, rule.pair
                )));
            }
        }
    }

    write_atomic(path, render(rules).as_bytes())
}

/// Read rules from `path`.
pub fn load(path: &Path) -> Result<MergeTableLoad> {
    let contents = fs::read_to_string(path).map_err(|e| TokenizerError::io(path, e))?;
    let load = parse(&contents);

    if !load.is_clean() {
        log::warn!(
            "Skipped {} malformed line(s) in {}",
            load.skipped.len(),
            path.display()
        );
    }

    Ok(load)
}

/// Write to a temporary file next to `path`, then rename it into place, so
/// a failed write never leaves a truncated file behind.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| TokenizerError::io(dir, e))?;
    tmp.write_all(contents)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| TokenizerError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| TokenizerError::io(path, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> MergeRules {
        MergeRules::from_pairs(vec![
            Pair::new("l", "o"),
            Pair::new("lo", "w"),
            Pair::new("low", "</w>"),
        ])
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&rules()), "l o\nlo w\nlow </w>\n");
        assert_eq!(render(&MergeRules::new()), "");
    }

    #[test]
    fn test_parse_assigns_ranks_in_line_order() {
        let load = parse("l o\nlo w\nlow </w>\n");
        assert!(load.is_clean());
        assert_eq!(load.rules, rules());
        assert_eq!(load.rules.get(2).unwrap().rank, 2);
    }

    #[test]
    fn test_parse_accepts_any_whitespace_separator() {
        let load = parse("l\to\n  lo   w  \r\n");
        assert!(load.is_clean());
        assert_eq!(
            load.rules,
            MergeRules::from_pairs(vec![Pair::new("l", "o"), Pair::new("lo", "w")])
        );
    }

    #[test]
    fn test_parse_skips_three_field_line() {
        let load = parse("l o\nlo w extra\nlow </w>\n");

        assert_eq!(
            load.rules,
            MergeRules::from_pairs(vec![Pair::new("l", "o"), Pair::new("low", "</w>")])
        );
        assert!(!load.rules.contains(&Pair::new("lo", "w")));
        assert_eq!(
            load.skipped,
            vec![MalformedMergeLine {
                line_number: 2,
                content: "lo w extra".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_skips_single_field_and_blank_lines() {
        let load = parse("l o\nlonely\n\nlo w\n");
        assert_eq!(load.rules.len(), 2);
        assert_eq!(load.rules.get(1).unwrap().rank, 1);
        let skipped: Vec<usize> = load.skipped.iter().map(|s| s.line_number).collect();
        assert_eq!(skipped, vec![2, 3]);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merges.txt");

        save(&rules(), &path).unwrap();
        let loaded = load(&path).unwrap();

        assert!(loaded.is_clean());
        assert_eq!(loaded.rules, rules());
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merges.txt");
        fs::write(&path, "stale contents that are much longer than the new table\n").unwrap();

        let small = MergeRules::from_pairs(vec![Pair::new("a", "b")]);
        save(&small, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a b\n");
        // No temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_rejects_unwritable_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merges.txt");
        let bad = MergeRules::from_pairs(vec![Pair::new("a b", "c")]);

        assert!(matches!(
            save(&bad, &path),
            Err(TokenizerError::InvalidArgument(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(TokenizerError::Io { .. })));
    }
}
