//! Word segmentation and merge application.
//!
//! A word starts out as one symbol per Unicode code point followed by the
//! boundary marker, and only ever shrinks as adjacent symbols are merged.

use super::merges::{Pair, Symbol};

/// A word as an ordered sequence of symbols.
pub type Word = Vec<Symbol>;

/// Split a word into one symbol per code point and append the boundary marker.
///
/// Empty input yields a word holding only the boundary marker.
pub fn segment(word: &str, boundary: &str) -> Word {
    let mut symbols = Word::with_capacity(word.chars().count() + 1);
    let mut buf = [0u8; 4];
    for ch in word.chars() {
        symbols.push(Symbol::new(ch.encode_utf8(&mut buf)));
    }
    symbols.push(Symbol::new(boundary));
    symbols
}

/// Merge every non-overlapping occurrence of `pair` in `word`, left to right.
///
/// `a a a` with pair `(a, a)` becomes `aa a`; the trailing `a` is only
/// reconsidered on a later pass. Returns the number of merges performed.
pub fn apply_merge(word: &mut Word, pair: &Pair) -> usize {
    let len = word.len();
    if len < 2 {
        return 0;
    }

    let mut merges = 0;
    let mut read = 0;
    let mut write = 0;

    while read < len {
        if read + 1 < len && pair.matches(&word[read], &word[read + 1]) {
            word[write] = pair.merged();
            read += 2;
            merges += 1;
        } else {
            if write != read {
                word.swap(write, read);
            }
            read += 1;
        }
        write += 1;
    }

    word.truncate(write);
    merges
}

/// Apply a merge to every word. Returns the total number of merges performed.
pub fn apply_merge_all(words: &mut [Word], pair: &Pair) -> usize {
    words.iter_mut().map(|word| apply_merge(word, pair)).sum()
}
