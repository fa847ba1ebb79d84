//! Word list loading utilities
//!
//! Reads plain-text word lists, one word per line. Blank lines and lines
//! starting with `#` are ignored; entries that are not words of the requested
//! length are skipped.

use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words of length `word_len` from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_eliminator::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_len: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(&path)?;
    let words = parse_words(&content, word_len);
    debug!(
        "loaded {} words of length {word_len} from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// Parse a word list from text
#[must_use]
pub fn parse_words(content: &str, word_len: usize) -> Vec<Word> {
    let mut skipped = 0usize;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) if word.len() == word_len => Some(word),
            Ok(_) => {
                skipped += 1;
                None
            }
            Err(e) => {
                warn!("skipping word list entry {line:?}: {e}");
                None
            }
        })
        .collect();

    if skipped > 0 {
        debug!("skipped {skipped} entries that are not {word_len} letters long");
    }

    words
}

/// Convert an embedded string slice to words of length `word_len`
///
/// # Examples
/// ```
/// use wordle_eliminator::wordlists::loader::words_from_slice;
/// use wordle_eliminator::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_len: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, word_len).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl8te", "slate"], 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn parse_words_skips_comments_blanks_and_other_lengths() {
        let content = "# five letter words\ncrane\n\n  slate  \nabc\nsl@te\nPlate\n";
        let words = parse_words(content, 5);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "PLATE"]);
    }

    #[test]
    fn parse_words_other_lengths() {
        let words = parse_words("cat\ndog\nhorse\n", 3);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("/definitely/not/here.txt", 5).is_err());
    }

    #[test]
    fn embedded_words_are_valid() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS, 5);
        assert_eq!(words.len(), WORDS.len());
    }
}
