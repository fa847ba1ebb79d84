//! The fixed universe of legal guesses and possible answers

use super::Word;
use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Error type for vocabularies that cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("vocabulary is empty")]
    Empty,
    #[error("{word} has {actual} letters but the vocabulary uses {expected}")]
    MixedLength {
        word: String,
        expected: usize,
        actual: usize,
    },
}

/// Immutable, deduplicated set of same-length words
///
/// Words keep the order they were supplied in (first occurrence wins).
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    word_len: usize,
}

impl Vocabulary {
    /// Build a vocabulary, dropping duplicates
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` for no words, or
    /// `VocabularyError::MixedLength` when lengths disagree with the first word.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, VocabularyError> {
        let mut unique = Vec::new();
        let mut index = FxHashMap::default();
        let mut word_len = None;
        let mut duplicates = 0usize;

        for word in words {
            let expected = *word_len.get_or_insert(word.len());
            if word.len() != expected {
                return Err(VocabularyError::MixedLength {
                    word: word.text().to_string(),
                    expected,
                    actual: word.len(),
                });
            }

            if index.contains_key(word.text()) {
                duplicates += 1;
                continue;
            }
            index.insert(word.text().to_string(), unique.len());
            unique.push(word);
        }

        let word_len = word_len.ok_or(VocabularyError::Empty)?;
        if duplicates > 0 {
            debug!("dropped {duplicates} duplicate vocabulary entries");
        }

        Ok(Self {
            words: unique,
            index,
            word_len,
        })
    }

    /// All words, in vocabulary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by text (case-insensitive)
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index
            .get(&text.to_ascii_uppercase())
            .map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word.text())
    }

    /// Every word, as a fresh candidate set
    #[must_use]
    pub fn all_candidates(&self) -> Vec<&Word> {
        self.words.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn builds_and_looks_up() {
        let vocab = Vocabulary::new(words(&["crane", "slate", "plate"])).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.word_len(), 5);
        assert_eq!(vocab.get("Slate").map(Word::text), Some("SLATE"));
        assert!(vocab.get("irate").is_none());
        assert!(vocab.contains(&Word::new("plate").unwrap()));
    }

    #[test]
    fn drops_duplicates_keeping_first_order() {
        let vocab = Vocabulary::new(words(&["crane", "slate", "CRANE", "plate"])).unwrap();
        let texts: Vec<&str> = vocab.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "PLATE"]);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Vocabulary::new(Vec::new()).unwrap_err(), VocabularyError::Empty);
    }

    #[test]
    fn rejects_mixed_lengths() {
        let err = Vocabulary::new(words(&["crane", "slates"])).unwrap_err();
        assert_eq!(
            err,
            VocabularyError::MixedLength {
                word: "SLATES".to_string(),
                expected: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn all_candidates_covers_vocabulary() {
        let vocab = Vocabulary::new(words(&["abc", "def"])).unwrap();
        assert_eq!(vocab.all_candidates().len(), 2);
        assert_eq!(vocab.word_len(), 3);
    }
}
