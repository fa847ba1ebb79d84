//! Word representation
//!
//! A Word stores a fixed-length uppercase word along with per-letter counts
//! used by feedback calculation and candidate filtering.

use std::fmt;
use thiserror::Error;

/// Longest word a [`Word`] can hold.
///
/// Bounded so that every feedback pattern fits in a `u32` base-3 code.
pub const MAX_WORD_LEN: usize = 20;

/// An immutable word made of uppercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: Box<[u8]>,
    letter_counts: [u8; 26],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word must be at most {MAX_WORD_LEN} letters, got {0}")]
    TooLong(usize),
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word contains a non-letter character {0:?}")]
    NonAlphabetic(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive and stored uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, longer than [`MAX_WORD_LEN`],
    /// or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic(bad));
        }
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if text.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(text.len()));
        }

        let text = text.to_ascii_uppercase();
        let letters: Box<[u8]> = text.as_bytes().into();

        let mut letter_counts = [0u8; 26];
        for &letter in &letters {
            letter_counts[usize::from(letter - b'A')] += 1;
        }

        Ok(Self {
            text,
            letters,
            letter_counts,
        })
    }

    /// Create a new Word that must have exactly `len` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// [`Word::new`] would return.
    pub fn with_length(text: impl AsRef<str>, len: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == len {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: len,
                actual: word.len(),
            })
        }
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// How many times `letter` (uppercase ASCII) occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        letter
            .checked_sub(b'A')
            .and_then(|idx| self.letter_counts.get(usize::from(idx)))
            .copied()
            .unwrap_or(0)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Per-letter counts, indexed by `letter - b'A'`
    #[inline]
    pub(crate) const fn letter_counts(&self) -> [u8; 26] {
        self.letter_counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
