//! Feedback calculation and representation
//!
//! A feedback pattern is stored as a base-3 code:
//! - 0 = Black (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! Position `i` contributes `digit × 3^i` to the code.

use super::Word;
use super::word::MAX_WORD_LEN;
use std::fmt;
use thiserror::Error;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Black,
    Yellow,
    Green,
}

impl Mark {
    const fn digit(self) -> u32 {
        match self {
            Self::Black => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Black,
        }
    }

    /// Canonical single-letter symbol (`G`, `Y` or `B`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts `G`/`Y`/`B` in either case, `-`/`_` for Black, and the
    /// coloured-square emoji the game shares.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'B' | 'b' | '-' | '_' | '⬜' | '⬛' => Some(Self::Black),
            _ => None,
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Black => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

/// How feedback treats letters that repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedbackRules {
    /// Each position is judged on its own: Green on an exact match, else
    /// Yellow if the letter appears anywhere in the answer, else Black.
    /// A letter that appears once in the answer can be Yellow more than once.
    #[default]
    Classic,
    /// Greens first, then Yellows consume the remaining count of each
    /// answer letter from left to right. Matches the game exactly.
    Standard,
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must be exactly {expected} symbols, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid feedback symbol {0:?} (use G, Y or B)")]
    InvalidSymbol(char),
    #[error("feedback has {actual} symbols, at most {max} are supported")]
    TooLong { max: usize, actual: usize },
}

/// Feedback for one guess: one [`Mark`] per letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    code: u32,
    len: u8,
}

impl Feedback {
    /// Build feedback from individual marks
    ///
    /// # Errors
    /// Returns `FeedbackError::TooLong` if more than [`MAX_WORD_LEN`] marks are given.
    pub fn try_from_marks(marks: &[Mark]) -> Result<Self, FeedbackError> {
        if marks.len() > MAX_WORD_LEN {
            return Err(FeedbackError::TooLong {
                max: MAX_WORD_LEN,
                actual: marks.len(),
            });
        }
        Ok(Self::from_marks(marks))
    }

    /// Callers guarantee at most [`MAX_WORD_LEN`] marks
    pub(crate) fn from_marks(marks: &[Mark]) -> Self {
        debug_assert!(marks.len() <= MAX_WORD_LEN, "too many feedback marks");

        let mut code = 0u32;
        let mut multiplier = 1u32;
        for mark in marks {
            code += mark.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self {
            code,
            len: marks.len() as u8,
        }
    }

    /// All-Green feedback for a word of `len` letters
    #[cfg(test)]
    pub(crate) fn all_green(len: usize) -> Self {
        Self::from_marks(&vec![Mark::Green; len])
    }

    /// Calculate the feedback `guess` receives when `answer` is the target
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::{Feedback, FeedbackRules, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer, FeedbackRules::Classic);
    /// assert_eq!(feedback.to_string(), "BBGBG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word, rules: FeedbackRules) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        let marks: Vec<Mark> = match rules {
            FeedbackRules::Classic => guess
                .letters()
                .iter()
                .zip(answer.letters())
                .map(|(&g, &a)| {
                    if g == a {
                        Mark::Green
                    } else if answer.has_letter(g) {
                        Mark::Yellow
                    } else {
                        Mark::Black
                    }
                })
                .collect(),
            FeedbackRules::Standard => standard_marks(guess, answer),
        };

        Self::from_marks(&marks)
    }

    /// Parse feedback text of exactly `expected_len` symbols
    ///
    /// # Errors
    /// Returns `FeedbackError` on a length mismatch or an unknown symbol.
    pub fn parse(text: &str, expected_len: usize) -> Result<Self, FeedbackError> {
        let marks = text
            .trim()
            .chars()
            .map(|ch| Mark::from_symbol(ch).ok_or(FeedbackError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        if marks.len() != expected_len {
            return Err(FeedbackError::InvalidLength {
                expected: expected_len,
                actual: marks.len(),
            });
        }

        Self::try_from_marks(&marks)
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self.code
    }

    /// Number of marks
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Iterate over the marks, leftmost first
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        let mut rest = self.code;
        (0..self.len()).map(move |_| {
            let mark = Mark::from_digit(rest % 3);
            rest /= 3;
            mark
        })
    }

    /// Mark at a given position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn mark_at(self, position: usize) -> Mark {
        assert!(position < self.len(), "feedback position out of range");
        self.marks().nth(position).unwrap_or(Mark::Black)
    }

    /// Check if every mark is Green
    #[must_use]
    pub fn is_all_green(self) -> bool {
        self.len > 0 && self.marks().all(|mark| mark == Mark::Green)
    }

    /// Count the Green marks
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.marks().filter(|&mark| mark == Mark::Green).count()
    }

    /// Count the Yellow marks
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.marks().filter(|&mark| mark == Mark::Yellow).count()
    }

    /// Render as coloured squares, e.g. "⬜⬜🟩⬜🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().map(Mark::emoji).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks().try_for_each(|mark| write!(f, "{}", mark.symbol()))
    }
}

/// Two-pass marking with bounded letter multiplicity
fn standard_marks(guess: &Word, answer: &Word) -> Vec<Mark> {
    let mut marks = vec![Mark::Black; guess.len()];
    let mut available = answer.letter_counts();

    for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
        if g == a {
            marks[i] = Mark::Green;
            available[usize::from(g - b'A')] -= 1;
        }
    }

    for (i, &g) in guess.letters().iter().enumerate() {
        let slot = &mut available[usize::from(g - b'A')];
        if marks[i] == Mark::Black && *slot > 0 {
            marks[i] = Mark::Yellow;
            *slot -= 1;
        }
    }

    marks
}
