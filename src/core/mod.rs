//! Core domain types
//!
//! Words, feedback and the vocabulary. Everything here is pure and
//! independent of how words are acquired or results are shown.

mod feedback;
mod vocabulary;
mod word;

pub use feedback::{Feedback, FeedbackError, FeedbackRules, Mark};
pub use vocabulary::{Vocabulary, VocabularyError};
pub use word::{MAX_WORD_LEN, Word, WordError};
