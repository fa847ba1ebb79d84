//! Word analysis command
//!
//! Shows how well a word splits the full vocabulary as an opening guess.

use crate::core::{FeedbackRules, Vocabulary, Word};
use crate::solver::{GuessError, bucket_counts};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub expected_elimination: f64,
    pub expected_remaining: f64,
    /// Number of distinct feedback outcomes
    pub buckets: usize,
    /// Size of the worst-case outcome
    pub largest_bucket: usize,
    pub total_candidates: usize,
}

/// Analyze a vocabulary word against every vocabulary word as a possible answer
///
/// # Errors
///
/// Returns an error if:
/// - The word has the wrong length or contains non-letters
/// - The word is not in the vocabulary
pub fn analyze_word(
    word: &str,
    vocabulary: &Vocabulary,
    rules: FeedbackRules,
) -> Result<AnalysisResult, GuessError> {
    let word_obj = Word::with_length(word.trim(), vocabulary.word_len())?;
    if !vocabulary.contains(&word_obj) {
        return Err(GuessError::NotInVocabulary(word_obj.text().to_string()));
    }

    let candidates = vocabulary.all_candidates();
    let counts = bucket_counts(&word_obj, &candidates, rules);

    let total_candidates = candidates.len();
    let sum_sq: usize = counts.values().map(|&c| c * c).sum();
    let expected_remaining = sum_sq as f64 / total_candidates as f64;

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        expected_elimination: total_candidates as f64 - expected_remaining,
        expected_remaining,
        buckets: counts.len(),
        largest_bucket: counts.values().copied().max().unwrap_or(0),
        total_candidates,
    })
}
