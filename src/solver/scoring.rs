//! Expected-elimination scoring
//!
//! For a guess `g` and `N` candidates, bucket the candidates by the feedback
//! `g` would receive against each of them. With bucket sizes `c_b`:
//!
//! ```text
//! E(g) = Σ_b (N − c_b) · c_b / N  =  N − Σ_b c_b² / N
//! ```
//!
//! is the expected number of candidates ruled out by playing `g`, assuming
//! every candidate is equally likely to be the answer.

use crate::core::{Feedback, FeedbackRules, Vocabulary, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// One row of a guess ranking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreEntry<'a> {
    pub word: &'a Word,
    /// Expected number of candidates eliminated
    pub expected_elimination: f64,
    /// `expected_elimination` plus the `1/N` bonus for candidates
    pub score: f64,
    /// Whether the word could still be the answer
    pub is_candidate: bool,
}

/// Partition candidates by the feedback `guess` would receive
///
/// The counts always sum to `candidates.len()`.
#[must_use]
pub fn bucket_counts(
    guess: &Word,
    candidates: &[&Word],
    rules: FeedbackRules,
) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let feedback = Feedback::calculate(guess, candidate, rules);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Expected number of candidates eliminated by playing `guess`
///
/// Zero when one or no candidates remain.
///
/// # Examples
/// ```
/// use wordle_eliminator::core::{FeedbackRules, Word};
/// use wordle_eliminator::solver::expected_elimination;
///
/// let words: Vec<Word> = ["crane", "slate", "plate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// // SLATE splits the three candidates into three singletons
/// let score = expected_elimination(&words[1], &candidates, FeedbackRules::Classic);
/// assert!((score - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_elimination(guess: &Word, candidates: &[&Word], rules: FeedbackRules) -> f64 {
    let total = candidates.len();
    if total <= 1 {
        return 0.0;
    }

    let sum_of_squares: u64 = bucket_counts(guess, candidates, rules)
        .values()
        .map(|&count| (count as u64).pow(2))
        .sum();
    let total = total as u64;

    // Exact integer numerator keeps equal partitions scoring identically
    (total * total - sum_of_squares) as f64 / total as f64
}

/// Score every vocabulary word as the next guess and rank them
///
/// Ranking is by descending score, then candidates before non-candidates,
/// then vocabulary order. Scoring runs in parallel across guesses.
#[must_use]
pub fn score_guesses<'a>(
    vocabulary: &'a [Word],
    candidates: &[&Word],
    rules: FeedbackRules,
) -> Vec<ScoreEntry<'a>> {
    let members: FxHashSet<&str> = candidates.iter().map(|w| w.text()).collect();
    let bonus = if candidates.len() > 1 {
        1.0 / candidates.len() as f64
    } else {
        0.0
    };

    let mut entries: Vec<ScoreEntry<'a>> = vocabulary
        .par_iter()
        .map(|guess| {
            let is_candidate = members.contains(guess.text());
            let expected = expected_elimination(guess, candidates, rules);
            ScoreEntry {
                word: guess,
                expected_elimination: expected,
                score: if is_candidate { expected + bonus } else { expected },
                is_candidate,
            }
        })
        .collect();

    rank(&mut entries);
    entries
}

/// Ranking for the opening guess: every word scored against the whole vocabulary
#[must_use]
pub fn starter_ranking(vocabulary: &Vocabulary, rules: FeedbackRules) -> Vec<ScoreEntry<'_>> {
    score_guesses(vocabulary.words(), &vocabulary.all_candidates(), rules)
}

/// Sort entries into ranking order (stable)
pub fn rank(entries: &mut [ScoreEntry<'_>]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &ScoreEntry<'_>, b: &ScoreEntry<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.is_candidate.cmp(&a.is_candidate))
}
