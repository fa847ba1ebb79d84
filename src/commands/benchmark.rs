//! Benchmark command
//!
//! Plays the solver against a sample of answers and tallies the guess counts.

use super::solve::{SolveConfig, solve_word};
use crate::core::{Vocabulary, Word};
use crate::solver::{ScoreEntry, SessionConfig};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Average over solved words only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses taken -> number of solved words
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct vocabulary words as answers
///
/// The same `seed` always picks the same words.
#[must_use]
pub fn sample_answers(vocabulary: &Vocabulary, count: usize, seed: Option<u64>) -> Vec<&Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    vocabulary
        .words()
        .choose_multiple(&mut rng, count)
        .collect()
}

/// Solve every target and collect statistics
///
/// A word counts as failed when it is not found within `max_guesses`.
pub fn run_benchmark<'a>(
    vocabulary: &'a Vocabulary,
    session_config: SessionConfig,
    starters: &[ScoreEntry<'a>],
    targets: &[&Word],
    max_guesses: usize,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut failed = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    let progress = ProgressBar::new(targets.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );

    for target in targets {
        let mut config = SolveConfig::new(target.text().to_string());
        config.max_guesses = max_guesses;

        match solve_word(&config, vocabulary, session_config, starters) {
            Ok(result) if result.success => {
                let guesses = result.guesses.len();
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses_seen = max_guesses_seen.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Ok(_) => failed += 1,
            Err(e) => {
                warn!("could not solve {target}: {e}");
                failed += 1;
            }
        }

        progress.set_message(format!("solved {solved}, failed {failed}"));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        failed,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::starter_ranking;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn bundled() -> Vocabulary {
        Vocabulary::new(words_from_slice(WORDS, 5)).unwrap()
    }

    #[test]
    fn sampling_is_reproducible_with_seed() {
        let vocab = bundled();
        let a = sample_answers(&vocab, 10, Some(7));
        let b = sample_answers(&vocab, 10, Some(7));

        assert_eq!(a.len(), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn sample_larger_than_vocabulary_takes_everything() {
        let vocab = Vocabulary::new(words_from_slice(&["crane", "slate", "plate"], 5)).unwrap();
        assert_eq!(sample_answers(&vocab, 50, Some(1)).len(), 3);
    }

    #[test]
    fn benchmark_runs() {
        let vocab = bundled();
        let starters = starter_ranking(&vocab, SessionConfig::default().rules);
        let targets = sample_answers(&vocab, 5, Some(42));

        let result = run_benchmark(&vocab, SessionConfig::default(), &starters, &targets, 6);

        assert_eq!(result.total_words, 5);
        assert_eq!(result.solved + result.failed, 5);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
        if result.solved > 0 {
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
    }

    #[test]
    fn benchmark_small_vocabulary_solves_all() {
        let vocab = Vocabulary::new(words_from_slice(&["crane", "slate", "plate"], 5)).unwrap();
        let targets: Vec<&Word> = vocab.words().iter().collect();

        let result = run_benchmark(&vocab, SessionConfig::default(), &[], &targets, 6);

        assert_eq!(result.solved, 3);
        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert_eq!(result.distribution.get(&2), Some(&2));
    }

    #[test]
    fn benchmark_empty_targets() {
        let vocab = bundled();
        let result = run_benchmark(&vocab, SessionConfig::default(), &[], &[], 6);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
