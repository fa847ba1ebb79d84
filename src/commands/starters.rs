//! Opening-guess ranking
//!
//! Scores every word against the whole vocabulary and keeps the result in the
//! starter cache so later runs skip the work.

use crate::core::{FeedbackRules, Vocabulary};
use crate::solver::{ScoreEntry, starter_ranking};
use crate::wordlists::starters::{load_starters, save_starters};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default cache file for `rules` inside `dir`
///
/// Each rule set ranks differently, so each has its own file.
#[must_use]
pub fn cache_path(dir: &Path, rules: FeedbackRules) -> PathBuf {
    match rules {
        FeedbackRules::Classic => dir.join("best_starters.csv"),
        FeedbackRules::Standard => dir.join("best_starters_standard.csv"),
    }
}

/// Score every opening guess, showing a spinner while it runs
#[must_use]
pub fn compute_starters(vocabulary: &Vocabulary, rules: FeedbackRules) -> Vec<ScoreEntry<'_>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Ranking {} opening guesses", vocabulary.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let ranking = starter_ranking(vocabulary, rules);

    spinner.finish_with_message(format!("Ranked {} opening guesses", ranking.len()));
    ranking
}

/// Load the opening ranking from `cache`, computing and saving it when needed
///
/// With `refresh` the cache is ignored and overwritten. A cache that cannot be
/// read or written only produces a warning.
#[must_use]
pub fn load_or_compute_starters<'a>(
    cache: Option<&Path>,
    vocabulary: &'a Vocabulary,
    rules: FeedbackRules,
    refresh: bool,
) -> Vec<ScoreEntry<'a>> {
    let Some(path) = cache else {
        return compute_starters(vocabulary, rules);
    };

    if !refresh {
        match load_starters(path, vocabulary, rules) {
            Ok(Some(ranking)) => return ranking,
            Ok(None) => {}
            Err(e) => warn!("ignoring starter cache {}: {e}", path.display()),
        }
    }

    let ranking = compute_starters(vocabulary, rules);
    if let Err(e) = save_starters(path, &ranking, rules) {
        warn!("could not save starter cache {}: {e}", path.display());
    }
    ranking
}
