//! Word solving command
//!
//! Plays the top-ranked guess against a known answer until it is found.

use crate::core::{Feedback, Vocabulary, Word};
use crate::solver::{
    GuessError, RoundError, RoundOutcome, ScoreEntry, Session, SessionConfig, starter_ranking,
};
use thiserror::Error;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected elimination of the guess, when it came from a ranking
    pub expected_elimination: Option<f64>,
}

/// Error type for simulations that cannot run
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] GuessError),
    #[error("no guess available")]
    NoSuggestion,
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Solve a specific word by always playing the best-ranked guess
///
/// `starters` is the opening ranking; it is computed when empty.
///
/// # Errors
///
/// Returns an error if the target is not a vocabulary word or a round
/// cannot be played.
pub fn solve_word<'a>(
    config: &SolveConfig,
    vocabulary: &'a Vocabulary,
    session_config: SessionConfig,
    starters: &[ScoreEntry<'a>],
) -> Result<SolveResult, SolveError> {
    let target = Word::with_length(&config.target, vocabulary.word_len())
        .map_err(GuessError::from)?;
    if !vocabulary.contains(&target) {
        return Err(GuessError::NotInVocabulary(target.text().to_string()).into());
    }

    let starters = if starters.is_empty() {
        starter_ranking(vocabulary, session_config.rules)
    } else {
        starters.to_vec()
    };
    let mut session = Session::new(vocabulary, session_config).with_starters(starters);
    let mut guesses: Vec<GuessStep> = Vec::new();

    while guesses.len() < config.max_guesses {
        let guess = session.best_guess().ok_or(SolveError::NoSuggestion)?;
        let expected_elimination = session
            .suggestions()
            .first()
            .filter(|entry| entry.word == guess)
            .map(|entry| entry.expected_elimination);

        let feedback = Feedback::calculate(guess, &target, session_config.rules);
        let report = session.record(guess, feedback)?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before: report.candidates_before,
            candidates_after: report.candidates_after,
            expected_elimination,
        });

        match report.outcome {
            RoundOutcome::Solved { .. } => return Ok(finish(config, guesses, true)),
            RoundOutcome::Contradiction => return Ok(finish(config, guesses, false)),
            RoundOutcome::Forced { answer, .. } => {
                if guesses.len() >= config.max_guesses {
                    break;
                }
                let feedback = Feedback::calculate(answer, &target, session_config.rules);
                guesses.push(GuessStep {
                    word: answer.text().to_string(),
                    feedback,
                    candidates_before: 1,
                    candidates_after: 1,
                    expected_elimination: None,
                });
                return Ok(finish(config, guesses, feedback.is_all_green()));
            }
            RoundOutcome::Ranked { .. } => {}
        }
    }

    Ok(finish(config, guesses, false))
}

fn finish(config: &SolveConfig, guesses: Vec<GuessStep>, success: bool) -> SolveResult {
    SolveResult {
        success,
        guesses,
        target: config.target.to_ascii_uppercase(),
    }
}
