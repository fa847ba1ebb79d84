//! Interactive solving session
//!
//! Tracks the candidate set across rounds. Each round takes one guess and
//! the feedback it received, narrows the candidates and either ends the game
//! or ranks every vocabulary word as the next guess.

use super::config::{GuessPolicy, SessionConfig};
use super::filter::filter_candidates;
use super::scoring::{ScoreEntry, score_guesses};
use crate::core::{Feedback, FeedbackError, Vocabulary, Word, WordError};
use log::debug;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Failed,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Failed => "failed",
        })
    }
}

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("{0} is not in the vocabulary")]
    NotInVocabulary(String),
}

/// Why a round could not be played
///
/// A rejected round leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("malformed guess: {0}")]
    MalformedGuess(#[from] GuessError),
    #[error("malformed feedback: {0}")]
    MalformedFeedback(#[from] FeedbackError),
    #[error("the game is already over ({0})")]
    SessionFinished(GameStatus),
}

/// One accepted round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// What a round led to
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome<'a> {
    /// The feedback was all Green
    Solved { guesses: usize },
    /// Exactly one candidate is left; playing it next wins
    Forced { answer: &'a Word, guesses: usize },
    /// No word fits the feedback given so far
    Contradiction,
    /// Game continues with a fresh ranking of every vocabulary word
    Ranked {
        ranking: Vec<ScoreEntry<'a>>,
        elapsed: Duration,
    },
}

/// Result of [`Session::submit`]
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport<'a> {
    pub round: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub outcome: RoundOutcome<'a>,
}

#[derive(Debug, Clone)]
struct RoundState<'a> {
    round: usize,
    status: GameStatus,
    candidates: Vec<&'a Word>,
    suggestions: Vec<ScoreEntry<'a>>,
    history: Vec<HistoryEntry>,
}

/// Solver state for one game
///
/// The vocabulary and an optional opening ranking are injected; the session
/// never reads files itself.
pub struct Session<'a> {
    vocabulary: &'a Vocabulary,
    config: SessionConfig,
    starters: Vec<ScoreEntry<'a>>,
    state: RoundState<'a>,
    undo_stack: Vec<RoundState<'a>>,
}

impl<'a> Session<'a> {
    /// Start a game with every vocabulary word as a candidate
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, config: SessionConfig) -> Self {
        Self {
            vocabulary,
            config,
            starters: Vec::new(),
            state: RoundState {
                round: 0,
                status: GameStatus::Active,
                candidates: vocabulary.all_candidates(),
                suggestions: Vec::new(),
                history: Vec::new(),
            },
            undo_stack: Vec::new(),
        }
    }

    /// Supply the opening ranking (usually from the starter cache)
    #[must_use]
    pub fn with_starters(mut self, starters: Vec<ScoreEntry<'a>>) -> Self {
        if self.state.round == 0 {
            self.state.suggestions.clone_from(&starters);
        }
        self.starters = starters;
        self
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Guesses received so far
    #[must_use]
    pub const fn round(&self) -> usize {
        self.state.round
    }

    /// Words still consistent with every accepted round
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.state.candidates
    }

    /// Latest ranking: the opening ranking before the first round
    #[must_use]
    pub fn suggestions(&self) -> &[ScoreEntry<'a>] {
        &self.state.suggestions
    }

    /// The top-ranked next guess, or the forced answer when only one word is left
    #[must_use]
    pub fn best_guess(&self) -> Option<&'a Word> {
        match self.state.candidates.as_slice() {
            [only] => Some(*only),
            _ => self.state.suggestions.first().map(|entry| entry.word),
        }
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.state.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Validate guess text against the vocabulary's word length and the guess policy
    ///
    /// # Errors
    /// Returns `GuessError` for malformed text, or a non-vocabulary word
    /// under [`GuessPolicy::Vocabulary`].
    pub fn parse_guess(&self, text: &str) -> Result<Word, GuessError> {
        let word = Word::with_length(text.trim(), self.vocabulary.word_len())?;
        self.check_guess(&word)?;
        Ok(word)
    }

    fn check_guess(&self, word: &Word) -> Result<(), GuessError> {
        if word.len() != self.vocabulary.word_len() {
            return Err(WordError::InvalidLength {
                expected: self.vocabulary.word_len(),
                actual: word.len(),
            }
            .into());
        }
        if self.config.guess_policy == GuessPolicy::Vocabulary && !self.vocabulary.contains(word)
        {
            return Err(GuessError::NotInVocabulary(word.text().to_string()));
        }
        Ok(())
    }

    /// Play one round from raw text
    ///
    /// # Errors
    /// Returns `RoundError` if the game is over or either input is malformed.
    /// Nothing changes on error.
    pub fn submit(&mut self, guess: &str, feedback: &str) -> Result<RoundReport<'a>, RoundError> {
        self.ensure_active()?;
        let guess = self.parse_guess(guess)?;
        let feedback = Feedback::parse(feedback, self.vocabulary.word_len())?;
        self.record(&guess, feedback)
    }

    /// Play one round from already-parsed values
    ///
    /// # Errors
    /// Same as [`Session::submit`].
    pub fn record(
        &mut self,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<RoundReport<'a>, RoundError> {
        self.ensure_active()?;
        self.check_guess(guess)?;
        if feedback.len() != self.vocabulary.word_len() {
            return Err(FeedbackError::InvalidLength {
                expected: self.vocabulary.word_len(),
                actual: feedback.len(),
            }
            .into());
        }

        self.undo_stack.push(self.state.clone());
        self.state.round += 1;
        let round = self.state.round;
        let candidates_before = self.state.candidates.len();

        let outcome = if feedback.is_all_green() {
            self.state.status = GameStatus::Won;
            self.state.suggestions.clear();
            RoundOutcome::Solved { guesses: round }
        } else {
            self.state.candidates =
                filter_candidates(guess, feedback, &self.state.candidates, self.config.rules);

            match self.state.candidates.as_slice() {
                [] => {
                    self.state.status = GameStatus::Failed;
                    self.state.suggestions.clear();
                    RoundOutcome::Contradiction
                }
                [answer] => {
                    self.state.status = GameStatus::Won;
                    self.state.suggestions.clear();
                    RoundOutcome::Forced {
                        answer: *answer,
                        guesses: round + 1,
                    }
                }
                candidates => {
                    let start = Instant::now();
                    let ranking =
                        score_guesses(self.vocabulary.words(), candidates, self.config.rules);
                    let elapsed = start.elapsed();
                    debug!(
                        "scored {} guesses against {} candidates in {elapsed:?}",
                        ranking.len(),
                        candidates.len()
                    );
                    self.state.suggestions.clone_from(&ranking);
                    RoundOutcome::Ranked { ranking, elapsed }
                }
            }
        };

        let candidates_after = self.state.candidates.len();
        debug!(
            "round {round}: {guess} -> {feedback}, {candidates_before} -> {candidates_after} candidates, {}",
            self.state.status
        );

        self.state.history.push(HistoryEntry {
            guess: guess.clone(),
            feedback,
            candidates_before,
            candidates_after,
        });

        Ok(RoundReport {
            round,
            guess: guess.clone(),
            feedback,
            candidates_before,
            candidates_after,
            outcome,
        })
    }

    /// Step back one round, returning false if there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                self.state = previous;
                debug!("undone to round {}", self.state.round);
                true
            }
            None => false,
        }
    }

    /// Start a new game over the same vocabulary
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.state = RoundState {
            round: 0,
            status: GameStatus::Active,
            candidates: self.vocabulary.all_candidates(),
            suggestions: self.starters.clone(),
            history: Vec::new(),
        };
    }

    const fn ensure_active(&self) -> Result<(), RoundError> {
        match self.state.status {
            GameStatus::Active => Ok(()),
            status => Err(RoundError::SessionFinished(status)),
        }
    }
}
