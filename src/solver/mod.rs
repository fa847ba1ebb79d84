//! Solving algorithms
//!
//! Candidate filtering, expected-elimination scoring and the round-by-round
//! session that ties them together.

mod config;
mod filter;
mod scoring;
mod session;

pub use config::{GuessPolicy, SessionConfig};
pub use filter::filter_candidates;
pub use scoring::{
    ScoreEntry, bucket_counts, expected_elimination, rank, score_guesses, starter_ranking,
};
pub use session::{
    GameStatus, GuessError, HistoryEntry, RoundError, RoundOutcome, RoundReport, Session,
};
