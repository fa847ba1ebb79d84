//! Wordle Eliminator
//!
//! An assistant for Wordle-style games. After each guess and its feedback it
//! narrows the candidate answers and ranks every vocabulary word by how many
//! candidates it is expected to eliminate next.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_eliminator::core::{Vocabulary, Word};
//! use wordle_eliminator::solver::{RoundOutcome, Session, SessionConfig};
//!
//! let vocabulary = Vocabulary::new(
//!     ["crane", "slate", "plate"].iter().map(|w| Word::new(w).unwrap()),
//! )
//! .unwrap();
//! let mut session = Session::new(&vocabulary, SessionConfig::default());
//!
//! let report = session.submit("crane", "BBGBG").unwrap();
//! assert_eq!(report.candidates_after, 2);
//! if let RoundOutcome::Ranked { ranking, .. } = report.outcome {
//!     println!("Best next guess: {}", ranking[0].word);
//! }
//! ```

// Core domain types
pub mod core;

// Filtering, scoring and the session state machine
pub mod solver;

// Word lists and the starter cache
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
