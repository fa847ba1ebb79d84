//! Simple interactive CLI mode
//!
//! Text-based assistant without TUI: you type what you played and the
//! feedback it got, and it ranks the next guesses.

use crate::core::Feedback;
use crate::output::{print_history, print_round_report, print_starters};
use crate::solver::{GameStatus, Session};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the user typed at a prompt
enum Input {
    Text(String),
    Quit,
    Undo,
    New,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple(session: &mut Session<'_>) -> io::Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock())
}

/// Run the interactive loop reading from `input`
///
/// End of input quits.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple_with<R: BufRead>(session: &mut Session<'_>, input: &mut R) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║           Wordle Eliminator - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Tell me each word you played and the feedback it got.");
    println!("Feedback has one symbol per letter:\n");
    println!("  - G/g/🟩 for green (right letter, right place)");
    println!("  - Y/y/🟨 for yellow (in the word, elsewhere)");
    println!("  - B/b/-/⬜ for black (ruled out)\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'undo' to take back a round\n");

    print_starters(session.suggestions(), session.config().top_k.min(5));

    loop {
        if session.status() != GameStatus::Active {
            match prompt(input, "Play again? ('yes' or 'new', 'no' to quit, 'undo')")? {
                Input::Text(answer) if matches!(answer.as_str(), "yes" | "y") => {
                    start_new_game(session);
                }
                Input::New => start_new_game(session),
                Input::Undo => undo(session),
                _ => break,
            }
            continue;
        }

        println!("{}", "─".repeat(60));
        println!(
            "Round {}: {} candidates remaining",
            session.round() + 1,
            session.candidates().len()
        );
        if let Some(best) = session.best_guess() {
            println!("Suggested guess: {}", best.text().bright_green().bold());
        }

        let guess = match prompt(input, "Word you played")? {
            Input::Text(text) => match session.parse_guess(&text) {
                Ok(word) => word,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            },
            Input::Undo => {
                undo(session);
                continue;
            }
            Input::New => {
                start_new_game(session);
                continue;
            }
            Input::Quit => break,
        };

        let feedback = loop {
            match prompt(input, "Feedback (G/Y/B)")? {
                Input::Text(text) => match Feedback::parse(&text, session.vocabulary().word_len())
                {
                    Ok(feedback) => break Some(feedback),
                    Err(e) => println!("❌ {e}\n"),
                },
                Input::Undo | Input::New => break None,
                Input::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        };

        let Some(feedback) = feedback else {
            println!("Round discarded.\n");
            continue;
        };

        match session.record(&guess, feedback) {
            Ok(report) => {
                print_round_report(&report, session);
                if session.status() != GameStatus::Active {
                    print_history(session.history());
                }
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn start_new_game(session: &mut Session<'_>) {
    session.reset();
    println!("\n🔄 New game started!\n");
    print_starters(session.suggestions(), session.config().top_k.min(5));
}

fn undo(session: &mut Session<'_>) {
    if session.undo() {
        println!("✓ Undone! Back to round {}\n", session.round() + 1);
    } else {
        println!("Nothing to undo!\n");
    }
}

/// Read one line, mapping commands
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Input> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Input::Quit);
    }

    let text = line.trim().to_lowercase();
    Ok(match text.as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "undo" | "u" => Input::Undo,
        "new" | "n" => Input::New,
        _ => Input::Text(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Vocabulary, Word};
    use crate::solver::SessionConfig;
    use std::io::Cursor;

    fn vocab(texts: &[&str]) -> Vocabulary {
        Vocabulary::new(texts.iter().map(|t| Word::new(t).unwrap())).unwrap()
    }

    #[test]
    fn plays_rounds_from_input() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut session = Session::new(&vocab, SessionConfig::default());
        let mut input = Cursor::new("crane\nbbgbg\nslate\nbgggg\nno\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn new_after_win_starts_another_game() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut session = Session::new(&vocab, SessionConfig::default());
        let mut input = Cursor::new("crane\nggggg\nnew\ncrane\nbbgbg\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.status(), GameStatus::Active);
        assert_eq!(session.round(), 1);
        assert_eq!(session.candidates().len(), 2);
    }

    #[test]
    fn no_after_win_quits() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut session = Session::new(&vocab, SessionConfig::default());
        let mut input = Cursor::new("crane\nggggg\nno\ncrane\nbbgbg\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn bad_input_is_retried() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut session = Session::new(&vocab, SessionConfig::default());
        let mut input = Cursor::new("irate\ncrane\nbbxbg\nbbgbg\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.round(), 1);
        assert_eq!(session.candidates().len(), 2);
    }

    #[test]
    fn undo_and_end_of_input() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut session = Session::new(&vocab, SessionConfig::default());
        let mut input = Cursor::new("crane\nbbgbg\nundo\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.round(), 0);
        assert_eq!(session.candidates().len(), 3);
    }

    #[test]
    fn undo_at_feedback_prompt_discards_round() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut session = Session::new(&vocab, SessionConfig::default());
        let mut input = Cursor::new("crane\nundo\nquit\n");

        run_simple_with(&mut session, &mut input).unwrap();

        assert_eq!(session.round(), 0);
    }
}
