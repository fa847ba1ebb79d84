//! TUI application state and logic

use crate::core::{Feedback, Word};
use crate::solver::{GameStatus, RoundOutcome, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub input_mode: InputMode,
    pub guess_buffer: String,
    pub feedback_buffer: String,
    /// Guess waiting for its feedback
    pub pending_guess: Option<Word>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub last_elapsed: Option<Duration>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    Feedback,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    fn record(&mut self, status: GameStatus, guesses: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            self.guess_distribution[guesses.min(6)] += 1;
        }
    }

    fn forget(&mut self, status: GameStatus, guesses: usize) {
        self.total_games = self.total_games.saturating_sub(1);
        if status == GameStatus::Won {
            self.games_won = self.games_won.saturating_sub(1);
            let slot = &mut self.guess_distribution[guesses.min(6)];
            *slot = slot.saturating_sub(1);
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        let mut app = Self {
            session,
            input_mode: InputMode::Guess,
            guess_buffer: String::new(),
            feedback_buffer: String::new(),
            pending_guess: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            last_elapsed: None,
            should_quit: false,
        };
        app.add_message(
            "Welcome! Type the word you played, or TAB for the suggestion.",
            MessageStyle::Info,
        );
        app
    }

    /// Letters per word in this game
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.session.vocabulary().word_len()
    }

    /// Fraction of the vocabulary ruled out so far
    #[must_use]
    pub fn eliminated_ratio(&self) -> f64 {
        let total = self.session.vocabulary().len();
        if total == 0 {
            return 0.0;
        }
        1.0 - self.session.candidates().len() as f64 / total as f64
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('z' | 'u') => self.undo_last(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.use_suggestion(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.guess_buffer.len() < self.word_len() {
                        self.guess_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.guess_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Esc => {
                    self.pending_guess = None;
                    self.feedback_buffer.clear();
                    self.input_mode = InputMode::Guess;
                }
                KeyCode::Char(c) if !c.is_whitespace() => {
                    if self.feedback_buffer.chars().count() < self.word_len() {
                        self.feedback_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.feedback_buffer.pop();
                }
                KeyCode::Enter => self.submit_feedback(),
                _ => {}
            },
        }
    }

    pub fn use_suggestion(&mut self) {
        if let Some(best) = self.session.best_guess() {
            self.guess_buffer = best.text().to_string();
        }
    }

    pub fn submit_guess(&mut self) {
        match self.session.parse_guess(&self.guess_buffer) {
            Ok(word) => {
                self.pending_guess = Some(word);
                self.feedback_buffer.clear();
                self.input_mode = InputMode::Feedback;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn submit_feedback(&mut self) {
        let Some(guess) = self.pending_guess.clone() else {
            self.input_mode = InputMode::Guess;
            return;
        };
        let feedback = match Feedback::parse(&self.feedback_buffer, self.word_len()) {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.session.record(&guess, feedback) {
            Ok(report) => {
                self.pending_guess = None;
                self.guess_buffer.clear();
                self.feedback_buffer.clear();
                self.input_mode = InputMode::Guess;

                match report.outcome {
                    RoundOutcome::Solved { guesses } => {
                        self.finish_game(guesses);
                        let celebration = match guesses {
                            1 => "🎯 HOLE IN ONE! 🌟",
                            2 => "🔥 Two guesses! 🔥",
                            3 => "✨ Three guesses! ✨",
                            4 => "👏 Four guesses! 👏",
                            5 => "🎉 Five guesses! 🎉",
                            6 => "😅 Got it in six! 😅",
                            _ => "🎊 SOLVED! 🎊",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                    }
                    RoundOutcome::Forced { answer, guesses } => {
                        self.finish_game(guesses);
                        self.add_message(
                            &format!("The answer must be {answer}"),
                            MessageStyle::Success,
                        );
                    }
                    RoundOutcome::Contradiction => {
                        self.finish_game(report.round);
                        self.add_message(
                            "No word fits that feedback. Press 'u' to undo.",
                            MessageStyle::Error,
                        );
                    }
                    RoundOutcome::Ranked { elapsed, .. } => {
                        self.last_elapsed = Some(elapsed);
                        self.add_message(
                            &format!("{} candidates remaining", report.candidates_after),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self, guesses: usize) {
        self.stats.record(self.session.status(), guesses);
        self.input_mode = InputMode::GameOver;
    }

    /// Guesses a finished game is counted with
    fn finished_guesses(&self) -> usize {
        let round = self.session.round();
        if self.session.status() == GameStatus::Won && !self.session.candidates().is_empty() {
            let solved_on_last = self
                .session
                .history()
                .last()
                .is_some_and(|entry| entry.feedback.is_all_green());
            if solved_on_last { round } else { round + 1 }
        } else {
            round
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.pending_guess = None;
        self.guess_buffer.clear();
        self.feedback_buffer.clear();
        self.last_elapsed = None;
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        let status = self.session.status();
        let guesses = self.finished_guesses();

        if self.session.undo() {
            if status != GameStatus::Active {
                self.stats.forget(status, guesses);
            }
            self.pending_guess = None;
            self.feedback_buffer.clear();
            self.input_mode = InputMode::Guess;
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;
    use crate::solver::SessionConfig;

    fn vocab(texts: &[&str]) -> Vocabulary {
        Vocabulary::new(texts.iter().map(|t| Word::new(t).unwrap())).unwrap()
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn play(app: &mut App<'_>, guess: &str, feedback: &str) {
        type_text(app, guess);
        press(app, KeyCode::Enter);
        type_text(app, feedback);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn guess_then_feedback_plays_a_round() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut app = App::new(Session::new(&vocab, SessionConfig::default()));

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.pending_guess.as_ref().map(Word::text), Some("CRANE"));

        type_text(&mut app, "BBGBG");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.session.round(), 1);
        assert_eq!(app.session.candidates().len(), 2);
        assert!(app.last_elapsed.is_some());
    }

    #[test]
    fn rejected_guess_stays_in_guess_mode() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut app = App::new(Session::new(&vocab, SessionConfig::default()));

        type_text(&mut app, "irate");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn guess_buffer_is_capped_at_word_length() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut app = App::new(Session::new(&vocab, SessionConfig::default()));

        type_text(&mut app, "cranes1");
        assert_eq!(app.guess_buffer, "CRANE");
    }

    #[test]
    fn tab_fills_suggestion() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let session = Session::new(&vocab, SessionConfig::default());
        let mut app = App::new(session);
        play(&mut app, "crane", "bbgbg");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.guess_buffer, "SLATE");
    }

    #[test]
    fn forced_answer_ends_game_and_counts_win() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut app = App::new(Session::new(&vocab, SessionConfig::default()));

        play(&mut app, "crane", "bbgbg");
        play(&mut app, "slate", "bgggg");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[3], 1);
    }

    #[test]
    fn undo_after_game_over_forgets_result() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut app = App::new(Session::new(&vocab, SessionConfig::default()));

        play(&mut app, "crane", "ggggg");
        assert_eq!(app.stats.guess_distribution[1], 1);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.stats.total_games, 0);
        assert_eq!(app.stats.guess_distribution[1], 0);
    }

    #[test]
    fn contradiction_counts_as_loss() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut app = App::new(Session::new(&vocab, SessionConfig::default()));

        play(&mut app, "crane", "ggggb");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn escape_in_feedback_returns_to_guess() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut app = App::new(Session::new(&vocab, SessionConfig::default()));

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.pending_guess.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn control_keys() {
        let vocab = vocab(&["crane", "slate", "plate"]);
        let mut app = App::new(Session::new(&vocab, SessionConfig::default()));
        play(&mut app, "crane", "bbgbg");

        app.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        assert_eq!(app.session.round(), 0);

        play(&mut app, "crane", "bbgbg");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.session.round(), 0);
        assert!(!app.session.can_undo());

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn eliminated_ratio_tracks_candidates() {
        let vocab = vocab(&["crane", "slate", "plate", "irate"]);
        let mut app = App::new(Session::new(&vocab, SessionConfig::default()));
        assert!(app.eliminated_ratio().abs() < f64::EPSILON);

        play(&mut app, "crane", "bbgbg");
        assert!(app.eliminated_ratio() > 0.0);
    }
}
