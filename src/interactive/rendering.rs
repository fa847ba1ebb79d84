//! TUI rendering with ratatui
//!
//! Layout: suggestions and history on the left, search progress and messages
//! on the right, input and status along the bottom.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use crate::output::formatters::format_duration;
use crate::solver::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ELIMINATOR")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_suggestions(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let title = match app.last_elapsed {
        Some(elapsed) if session.round() > 0 => {
            format!(" Best Guesses (ranked in {}) ", format_duration(elapsed))
        }
        _ => " Best Guesses ".to_string(),
    };

    let items: Vec<ListItem> = if let [only] = session.candidates() {
        vec![ListItem::new(Line::from(vec![
            Span::raw("The answer is "),
            Span::styled(
                only.text().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))]
    } else {
        session
            .suggestions()
            .iter()
            .take(session.config().top_k)
            .enumerate()
            .map(|(i, entry)| {
                let word_style = if entry.is_candidate {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{:<8}", entry.word.text()), word_style),
                    Span::styled(
                        format!("{:>9.2}", entry.expected_elimination),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(if entry.is_candidate { "  ✓" } else { "" }),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .history()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(
                entry
                    .guess
                    .text()
                    .chars()
                    .zip(entry.feedback.marks())
                    .map(|(c, mark)| Span::styled(format!(" {c} "), mark_style(mark))),
            );
            spans.push(Span::raw(format!(
                "  {} → {}",
                entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn mark_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Green => Color::Green,
        Mark::Yellow => Color::Yellow,
        Mark::Black => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(50), // Candidates
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.candidates().len();
    let total = app.session.vocabulary().len();

    let gauge = Gauge::default()
        .block(Block::default().title(" Eliminated ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(app.eliminated_ratio().clamp(0.0, 1.0))
        .label(format!("{remaining}/{total} words remain"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();
    let limit = app.session.config().candidate_listing_limit;

    let content: Vec<Line> = if candidates.is_empty() {
        vec![Line::from("No words left")]
    } else if candidates.len() <= limit {
        let scored: Vec<Line> = app
            .session
            .suggestions()
            .iter()
            .filter(|entry| entry.is_candidate)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("  • {:<8}", entry.word.text()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!("{:.2}", entry.score),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect();
        if scored.is_empty() {
            candidates
                .iter()
                .map(|word| Line::from(format!("  • {word}")))
                .collect()
        } else {
            scored
        }
    } else {
        vec![Line::from(format!("{} candidates", candidates.len()))]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => {
            let title = match app.session.status() {
                GameStatus::Won => " 🎉 Solved! | n: new game  u: undo  q: quit ",
                _ => " Game over | n: new game  u: undo  q: quit ",
            };
            (title.to_string(), String::new(), Color::Green)
        }
        InputMode::Guess => (
            " Word you played | TAB: use suggestion  Enter: next ".to_string(),
            app.guess_buffer.clone(),
            Color::Cyan,
        ),
        InputMode::Feedback => (
            format!(
                " Feedback for {} (G=green Y=yellow B=black) | ESC: back ",
                app.pending_guess
                    .as_ref()
                    .map_or_else(String::new, ToString::to_string)
            ),
            app.feedback_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let round = Paragraph::new(format!(
        "Round {} | {}",
        app.session.round() + 1,
        app.session.status()
    ))
    .alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Ctrl-Z: Undo | Ctrl-N: New | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
