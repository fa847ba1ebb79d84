//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};
use std::time::Duration;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] before the cast
        ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Feedback as letters tinted with their mark colour
#[must_use]
pub fn colored_guess(guess: &str, feedback: Feedback) -> String {
    guess
        .chars()
        .zip(feedback.marks())
        .map(|(c, mark)| tint(&format!(" {c} "), mark).to_string())
        .collect()
}

fn tint(text: &str, mark: Mark) -> ColoredString {
    match mark {
        Mark::Green => text.black().on_green().bold(),
        Mark::Yellow => text.black().on_yellow().bold(),
        Mark::Black => text.white().on_bright_black(),
    }
}

/// Short marker for words that can still be the answer
#[must_use]
pub const fn candidate_marker(is_candidate: bool) -> &'static str {
    if is_candidate { "✓" } else { " " }
}

/// Human-friendly elapsed time
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_secs_f64() * 1000.0;
    if millis < 1000.0 {
        format!("{millis:.1}ms")
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
