//! Display functions for command results

use super::formatters::{candidate_marker, colored_guess, create_progress_bar, format_duration};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::{HistoryEntry, RoundOutcome, RoundReport, ScoreEntry, Session};
use colored::Colorize;

/// Print the best opening guesses
pub fn print_starters(ranking: &[ScoreEntry<'_>], count: usize) {
    if ranking.is_empty() {
        return;
    }
    println!("{}", "Best opening guesses:".bright_cyan().bold());
    print_ranking(ranking, count);
    println!();
}

/// Print the top `count` rows of a ranking
pub fn print_ranking(ranking: &[ScoreEntry<'_>], count: usize) {
    let max_score = ranking.first().map_or(0.0, |entry| entry.score);

    println!(
        "   {:>3}  {:<8} {:>10} {:>10}",
        "#".bright_black(),
        "Guess".bright_black(),
        "Expected".bright_black(),
        "Score".bright_black()
    );
    for (i, entry) in ranking.iter().take(count).enumerate() {
        let bar = create_progress_bar(entry.score, max_score, 12);
        println!(
            "   {:>3}. {:<8} {:>10.2} {:>10.3}  {} {}",
            i + 1,
            entry.word.text().bright_white().bold(),
            entry.expected_elimination,
            entry.score,
            bar.green(),
            candidate_marker(entry.is_candidate).bright_green()
        );
    }
}

/// Print what one round of a session led to
pub fn print_round_report(report: &RoundReport<'_>, session: &Session<'_>) {
    println!(
        "\n{}  {} → {} candidates",
        colored_guess(report.guess.text(), report.feedback),
        report.candidates_before,
        report.candidates_after
    );

    match &report.outcome {
        RoundOutcome::Solved { guesses } => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                format!(
                    "    🎉  Solved in {guesses} {}!",
                    if *guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        RoundOutcome::Forced { answer, guesses } => {
            println!(
                "\n{} {} {}",
                "✨ The answer must be".bright_green(),
                answer.text().bright_yellow().bold(),
                format!("(solved in {guesses})").bright_black()
            );
        }
        RoundOutcome::Contradiction => {
            println!(
                "\n{}",
                "❌ No word fits that feedback. Check it, or type 'undo'."
                    .red()
                    .bold()
            );
        }
        RoundOutcome::Ranked { ranking, elapsed } => {
            println!(
                "{}",
                format!("Ranked {} guesses in {}", ranking.len(), format_duration(*elapsed))
                    .bright_black()
            );
            println!();
            print_ranking(ranking, session.config().top_k);

            if session.candidates().len() <= session.config().candidate_listing_limit {
                println!("\n{}", "Possible answers:".bright_cyan().bold());
                for entry in ranking.iter().filter(|entry| entry.is_candidate) {
                    println!(
                        "   {:<8} {:>10.2} {:>10.3}",
                        entry.word.text().bright_yellow(),
                        entry.expected_elimination,
                        entry.score
                    );
                }
            }
            println!();
        }
    }
}

/// Print every round played so far
pub fn print_history(history: &[HistoryEntry]) {
    if history.is_empty() {
        return;
    }
    println!("\n  Guess history:");
    for (i, entry) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            entry.guess.text().bright_white().bold(),
            entry.feedback.to_emoji()
        );
    }
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word,
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(expected) = step.expected_elimination {
                println!("  Expected:   {expected:.2} eliminated");
                let actual = step.candidates_before - step.candidates_after;
                println!("  Actual:     {actual} eliminated");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPENING ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(
        result.expected_elimination,
        result.total_candidates as f64,
        30,
    );

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Eliminated:  [{}] {}",
        bar.green(),
        format!("{:.2} expected", result.expected_elimination).bright_yellow()
    );
    println!(
        "   Remaining:   {:.2} candidates expected",
        result.expected_remaining
    );
    println!("   Outcomes:    {} distinct feedbacks", result.buckets);
    println!(
        "   Worst case:  {} candidates remain",
        result.largest_bucket
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    println!(
        "   Failed:           {}",
        if result.failed == 0 {
            result.failed.to_string().green()
        } else {
            result.failed.to_string().red()
        }
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    if result.failed > 0 {
        let pct = (result.failed as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   X: {} {:4} ({pct:5.1}%)", bar.red(), result.failed);
    }
}
