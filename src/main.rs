//! Wordle Eliminator - CLI
//!
//! Expected-elimination assistant with TUI and console modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use std::path::{Path, PathBuf};
use wordle_eliminator::{
    commands::{
        SolveConfig, analyze_word, cache_path, compute_starters, load_or_compute_starters,
        run_benchmark, run_simple, sample_answers, solve_word,
    },
    core::{FeedbackRules, Vocabulary},
    output::{
        print_analysis_result, print_benchmark_result, print_ranking, print_solve_result,
    },
    solver::{GuessPolicy, ScoreEntry, Session, SessionConfig},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
        starters::save_starters,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_eliminator",
    about = "Wordle assistant that ranks guesses by expected candidate elimination",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, bundled list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// How repeated letters are marked
    #[arg(short, long, global = true, value_enum, default_value_t = RulesArg::Classic)]
    rules: RulesArg,

    /// Accept guesses that are not in the word list
    #[arg(long, global = true)]
    allow_any_guess: bool,

    /// Number of ranked guesses to show each round
    #[arg(short, long, global = true, default_value = "20")]
    top: usize,

    /// Word length
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Starter cache file (default: best_starters.csv, per rule set)
    #[arg(long, global = true)]
    starters_cache: Option<PathBuf>,

    /// Never read or write the starter cache
    #[arg(long, global = true)]
    no_cache: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RulesArg {
    /// Letters are marked by presence only
    Classic,
    /// Repeated letters are marked at most as often as the answer has them
    Standard,
}

impl From<RulesArg> for FeedbackRules {
    fn from(arg: RulesArg) -> Self {
        match arg {
            RulesArg::Classic => Self::Classic,
            RulesArg::Standard => Self::Standard,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive assistant without TUI)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and expected elimination per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Show the best opening guesses
    Starters {
        /// Number of guesses to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Recompute and overwrite the cache
        #[arg(long)]
        refresh: bool,
    },

    /// Benchmark solver performance on random answers
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for picking the words
        #[arg(short, long)]
        seed: Option<u64>,

        /// Guesses allowed per word
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },
}

/// Load the vocabulary selected by `-w`
///
/// - "all": the bundled word list
/// - "<path>": one word per line from a file
fn load_vocabulary(wordlist: &str, length: usize) -> Result<Vocabulary> {
    let words = match wordlist {
        "all" => words_from_slice(WORDS, length),
        path => load_from_file(path, length)
            .with_context(|| format!("failed to read word list {path}"))?,
    };

    Vocabulary::new(words).with_context(|| format!("no usable {length}-letter words in {wordlist}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let rules = FeedbackRules::from(cli.rules);
    let session_config = SessionConfig::new()
        .with_rules(rules)
        .with_guess_policy(if cli.allow_any_guess {
            GuessPolicy::Any
        } else {
            GuessPolicy::Vocabulary
        })
        .with_top_k(cli.top);

    let vocabulary = load_vocabulary(&cli.wordlist, cli.length)?;
    debug!("vocabulary has {} words", vocabulary.len());

    let cache = if cli.no_cache {
        None
    } else {
        Some(
            cli.starters_cache
                .clone()
                .unwrap_or_else(|| cache_path(Path::new("."), rules)),
        )
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let starters = load_or_compute_starters(cache.as_deref(), &vocabulary, rules, false);
            run_play_command(&vocabulary, session_config, starters)
        }
        Commands::Simple => {
            let starters = load_or_compute_starters(cache.as_deref(), &vocabulary, rules, false);
            let mut session = Session::new(&vocabulary, session_config).with_starters(starters);
            run_simple(&mut session).context("console session failed")
        }
        Commands::Solve { word, verbose } => {
            let starters = load_or_compute_starters(cache.as_deref(), &vocabulary, rules, false);
            let config = SolveConfig::new(word);
            let result = solve_word(&config, &vocabulary, session_config, &starters)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &vocabulary, rules)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Starters { count, refresh } => {
            run_starters_command(cache.as_deref(), &vocabulary, rules, count, refresh)
        }
        Commands::Benchmark {
            count,
            seed,
            max_guesses,
        } => {
            let starters = load_or_compute_starters(cache.as_deref(), &vocabulary, rules, false);
            let targets = sample_answers(&vocabulary, count, seed);
            println!("Running benchmark on {} random words...", targets.len());
            let result =
                run_benchmark(&vocabulary, session_config, &starters, &targets, max_guesses);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_starters_command(
    cache: Option<&Path>,
    vocabulary: &Vocabulary,
    rules: FeedbackRules,
    count: usize,
    refresh: bool,
) -> Result<()> {
    let ranking: Vec<ScoreEntry<'_>> = match cache {
        Some(path) if refresh => {
            let ranking = compute_starters(vocabulary, rules);
            save_starters(path, &ranking, rules)
                .with_context(|| format!("failed to write {}", path.display()))?;
            ranking
        }
        _ => load_or_compute_starters(cache, vocabulary, rules, false),
    };

    println!("\nBest opening guesses over {} words:\n", vocabulary.len());
    print_ranking(&ranking, count);
    Ok(())
}

fn run_play_command(
    vocabulary: &Vocabulary,
    session_config: SessionConfig,
    starters: Vec<ScoreEntry<'_>>,
) -> Result<()> {
    use wordle_eliminator::interactive::{App, run_tui};

    let session = Session::new(vocabulary, session_config).with_starters(starters);
    run_tui(App::new(session))
}
