//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod starters;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_answers};
pub use simple::{run_simple, run_simple_with};
pub use solve::{GuessStep, SolveConfig, SolveError, SolveResult, solve_word};
pub use starters::{cache_path, compute_starters, load_or_compute_starters};
