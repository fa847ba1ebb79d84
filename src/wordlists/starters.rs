//! Starter-score cache
//!
//! The opening ranking scores every word against the whole vocabulary, which
//! is the most expensive round. It is saved as a small CSV file whose header
//! names the feedback rules the scores were computed under:
//!
//! ```text
//! word,expected_eliminated,rules=classic
//! SLATE,883.21
//! ...
//! ```

use crate::core::{FeedbackRules, Vocabulary};
use crate::solver::{ScoreEntry, rank};
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Column names that start the header line
pub const HEADER: &str = "word,expected_eliminated";

/// Error type for unreadable cache files
#[derive(Debug, Error)]
pub enum StarterCacheError {
    #[error("failed to read starter cache: {0}")]
    Io(#[from] io::Error),
    #[error("starter cache is missing the {HEADER:?} header")]
    MissingHeader,
    #[error("starter cache names unknown rules {0:?}")]
    UnknownRules(String),
    #[error("starter cache line {line} is malformed: {content:?}")]
    Malformed { line: usize, content: String },
}

/// Parsed cache file
#[derive(Debug, Clone, PartialEq)]
pub struct StarterCache {
    /// Rules the scores were computed under, `None` for headers that predate the field
    pub rules: Option<FeedbackRules>,
    /// `(word, expected_eliminated)` rows in file order
    pub rows: Vec<(String, f64)>,
}

const fn rules_tag(rules: FeedbackRules) -> &'static str {
    match rules {
        FeedbackRules::Classic => "classic",
        FeedbackRules::Standard => "standard",
    }
}

fn parse_header(line: &str) -> Result<Option<FeedbackRules>, StarterCacheError> {
    let rest = line
        .trim()
        .strip_prefix(HEADER)
        .ok_or(StarterCacheError::MissingHeader)?;
    if rest.is_empty() {
        return Ok(None);
    }

    let tag = rest
        .strip_prefix(",rules=")
        .ok_or(StarterCacheError::MissingHeader)?;
    [FeedbackRules::Classic, FeedbackRules::Standard]
        .into_iter()
        .find(|&rules| rules_tag(rules) == tag)
        .map(Some)
        .ok_or_else(|| StarterCacheError::UnknownRules(tag.to_string()))
}

/// Write a ranking computed under `rules` in cache format
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_starters<W: Write>(
    mut writer: W,
    ranking: &[ScoreEntry<'_>],
    rules: FeedbackRules,
) -> io::Result<()> {
    writeln!(writer, "{HEADER},rules={}", rules_tag(rules))?;
    for entry in ranking {
        writeln!(writer, "{},{}", entry.word, entry.expected_elimination)?;
    }
    writer.flush()
}

/// Parse cache text into its rules and `(word, expected_eliminated)` rows
///
/// # Errors
///
/// Returns `StarterCacheError` if the header is missing or names unknown
/// rules, or if a row is malformed.
pub fn parse_starters(content: &str) -> Result<StarterCache, StarterCacheError> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let rules = match lines.next() {
        Some((_, header)) => parse_header(header)?,
        None => return Err(StarterCacheError::MissingHeader),
    };

    let rows: Vec<(String, f64)> = lines
        .map(|(idx, line)| {
            let malformed = || StarterCacheError::Malformed {
                line: idx + 1,
                content: line.to_string(),
            };
            let (word, score) = line.trim().split_once(',').ok_or_else(malformed)?;
            let score: f64 = score.trim().parse().map_err(|_| malformed())?;
            if !score.is_finite() || score < 0.0 {
                return Err(malformed());
            }
            Ok((word.trim().to_ascii_uppercase(), score))
        })
        .collect::<Result<_, _>>()?;

    Ok(StarterCache { rules, rows })
}

/// Save a ranking computed under `rules` to `path`
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn save_starters<P: AsRef<Path>>(
    path: P,
    ranking: &[ScoreEntry<'_>],
    rules: FeedbackRules,
) -> io::Result<()> {
    let file = fs::File::create(&path)?;
    write_starters(BufWriter::new(file), ranking, rules)?;
    info!(
        "saved {} starter scores to {}",
        ranking.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Load a cached opening ranking for `vocabulary` under `rules`
///
/// Returns `Ok(None)` when there is no cache, or when it was built for a
/// different vocabulary or different rules.
///
/// # Errors
///
/// Returns `StarterCacheError` if the file exists but cannot be read or parsed.
pub fn load_starters<'a, P: AsRef<Path>>(
    path: P,
    vocabulary: &'a Vocabulary,
    rules: FeedbackRules,
) -> Result<Option<Vec<ScoreEntry<'a>>>, StarterCacheError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let cache = parse_starters(&fs::read_to_string(path)?)?;
    if cache.rules != Some(rules) {
        warn!(
            "starter cache {} was not built for {} rules, ignoring it",
            path.display(),
            rules_tag(rules)
        );
        return Ok(None);
    }

    let ranking = match_vocabulary(&cache.rows, vocabulary);
    match &ranking {
        Some(entries) => info!(
            "loaded {} starter scores from {}",
            entries.len(),
            path.display()
        ),
        None => warn!(
            "starter cache {} does not match the vocabulary, ignoring it",
            path.display()
        ),
    }
    Ok(ranking)
}

/// Rebuild ranking entries, or `None` unless the rows cover the vocabulary exactly
fn match_vocabulary<'a>(
    rows: &[(String, f64)],
    vocabulary: &'a Vocabulary,
) -> Option<Vec<ScoreEntry<'a>>> {
    if rows.len() != vocabulary.len() {
        return None;
    }

    let bonus = if vocabulary.len() > 1 {
        1.0 / vocabulary.len() as f64
    } else {
        0.0
    };

    let mut seen = FxHashSet::default();
    let mut entries = Vec::with_capacity(rows.len());
    for (text, expected) in rows {
        let word = vocabulary.get(text)?;
        if !seen.insert(word.text()) {
            return None;
        }
        entries.push(ScoreEntry {
            word,
            expected_elimination: *expected,
            score: expected + bonus,
            is_candidate: true,
        });
    }

    rank(&mut entries);
    Some(entries)
}
