//! Word lists and cached rankings
//!
//! Provides the embedded vocabulary, plain-text loading, and the starter-score cache.

mod embedded;
pub mod loader;
pub mod starters;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_five_lowercase_letters() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn scenario_words_are_bundled() {
        for word in ["crane", "slate", "plate"] {
            assert!(WORDS.contains(&word), "{word} missing");
        }
    }

    #[test]
    fn bundled_list_is_full_size() {
        assert!(WORDS_COUNT >= 3000, "only {WORDS_COUNT} words bundled");
        for word in ["adieu", "tares", "salet", "roate", "cigar", "humph", "rebut", "sissy"] {
            assert!(WORDS.contains(&word), "{word} missing");
        }
    }
}
