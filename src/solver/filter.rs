//! Candidate filtering
//!
//! Narrows a candidate set using one guess and the feedback it received.

use crate::core::{Feedback, FeedbackRules, Mark, Word};

/// Keep only the candidates consistent with `feedback` for `guess`
///
/// Returns a new set; the input is left untouched.
///
/// Under [`FeedbackRules::Classic`] positions are applied left to right, each
/// against the set already narrowed by the positions before it:
/// - Black on a letter used once in the guess drops every candidate containing it.
///   Black on a repeated guess letter drops nothing.
/// - Green drops candidates with a different letter at that position.
/// - Yellow drops candidates lacking the letter, and those with it at that position.
///
/// Under [`FeedbackRules::Standard`] a candidate survives exactly when it would
/// have produced the same feedback.
///
/// # Examples
/// ```
/// use wordle_eliminator::core::{Feedback, FeedbackRules, Word};
/// use wordle_eliminator::solver::filter_candidates;
///
/// let words: Vec<Word> = ["crane", "slate", "plate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// let feedback = Feedback::parse("BBGBG", 5).unwrap();
/// let remaining = filter_candidates(&words[0], feedback, &candidates, FeedbackRules::Classic);
/// assert_eq!(remaining, vec![&words[1], &words[2]]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    guess: &Word,
    feedback: Feedback,
    candidates: &[&'a Word],
    rules: FeedbackRules,
) -> Vec<&'a Word> {
    debug_assert_eq!(guess.len(), feedback.len(), "feedback does not fit guess");

    match rules {
        FeedbackRules::Classic => classic_filter(guess, feedback, candidates),
        FeedbackRules::Standard => candidates
            .iter()
            .copied()
            .filter(|candidate| Feedback::calculate(guess, candidate, rules) == feedback)
            .collect(),
    }
}

fn classic_filter<'a>(guess: &Word, feedback: Feedback, candidates: &[&'a Word]) -> Vec<&'a Word> {
    let mut remaining = candidates.to_vec();

    for (i, mark) in feedback.marks().enumerate() {
        let letter = guess.letter_at(i);
        match mark {
            Mark::Black if guess.count_of(letter) == 1 => {
                remaining.retain(|c| !c.has_letter(letter));
            }
            Mark::Black => {}
            Mark::Green => remaining.retain(|c| c.letter_at(i) == letter),
            Mark::Yellow => {
                remaining.retain(|c| c.has_letter(letter) && c.letter_at(i) != letter);
            }
        }
    }

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn texts<'a>(set: &[&'a Word]) -> Vec<&'a str> {
        set.iter().map(|w| w.text()).collect()
    }

    fn run(guess: &str, feedback: &str, pool: &[Word], rules: FeedbackRules) -> Vec<String> {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::parse(feedback, guess.len()).unwrap();
        let candidates: Vec<&Word> = pool.iter().collect();
        filter_candidates(&guess, feedback, &candidates, rules)
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    #[test]
    fn crane_bbgbg_keeps_slate_and_plate() {
        let pool = words(&["crane", "slate", "plate"]);
        for rules in [FeedbackRules::Classic, FeedbackRules::Standard] {
            assert_eq!(run("crane", "BBGBG", &pool, rules), ["SLATE", "PLATE"]);
        }
    }

    #[test]
    fn green_requires_letter_in_place() {
        let pool = words(&["crane", "brine", "slate"]);
        assert_eq!(
            run("crane", "BGBBB", &pool, FeedbackRules::Classic),
            Vec::<String>::new()
        );
        assert_eq!(run("brute", "GGBBG", &pool, FeedbackRules::Classic), ["BRINE"]);
    }

    #[test]
    fn yellow_requires_letter_elsewhere() {
        let pool = words(&["alert", "later", "table", "crane"]);
        let kept = run("azure", "YBBYY", &pool, FeedbackRules::Classic);
        assert_eq!(kept, ["LATER"]);
    }

    #[test]
    fn black_on_repeated_guess_letter_removes_nothing() {
        // SPEED has two E's: Black on the first E is ignored under classic rules
        let pool = words(&["tribe", "bribe", "mould"]);
        let kept = run("speed", "BBBYB", &pool, FeedbackRules::Classic);
        assert_eq!(kept, ["TRIBE", "BRIBE"]);
    }

    #[test]
    fn standard_rules_respect_multiplicity() {
        // Only candidates that reproduce SPEED -> BBYBY exactly survive
        let pool = words(&["abide", "eerie", "tribe"]);
        let kept = run("speed", "BBYBY", &pool, FeedbackRules::Standard);
        assert_eq!(kept, ["ABIDE"]);
    }

    #[test]
    fn never_grows_and_keeps_the_answer() {
        let pool = words(&[
            "crane", "slate", "plate", "speed", "abide", "robot", "floor", "llama", "aloft",
            "eerie", "geese", "trace",
        ]);
        let candidates: Vec<&Word> = pool.iter().collect();

        for rules in [FeedbackRules::Classic, FeedbackRules::Standard] {
            for guess in &pool {
                for answer in &pool {
                    let feedback = Feedback::calculate(guess, answer, rules);
                    let kept = filter_candidates(guess, feedback, &candidates, rules);
                    assert!(kept.len() <= candidates.len());
                    assert!(
                        kept.contains(&answer),
                        "{answer} lost after {guess} -> {feedback} ({rules:?}); kept {:?}",
                        texts(&kept)
                    );
                }
            }
        }
    }

    #[test]
    fn input_set_is_untouched() {
        let pool = words(&["crane", "slate"]);
        let candidates: Vec<&Word> = pool.iter().collect();
        let feedback = Feedback::parse("BBBBB", 5).unwrap();
        let kept = filter_candidates(&pool[0], feedback, &candidates, FeedbackRules::Classic);
        assert!(kept.is_empty());
        assert_eq!(candidates.len(), 2);
    }
}
