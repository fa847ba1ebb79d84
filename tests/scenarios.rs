//! End-to-end session scenarios through the public API

use wordle_eliminator::core::{Feedback, FeedbackRules, Vocabulary, Word};
use wordle_eliminator::solver::{
    GameStatus, RoundOutcome, Session, SessionConfig, filter_candidates, starter_ranking,
};
use wordle_eliminator::wordlists::WORDS;
use wordle_eliminator::wordlists::loader::words_from_slice;

fn vocab(texts: &[&str]) -> Vocabulary {
    Vocabulary::new(texts.iter().map(|t| Word::new(t).unwrap())).unwrap()
}

#[test]
fn crane_against_slate() {
    let vocab = vocab(&["crane", "slate", "plate"]);
    let crane = vocab.get("crane").unwrap();
    let slate = vocab.get("slate").unwrap();

    let feedback = Feedback::calculate(crane, slate, FeedbackRules::Classic);
    assert_eq!(feedback.to_string(), "BBGBG");

    let remaining = filter_candidates(
        crane,
        feedback,
        &vocab.all_candidates(),
        FeedbackRules::Classic,
    );
    let texts: Vec<&str> = remaining.iter().map(|w| w.text()).collect();
    assert_eq!(texts, ["SLATE", "PLATE"]);
}

#[test]
fn all_green_always_wins() {
    let vocab = vocab(&["crane", "slate", "plate"]);
    let mut session = Session::new(&vocab, SessionConfig::default());

    session.submit("crane", "BBGBG").unwrap();
    let report = session.submit("plate", "GGGGG").unwrap();

    assert_eq!(report.outcome, RoundOutcome::Solved { guesses: 2 });
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn contradictory_feedback_fails() {
    let vocab = vocab(&["crane", "slate", "plate"]);
    let mut session = Session::new(&vocab, SessionConfig::default());

    session.submit("crane", "BBGBG").unwrap();
    let report = session.submit("slate", "YBGBG").unwrap();

    assert_eq!(report.outcome, RoundOutcome::Contradiction);
    assert_eq!(report.candidates_after, 0);
    assert_eq!(session.status(), GameStatus::Failed);
    assert!(session.candidates().is_empty());
}

#[test]
fn answer_survives_its_own_feedback_over_bundled_words() {
    let vocab = Vocabulary::new(words_from_slice(WORDS, 5)).unwrap();
    let candidates = vocab.all_candidates();

    for guess in vocab.words().iter().step_by(97) {
        for answer in vocab.words().iter().step_by(31) {
            let feedback = Feedback::calculate(guess, answer, FeedbackRules::Classic);
            let remaining = filter_candidates(guess, feedback, &candidates, FeedbackRules::Classic);
            assert!(remaining.len() <= candidates.len());
            assert!(
                remaining.contains(&answer),
                "{answer} filtered out by {guess} -> {feedback}"
            );
        }
    }
}

#[test]
fn full_game_with_starters_narrows_to_answer() {
    let vocab = Vocabulary::new(words_from_slice(WORDS, 5)).unwrap();
    let config = SessionConfig::default();
    let starters = starter_ranking(&vocab, config.rules);
    let mut session = Session::new(&vocab, config).with_starters(starters);
    let answer = vocab.get("plate").unwrap();

    for _ in 0..20 {
        if session.status() != GameStatus::Active {
            break;
        }
        let guess = session.best_guess().unwrap();
        let before = session.candidates().len();
        let feedback = Feedback::calculate(guess, answer, config.rules);
        let report = session.record(guess, feedback).unwrap();
        assert!(report.candidates_after <= before);
        assert!(session.candidates().contains(&answer));
    }

    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn undo_then_replay_matches() {
    let vocab = vocab(&["crane", "slate", "plate", "irate", "grate"]);
    let mut session = Session::new(&vocab, SessionConfig::default());

    let first = session.submit("crane", "BGGBG").unwrap();
    assert!(session.undo());
    let second = session.submit("crane", "BGGBG").unwrap();

    assert_eq!(first.round, second.round);
    assert_eq!(first.candidates_after, 2);
    match (first.outcome, second.outcome) {
        (
            RoundOutcome::Ranked { ranking: a, .. },
            RoundOutcome::Ranked { ranking: b, .. },
        ) => assert_eq!(a, b),
        other => panic!("expected two rankings, got {other:?}"),
    }
}
