//! Integration tests for the Turn Engine
//!
//! Whole games driven event by event through the public API

use guesstheshow::core::{Catalog, TurnEngine};
use guesstheshow::types::{Notice, SecretPhrase, TurnOutcome};
use guesstheshow::{SIMPLE_MAX_INCORRECT, TIMED_MAX_INCORRECT};
use pretty_assertions::assert_eq;

fn engine(text: &str, max: u32) -> TurnEngine {
    TurnEngine::new(SecretPhrase::new(text).unwrap(), max)
}

/// Letters then the full title, board rendered after each step
#[test]
fn test_the_office_progression() {
    let mut e = engine("the office", SIMPLE_MAX_INCORRECT);
    assert_eq!(e.display().render(), "_ _ _   _ _ _ _ _ _");

    let expected = [
        ("t", "t _ _   _ _ _ _ _ _"),
        ("h", "t h _   _ _ _ _ _ _"),
        ("e", "t h e   _ _ _ _ _ e"),
        ("o", "t h e   o _ _ _ _ e"),
    ];
    for (guess, board) in expected {
        let notice = e.submit_guess(guess);
        assert!(matches!(notice, Notice::CorrectLetter { .. }));
        assert_eq!(e.display().render(), board);
    }

    assert_eq!(e.submit_guess("the office"), Notice::PhraseGuessed);
    assert!(e.display().is_complete());
    assert_eq!(e.display().render(), "t h e   o f f i c e");
    assert_eq!(e.outcome(), Some(TurnOutcome::GuesserWins));
    assert_eq!(e.budget().used(), 0);
}

/// Three misses on "dahmer" with a budget of three
#[test]
fn test_dahmer_loss() {
    let mut e = engine("dahmer", 3);
    assert_eq!(e.submit_guess("z"), Notice::WrongLetter { letter: 'z', remaining: 2 });
    assert_eq!(e.submit_guess("q"), Notice::WrongLetter { letter: 'q', remaining: 1 });
    assert_eq!(e.submit_guess("x"), Notice::WrongLetter { letter: 'x', remaining: 0 });
    assert_eq!(e.outcome(), Some(TurnOutcome::Loss));
    assert_eq!(e.phrase().original(), "dahmer");
}

/// Any number of wrong letters equal to the budget loses, for every mode
#[test]
fn test_budget_of_wrong_letters_always_loses() {
    for max in [1, SIMPLE_MAX_INCORRECT, TIMED_MAX_INCORRECT] {
        let mut e = engine("Sherlock", max);
        for letter in "zqxjvwybfgm".chars().take(max as usize) {
            e.submit_guess(&letter.to_string());
        }
        assert_eq!(e.outcome(), Some(TurnOutcome::Loss), "max = {}", max);
        assert_eq!(e.phrase().to_string(), "Sherlock");
    }
}

/// A correct full guess always completes the board, for every built-in title
#[test]
fn test_full_guess_wins_every_builtin_title() {
    let catalog = Catalog::builtin();
    for genre in catalog.genres() {
        for title in &genre.titles {
            let mut e = engine(title, SIMPLE_MAX_INCORRECT);
            let shouted = format!("  {}  ", title.to_uppercase().replace(' ', "   "));
            e.submit_guess(&shouted);
            assert!(e.display().is_complete(), "{}", title);
            assert_eq!(e.outcome(), Some(TurnOutcome::GuesserWins), "{}", title);
        }
    }
}

/// Repeating a letter never costs anything
#[test]
fn test_duplicates_never_charge() {
    let mut e = engine("better call saul", 3);
    e.submit_guess("b");
    e.submit_guess("z");
    let used = e.budget().used();

    for _ in 0..25 {
        e.submit_guess("b");
        e.submit_guess("Z");
        e.submit_guess(" z ");
    }
    assert_eq!(e.budget().used(), used);
    assert!(!e.is_over());
}

/// Steal at the guesser's last remaining guess still wins for the stealer
#[test]
fn test_steal_success_at_max_minus_one() {
    let mut e = engine("Severance", TIMED_MAX_INCORRECT);
    for letter in ["z", "q", "x", "j", "k"] {
        e.submit_guess(letter);
    }
    assert_eq!(e.budget().remaining(), 1);

    assert_eq!(e.submit_guess("steal"), Notice::StealRequested);
    assert_eq!(e.submit_steal(Some("severance")), Notice::StealSucceeded);
    assert_eq!(e.outcome(), Some(TurnOutcome::StealerWins));
    assert!(e.display().is_complete());
}

/// Failed and timed-out steals leave the budget alone
#[test]
fn test_steal_misses_are_free() {
    let mut e = engine("the boys", 3);
    e.submit_guess("x");

    for attempt in [Some("the flash"), None, Some("b"), Some("   "), None] {
        e.submit_guess("steal");
        e.submit_steal(attempt);
        assert_eq!(e.budget().used(), 1);
        assert!(!e.is_over());
    }

    // Guesser carries on where they left off
    assert!(matches!(e.submit_guess("b"), Notice::CorrectLetter { .. }));
}

/// Timeouts count like wrong guesses
#[test]
fn test_timeouts_exhaust_budget() {
    let mut e = engine("futurama", TIMED_MAX_INCORRECT);
    for expected_remaining in (0..TIMED_MAX_INCORRECT).rev() {
        assert_eq!(
            e.submit_timeout(),
            Notice::TimedOut {
                remaining: expected_remaining
            }
        );
    }
    assert_eq!(e.outcome(), Some(TurnOutcome::Loss));
}

/// Mixed penalties share one budget
#[test]
fn test_mixed_penalties() {
    let mut e = engine("veep", 3);
    e.submit_guess("z");
    e.submit_timeout();
    assert!(!e.is_over());
    e.submit_guess("vape");
    assert_eq!(e.outcome(), Some(TurnOutcome::Loss));
}
