//! Turn Engine: state machine for one game
//!
//! Transitions:
//! - AwaitingGuess → letter / phrase / steal / empty → AwaitingGuess
//! - phrase matched, last letter revealed, or steal matched → GameOver(win)
//! - budget exhausted or guesser input closed → GameOver(loss)
//!
//! Wrong letters, wrong phrases and timeouts cost one guess. Duplicates,
//! empty input and everything on the steal branch are free.

use chrono::Utc;
use tracing::debug;

use crate::types::{
    DisplayState, Guess, GuessBudget, GuessedLetters, Notice, SecretPhrase, TurnOutcome,
    TurnReport,
};

/// Hangman state machine engine
#[derive(Debug)]
pub struct TurnEngine {
    /// Phrase being guessed
    phrase: SecretPhrase,
    /// Board as the players see it
    display: DisplayState,
    /// Letters tried so far
    guessed: GuessedLetters,
    /// Incorrect attempts
    budget: GuessBudget,
    /// Set exactly once
    outcome: Option<TurnOutcome>,
    /// A steal is open and waiting for the other player
    steal_pending: bool,
    /// Number of processed events
    event_count: u64,
}

impl TurnEngine {
    /// Create new engine
    pub fn new(phrase: SecretPhrase, max_incorrect: u32) -> Self {
        let display = DisplayState::initialize(&phrase);
        let mut engine = Self {
            phrase,
            display,
            guessed: GuessedLetters::new(),
            budget: GuessBudget::new(max_incorrect),
            outcome: None,
            steal_pending: false,
            event_count: 0,
        };
        // A title with nothing to guess ("9-1-1") is won on arrival
        engine.settle();
        engine
    }

    /// Process one line typed by the original guesser
    pub fn submit_guess(&mut self, raw: &str) -> Notice {
        if self.outcome.is_some() {
            return Notice::GameAlreadyOver;
        }
        self.event_count += 1;

        let guess = Guess::parse(raw);
        debug!(?guess, "guess received");

        let notice = match guess {
            Guess::Steal => {
                self.steal_pending = true;
                Notice::StealRequested
            }
            Guess::Letter(letter) => self.guess_letter(letter),
            Guess::Phrase(text) => {
                if self.phrase.matches(&text) {
                    self.display.reveal_all();
                    Notice::PhraseGuessed
                } else {
                    self.budget.charge();
                    Notice::WrongPhrase {
                        remaining: self.budget.remaining(),
                    }
                }
            }
            Guess::NotALetter(_) | Guess::Empty => Notice::InvalidInput,
        };

        self.settle();
        notice
    }

    fn guess_letter(&mut self, letter: char) -> Notice {
        if !self.guessed.insert(letter) {
            return Notice::AlreadyGuessed { letter };
        }

        if self.phrase.contains_letter(letter) {
            let revealed = self.display.reveal_letter(letter);
            Notice::CorrectLetter { letter, revealed }
        } else {
            self.budget.charge();
            Notice::WrongLetter {
                letter,
                remaining: self.budget.remaining(),
            }
        }
    }

    /// The guesser's deadline elapsed with no line
    pub fn submit_timeout(&mut self) -> Notice {
        if self.outcome.is_some() {
            return Notice::GameAlreadyOver;
        }
        self.event_count += 1;
        self.budget.charge();
        debug!(used = self.budget.used(), "guess timed out");

        self.settle();
        Notice::TimedOut {
            remaining: self.budget.remaining(),
        }
    }

    /// Resolve an open steal. `None` means the other player timed out.
    ///
    /// Never touches the budget.
    pub fn submit_steal(&mut self, raw: Option<&str>) -> Notice {
        if self.outcome.is_some() {
            return Notice::GameAlreadyOver;
        }
        self.event_count += 1;
        self.steal_pending = false;

        let notice = match raw {
            None => Notice::StealTimedOut,
            Some(text) if self.phrase.matches(text) => {
                self.display.reveal_all();
                self.outcome = Some(TurnOutcome::StealerWins);
                Notice::StealSucceeded
            }
            Some(_) => Notice::StealFailed,
        };
        debug!(code = notice.code(), "steal resolved");

        self.settle();
        notice
    }

    /// The guesser's input ended; the game is lost as it stands
    pub fn forfeit(&mut self) -> Notice {
        if self.outcome.is_some() {
            return Notice::GameAlreadyOver;
        }
        self.event_count += 1;
        self.steal_pending = false;
        self.outcome = Some(TurnOutcome::Loss);
        debug!("guesser forfeited");
        Notice::InputClosed
    }

    /// Decide the outcome if the board or the budget says so
    fn settle(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if self.display.is_complete() {
            self.outcome = Some(TurnOutcome::GuesserWins);
        } else if self.budget.is_exhausted() {
            self.outcome = Some(TurnOutcome::Loss);
        }
    }

    pub fn outcome(&self) -> Option<TurnOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn steal_pending(&self) -> bool {
        self.steal_pending
    }

    pub fn phrase(&self) -> &SecretPhrase {
        &self.phrase
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    pub fn budget(&self) -> GuessBudget {
        self.budget
    }

    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    /// Snapshot after an event
    pub fn report(&self, notice: Notice) -> TurnReport {
        TurnReport {
            timestamp: Utc::now(),
            notice,
            display: self.display.render(),
            incorrect: self.budget.used(),
            max_incorrect: self.budget.max(),
            guessed: self.guessed.to_vec(),
            outcome: self.outcome,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
