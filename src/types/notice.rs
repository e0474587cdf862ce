//! In-band result of processing one input event

use colored::Color;
use serde::{Deserialize, Serialize};

/// What the engine made of one event.
///
/// Nothing a player types is an error; every case lands here instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Letter present, `revealed` cells uncovered
    CorrectLetter { letter: char, revealed: usize },
    /// Letter absent, budget charged
    WrongLetter { letter: char, remaining: u32 },
    /// Letter tried before, nothing changed
    AlreadyGuessed { letter: char },
    /// Full phrase named by the guesser
    PhraseGuessed,
    /// Full phrase guess missed, budget charged
    WrongPhrase { remaining: u32 },
    /// Empty line or a single non-letter, nothing changed
    InvalidInput,
    /// Guess deadline elapsed, budget charged
    TimedOut { remaining: u32 },
    /// "steal" typed, waiting on the other player
    StealRequested,
    /// Other player named the phrase
    StealSucceeded,
    /// Other player missed, no penalty
    StealFailed,
    /// Other player ran out of time, no penalty
    StealTimedOut,
    /// Guesser's input ended, game forfeited
    InputClosed,
    /// Event arrived after the outcome was decided
    GameAlreadyOver,
}

impl Notice {
    /// Stable code string (for logging and JSON consumers)
    pub fn code(&self) -> &'static str {
        match self {
            Self::CorrectLetter { .. } => "CORRECT_LETTER",
            Self::WrongLetter { .. } => "WRONG_LETTER",
            Self::AlreadyGuessed { .. } => "ALREADY_GUESSED",
            Self::PhraseGuessed => "PHRASE_GUESSED",
            Self::WrongPhrase { .. } => "WRONG_PHRASE",
            Self::InvalidInput => "INVALID_INPUT",
            Self::TimedOut { .. } => "TIMED_OUT",
            Self::StealRequested => "STEAL_REQUESTED",
            Self::StealSucceeded => "STEAL_SUCCEEDED",
            Self::StealFailed => "STEAL_FAILED",
            Self::StealTimedOut => "STEAL_TIMED_OUT",
            Self::InputClosed => "INPUT_CLOSED",
            Self::GameAlreadyOver => "GAME_ALREADY_OVER",
        }
    }

    /// Line shown to the players
    pub fn message(&self) -> String {
        match self {
            Self::CorrectLetter { .. } => "Correct!".to_string(),
            Self::WrongLetter { remaining, .. } | Self::WrongPhrase { remaining } => {
                format!("Wrong! You have {} {} left.", remaining, guesses(*remaining))
            }
            Self::AlreadyGuessed { .. } => "You already guessed that letter.".to_string(),
            Self::PhraseGuessed => "You named it!".to_string(),
            Self::InvalidInput => "Please enter a letter or a full guess.".to_string(),
            Self::TimedOut { remaining } => {
                format!("Time's up! You have {} {} left.", remaining, guesses(*remaining))
            }
            Self::StealRequested => "Steal! Over to the other player.".to_string(),
            Self::StealSucceeded => "Steal succeeded!".to_string(),
            Self::StealFailed => "Incorrect steal! Back to original player.".to_string(),
            Self::StealTimedOut => "Steal timed out! Back to original player.".to_string(),
            Self::InputClosed => "Input closed, game forfeited.".to_string(),
            Self::GameAlreadyOver => "The game is already over.".to_string(),
        }
    }

    /// Did this event consume a guess from the budget?
    pub fn is_penalty(&self) -> bool {
        matches!(
            self,
            Self::WrongLetter { .. } | Self::WrongPhrase { .. } | Self::TimedOut { .. }
        )
    }

    /// Should the board be drawn again after this notice?
    pub fn redraws_display(&self) -> bool {
        !matches!(
            self,
            Self::TimedOut { .. }
                | Self::StealRequested
                | Self::StealSucceeded
                | Self::InputClosed
                | Self::GameAlreadyOver
        )
    }

    pub fn color(&self) -> Color {
        match self {
            Self::CorrectLetter { .. } | Self::PhraseGuessed => Color::Green,
            Self::WrongLetter { .. } | Self::WrongPhrase { .. } | Self::TimedOut { .. } => {
                Color::Red
            }
            Self::StealRequested | Self::StealSucceeded => Color::Cyan,
            _ => Color::Yellow,
        }
    }
}

fn guesses(n: u32) -> &'static str {
    if n == 1 {
        "guess"
    } else {
        "guesses"
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
