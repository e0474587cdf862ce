//! Terminal result of one game

use colored::Color;
use serde::{Deserialize, Serialize};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnOutcome {
    /// The original guesser uncovered the phrase
    GuesserWins,
    /// The other player named the phrase during a steal
    StealerWins,
    /// Budget exhausted, or the guesser's input closed
    Loss,
}

impl TurnOutcome {
    /// Terminal color for the final banner
    pub fn color(&self) -> Color {
        match self {
            TurnOutcome::GuesserWins => Color::Green,
            TurnOutcome::StealerWins => Color::Cyan,
            TurnOutcome::Loss => Color::Red,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            TurnOutcome::GuesserWins => "🏆",
            TurnOutcome::StealerWins => "🥷",
            TurnOutcome::Loss => "💀",
        }
    }

    /// Closing line shown to the players
    pub fn announcement(&self, phrase: &str) -> String {
        match self {
            TurnOutcome::GuesserWins => {
                format!("Congratulations! You guessed the word! It was: {}", phrase)
            }
            TurnOutcome::StealerWins => format!("Other player wins! The word was: {}", phrase),
            TurnOutcome::Loss => format!("You lose! The word was: {}", phrase),
        }
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnOutcome::GuesserWins => "GUESSER_WINS",
            TurnOutcome::StealerWins => "STEALER_WINS",
            TurnOutcome::Loss => "LOSS",
        };
        write!(f, "{}", name)
    }
}
