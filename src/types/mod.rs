//! Core types for Guess The Show

mod budget;
mod display;
mod guess;
mod mode;
mod notice;
mod outcome;
mod phrase;
mod report;

pub use budget::GuessBudget;
pub use display::DisplayState;
pub use guess::{Guess, GuessedLetters};
pub use mode::GameMode;
pub use notice::Notice;
pub use outcome::TurnOutcome;
pub use phrase::{normalize_phrase, SecretPhrase};
pub use report::{GameSummary, TurnReport};
