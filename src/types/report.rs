//! Per-event and end-of-game records for terminal and JSON display

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{Notice, TurnOutcome};

/// Snapshot of the game after one event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReport {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// What happened
    pub notice: Notice,
    /// Rendered board
    pub display: String,
    /// Incorrect guesses so far
    pub incorrect: u32,
    /// Incorrect guesses allowed
    pub max_incorrect: u32,
    /// Letters tried, alphabetical
    pub guessed: Vec<char>,
    /// Set once the game is decided
    pub outcome: Option<TurnOutcome>,
}

impl TurnReport {
    pub fn remaining(&self) -> u32 {
        self.max_incorrect.saturating_sub(self.incorrect)
    }

    /// Notice line with color
    pub fn to_terminal_string(&self) -> String {
        self.notice.message().as_str().color(self.notice.color()).to_string()
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let guessed: String = self.guessed.iter().collect();
        format!(
            "notice={} | display={} | incorrect={}/{} | guessed={}",
            self.notice.code(),
            self.display,
            self.incorrect,
            self.max_incorrect,
            guessed
        )
    }
}

/// Final record of one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub outcome: TurnOutcome,
    /// The phrase, disclosed verbatim
    pub phrase: String,
    pub genre: Option<String>,
    pub incorrect: u32,
    pub max_incorrect: u32,
    /// Events processed, steals included
    pub events: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl GameSummary {
    pub fn announcement(&self) -> String {
        self.outcome.announcement(&self.phrase)
    }

    /// Banner with emoji and color
    pub fn to_terminal_string(&self) -> String {
        format!("{} {}", self.outcome.emoji(), self.announcement())
            .as_str()
            .color(self.outcome.color())
            .bold()
            .to_string()
    }

    pub fn duration_secs(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}
