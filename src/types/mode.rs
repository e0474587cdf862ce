//! Simple vs timed play

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{SIMPLE_MAX_INCORRECT, TIMED_GUESS_TIMEOUT_SECS, TIMED_MAX_INCORRECT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// 3 incorrect guesses, no deadline
    #[default]
    Simple,
    /// 6 incorrect guesses, 45 seconds per guess
    Timed,
}

impl GameMode {
    pub fn max_incorrect(&self) -> u32 {
        match self {
            GameMode::Simple => SIMPLE_MAX_INCORRECT,
            GameMode::Timed => TIMED_MAX_INCORRECT,
        }
    }

    pub fn guess_timeout(&self) -> Option<Duration> {
        match self {
            GameMode::Simple => None,
            GameMode::Timed => Some(Duration::from_secs(TIMED_GUESS_TIMEOUT_SECS)),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Simple => write!(f, "Simple"),
            GameMode::Timed => write!(f, "Timed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults() {
        assert_eq!(GameMode::Simple.max_incorrect(), 3);
        assert_eq!(GameMode::Simple.guess_timeout(), None);
        assert_eq!(GameMode::Timed.max_incorrect(), 6);
        assert_eq!(GameMode::Timed.guess_timeout(), Some(Duration::from_secs(45)));
    }
}
