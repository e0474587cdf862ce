//! Game configuration.
//!
//! Mode defaults (budget, per-guess deadline) with optional overrides from
//! the command line. The catalog itself is loaded separately and borrowed.

use std::path::PathBuf;
use std::time::Duration;

use crate::types::GameMode;
use crate::GameError;

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub mode: GameMode,
    pub max_incorrect: u32,
    pub guess_timeout: Option<Duration>,
    /// Skip the genre menu
    pub genre: Option<String>,
    /// JSON catalog instead of the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Fixed seed for phrase selection
    pub seed: Option<u64>,
    pub color: bool,
    pub json: bool,
    pub verbose: bool,
}

impl GameConfig {
    /// Mode defaults, everything else off
    pub fn for_mode(mode: GameMode) -> Self {
        Self {
            mode,
            max_incorrect: mode.max_incorrect(),
            guess_timeout: mode.guess_timeout(),
            genre: None,
            catalog_path: None,
            seed: None,
            color: true,
            json: false,
            verbose: false,
        }
    }

    /// Replace the budget when an override was given
    pub fn with_max_incorrect(mut self, max: Option<u32>) -> Self {
        if let Some(max) = max {
            self.max_incorrect = max;
        }
        self
    }

    /// Replace the deadline when an override was given.
    ///
    /// Also applies in simple mode, which otherwise has none.
    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        if let Some(secs) = secs {
            self.guess_timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_incorrect == 0 {
            return Err(GameError::InvalidConfig {
                reason: "max incorrect guesses must be at least 1".to_string(),
            });
        }
        if self.guess_timeout.is_some_and(|t| t.is_zero()) {
            return Err(GameError::InvalidConfig {
                reason: "guess timeout must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_mode(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_defaults() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.mode, GameMode::Simple);
        assert_eq!(cfg.max_incorrect, 3);
        assert_eq!(cfg.guess_timeout, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_timed_defaults() {
        let cfg = GameConfig::for_mode(GameMode::Timed);
        assert_eq!(cfg.max_incorrect, 6);
        assert_eq!(cfg.guess_timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_overrides() {
        let cfg = GameConfig::for_mode(GameMode::Simple)
            .with_max_incorrect(Some(5))
            .with_timeout_secs(Some(10));
        assert_eq!(cfg.max_incorrect, 5);
        assert_eq!(cfg.guess_timeout, Some(Duration::from_secs(10)));

        let untouched = GameConfig::for_mode(GameMode::Timed)
            .with_max_incorrect(None)
            .with_timeout_secs(None);
        assert_eq!(untouched.max_incorrect, 6);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let cfg = GameConfig::default().with_max_incorrect(Some(0));
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig { .. })));

        let cfg = GameConfig::default().with_timeout_secs(Some(0));
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig { .. })));
    }
}
