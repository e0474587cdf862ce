//! Guess The Show: hangman over TV show titles
//!
//! Catalog → SecretPhrase → TurnEngine ← session driver ← timed line source

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use error::GameError;

// =============================================================================
// GUESS BUDGETS
// =============================================================================

/// Incorrect guesses allowed in simple (untimed) mode
pub const SIMPLE_MAX_INCORRECT: u32 = 3;

/// Incorrect guesses allowed in timed mode
pub const TIMED_MAX_INCORRECT: u32 = 6;

// =============================================================================
// TIMING
// =============================================================================

/// Per-guess deadline in timed mode (seconds)
pub const TIMED_GUESS_TIMEOUT_SECS: u64 = 45;

// =============================================================================
// COMMAND GRAMMAR
// =============================================================================

/// Token that hands one full-phrase guess to the other player
pub const STEAL_COMMAND: &str = "steal";

/// Shown for every letter not yet revealed
pub const PLACEHOLDER: char = '_';

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
