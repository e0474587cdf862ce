//! The secret phrase and its comparison form

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::GameError;

lazy_static! {
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Lowercase (ASCII) and collapse every whitespace run to one space.
///
/// Used for both the phrase and full-phrase guesses, so "The  Office"
/// and "the office" compare equal.
pub fn normalize_phrase(text: &str) -> String {
    RE_WHITESPACE
        .replace_all(text.trim(), " ")
        .to_ascii_lowercase()
}

/// Title chosen for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretPhrase {
    original: String,
    #[serde(skip)]
    normalized: String,
}

impl SecretPhrase {
    /// Build from a catalog entry. Surrounding whitespace is dropped.
    pub fn new(text: impl AsRef<str>) -> Result<Self, GameError> {
        let original = text.as_ref().trim();
        if original.is_empty() {
            return Err(GameError::BlankPhrase);
        }
        Ok(Self {
            original: original.to_string(),
            normalized: normalize_phrase(original),
        })
    }

    /// Case-preserved text, as disclosed at the end of a game
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercase, whitespace-collapsed form
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Does a full-phrase guess name this phrase?
    pub fn matches(&self, guess: &str) -> bool {
        normalize_phrase(guess) == self.normalized
    }

    /// Does the phrase contain this (lowercase) letter anywhere?
    pub fn contains_letter(&self, letter: char) -> bool {
        self.original
            .chars()
            .any(|c| c.to_ascii_lowercase() == letter)
    }
}

impl std::fmt::Display for SecretPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}
