//! Guess grammar and the set of letters already tried

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::normalize_phrase;
use crate::STEAL_COMMAND;

/// One line of player input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// Hand one full-phrase attempt to the other player
    Steal,
    /// Single ASCII letter, lowercased
    Letter(char),
    /// Anything longer than one character, whitespace-collapsed
    Phrase(String),
    /// Single character that is not an ASCII letter
    NotALetter(char),
    /// Nothing but whitespace
    Empty,
}

impl Guess {
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim().to_lowercase();
        if token == STEAL_COMMAND {
            return Guess::Steal;
        }

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Guess::Empty,
            (Some(c), None) if c.is_ascii_alphabetic() => Guess::Letter(c),
            (Some(c), None) => Guess::NotALetter(c),
            _ => Guess::Phrase(normalize_phrase(&token)),
        }
    }
}

/// Letters attempted so far. Only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuessedLetters {
    letters: BTreeSet<char>,
}

impl GuessedLetters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter. Returns `false` if it was already there.
    pub fn insert(&mut self, letter: char) -> bool {
        self.letters.insert(letter.to_ascii_lowercase())
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Alphabetical
    pub fn to_vec(&self) -> Vec<char> {
        self.letters.iter().copied().collect()
    }
}
