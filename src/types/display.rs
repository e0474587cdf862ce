//! Masked rendering of the secret phrase

use serde::Serialize;

use crate::types::SecretPhrase;
use crate::PLACEHOLDER;

/// One cell per character of the phrase.
///
/// ASCII letters start masked. Spaces and any other character that can't be
/// guessed (digits, punctuation, accented letters) are visible from the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    cells: Vec<Option<char>>,
    #[serde(skip)]
    source: Vec<char>,
}

impl DisplayState {
    pub fn initialize(phrase: &SecretPhrase) -> Self {
        let source: Vec<char> = phrase.original().chars().collect();
        let cells = source
            .iter()
            .map(|&c| if c.is_ascii_alphabetic() { None } else { Some(c) })
            .collect();
        Self { cells, source }
    }

    /// Uncover every position holding `letter` (either case).
    ///
    /// Returns how many cells were newly uncovered; zero when the letter is
    /// absent or already shown.
    pub fn reveal_letter(&mut self, letter: char) -> usize {
        let letter = letter.to_ascii_lowercase();
        let mut revealed = 0;
        for (cell, &original) in self.cells.iter_mut().zip(&self.source) {
            if cell.is_none() && original.to_ascii_lowercase() == letter {
                *cell = Some(original);
                revealed += 1;
            }
        }
        revealed
    }

    /// Show the literal phrase
    pub fn reveal_all(&mut self) {
        for (cell, &original) in self.cells.iter_mut().zip(&self.source) {
            *cell = Some(original);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn masked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells joined by single spaces: "t h e   o _ _ i c e"
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(cell.unwrap_or(PLACEHOLDER));
        }
        out
    }
}

impl std::fmt::Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
