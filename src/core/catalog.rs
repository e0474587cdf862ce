//! Word Source: genres and their candidate titles
//!
//! Built once at startup and only ever borrowed. Either the built-in table
//! or a JSON file of `[{"name": ..., "titles": [...]}]`.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::GameError;

lazy_static! {
    // Spaces, hyphens and underscores all separate words in a genre key
    static ref RE_GENRE_SEPARATOR: Regex = Regex::new(r"[\s_-]+").unwrap();
}

/// "Science Fiction", "science-fiction" and " SCIENCE_fiction " share a key
pub fn genre_key(name: &str) -> String {
    RE_GENRE_SEPARATOR
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "Drama",
        &[
            "landman",
            "the rookie",
            "fallout",
            "breaking bad",
            "game of thrones",
            "yellowstone",
            "the wire",
            "the sopranos",
            "better call saul",
        ],
    ),
    (
        "Comedy",
        &[
            "smiling friends",
            "the office",
            "south park",
            "community",
            "friends",
            "curb your enthusiasm",
            "veep",
            "arrested development",
            "parks and recreation",
        ],
    ),
    (
        "Horror",
        &[
            "the last of us",
            "dahmer",
            "stranger things",
            "haunted",
            "american horror story",
            "the walking dead",
            "black mirror",
            "midnight mass",
        ],
    ),
    (
        "Science-Fiction",
        &[
            "the boys",
            "futurama",
            "the flash",
            "solar opposites",
            "rick and morty",
            "severance",
            "doctor who",
            "the mandalorian",
            "altered carbon",
        ],
    ),
    (
        "Reality-TV",
        &[
            "survivor",
            "the voice",
            "the bachelor",
            "fixer upper",
            "shark tank",
            "the apprentice",
            "outlast",
            "naked and afraid",
            "the amazing race",
        ],
    ),
    (
        "Mystery",
        &[
            "sherlock",
            "true detective",
            "elementary",
            "luther",
            "the sinner",
            "sharp objects",
            "the flight attendant",
            "deadwater fell",
        ],
    ),
];

/// A named list of titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    pub titles: Vec<String>,
}

/// Ordered, validated genre table
#[derive(Debug, Clone)]
pub struct Catalog {
    genres: Vec<Genre>,
}

impl Catalog {
    /// The table shipped with the game
    pub fn builtin() -> Self {
        let genres = BUILTIN
            .iter()
            .map(|(name, titles)| Genre {
                name: name.to_string(),
                titles: titles.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Self { genres }
    }

    /// Validate and wrap a genre list
    pub fn new(genres: Vec<Genre>) -> Result<Self, GameError> {
        if genres.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        for (i, genre) in genres.iter().enumerate() {
            if genre.titles.is_empty() {
                return Err(GameError::EmptyGenre {
                    name: genre.name.clone(),
                });
            }
            if genre.titles.iter().any(|t| t.trim().is_empty()) {
                return Err(GameError::BlankTitle {
                    genre: genre.name.clone(),
                });
            }
            let key = genre_key(&genre.name);
            if let Some(earlier) = genres[..i].iter().find(|g| genre_key(&g.name) == key) {
                return Err(GameError::DuplicateGenre {
                    first: earlier.name.clone(),
                    second: genre.name.clone(),
                });
            }
        }
        Ok(Self { genres })
    }

    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let genres: Vec<Genre> = serde_json::from_str(json)?;
        Self::new(genres)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GameError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Genre names in catalog order
    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(|g| g.name.as_str())
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Look a genre up by whatever the player typed
    pub fn find(&self, input: &str) -> Option<&Genre> {
        let key = genre_key(input);
        if key.is_empty() {
            return None;
        }
        self.genres.iter().find(|g| genre_key(&g.name) == key)
    }

    /// Candidate titles for a category, in catalog order
    pub fn get_candidates(&self, category: &str) -> Option<&[String]> {
        self.find(category).map(|g| g.titles.as_slice())
    }
}
