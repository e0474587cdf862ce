//! Error type shared by the library and the binary

use std::path::PathBuf;

/// Everything that can go wrong outside of normal play.
///
/// Bad guesses are never errors; they come back as a `Notice`.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no genres")]
    EmptyCatalog,

    #[error("genre '{name}' has no titles")]
    EmptyGenre { name: String },

    #[error("genre '{genre}' contains a blank title")]
    BlankTitle { genre: String },

    #[error("genres '{first}' and '{second}' collide after normalization")]
    DuplicateGenre { first: String, second: String },

    #[error("secret phrase must not be blank")]
    BlankPhrase,

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
