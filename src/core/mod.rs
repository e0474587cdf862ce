//! Core modules for Guess The Show

pub mod catalog;
pub mod engine;
pub mod input;
pub mod rng;
pub mod session;

pub use catalog::{genre_key, Catalog, Genre};
pub use engine::TurnEngine;
pub use input::{InputEvent, LineSource, ReaderLines, ScriptStep, ScriptedLines};
pub use rng::SimpleRng;
pub use session::{play, SessionOptions, GUESS_PROMPT, STEAL_PROMPT};
