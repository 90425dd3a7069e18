//! Core domain types for the clue game
//!
//! Languages, difficulties and level content. Nothing here is random or mutable
//! game state; those live in [`crate::engine`].

mod language;
mod level;

pub use language::{ARABIC_ALPHABET, ENGLISH_ALPHABET, Language};
pub use level::{Difficulty, Level, LevelError, LevelSet};
