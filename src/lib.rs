//! PowerLetter
//!
//! A bilingual (English/Arabic) clue-driven word puzzle: read a clue, spell the
//! answer from a shuffled pool of letters, and score points alone or in teams.
//!
//! # Quick Start
//!
//! ```rust
//! use powerletter::core::Language;
//! use powerletter::engine::{CheckOutcome, Game, GameMode};
//! use powerletter::levels::builtin;
//!
//! let levels = builtin(Language::English).unwrap();
//! let mut game = Game::with_seed(levels, GameMode::Single, Vec::<String>::new(), 7).unwrap();
//!
//! // Spell the solution from the pool
//! let solution = game.round().level().solution().to_string();
//! for letter in solution.chars() {
//!     game.select_letter(letter).unwrap();
//! }
//!
//! assert!(matches!(game.check(), CheckOutcome::Correct { .. }));
//! println!("Score: {}", game.session().player_score());
//! ```

// Core domain types
pub mod core;

// Rounds, scoring and session progress
pub mod engine;

// Built-in level sets and level files
pub mod levels;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
