//! Level content
//!
//! Built-in English and Arabic level sets, plus loading from level files.

mod embedded;
pub mod loader;

pub use embedded::{ARABIC_LEVELS, ARABIC_LEVELS_COUNT, ENGLISH_LEVELS, ENGLISH_LEVELS_COUNT};
pub use loader::{LoadError, builtin, levels_from_slice, load_from_file, parse_levels};
