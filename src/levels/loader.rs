//! Level loading utilities
//!
//! Level files hold one level per line as `difficulty|solution|clue`. Blank lines
//! and lines starting with `#` are skipped; unknown difficulty names read as easy.

use super::embedded::{ARABIC_LEVELS, ENGLISH_LEVELS};
use crate::core::{Difficulty, Language, Level, LevelError, LevelSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for level file loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// A line lacks the `difficulty|solution|clue` fields (1-based line number)
    Malformed { line: usize },
    /// A line parsed but its level is invalid
    Level { line: usize, source: LevelError },
    /// The file produced no levels
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Could not read level file: {e}"),
            Self::Malformed { line } => {
                write!(f, "Line {line}: expected difficulty|solution|clue")
            }
            Self::Level { line, source } => write!(f, "Line {line}: {source}"),
            Self::Empty => write!(f, "Level file contains no levels"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Level { source, .. } => Some(source),
            Self::Malformed { .. } | Self::Empty => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load a level set from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read, a line is malformed or invalid
/// for `language`, or no levels remain.
///
/// # Examples
/// ```no_run
/// use powerletter::core::Language;
/// use powerletter::levels::load_from_file;
///
/// let levels = load_from_file("my_levels.txt", Language::English).unwrap();
/// println!("Loaded {} levels", levels.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, language: Language) -> Result<LevelSet, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_levels(&content, language)
}

/// Parse level file content
///
/// # Errors
///
/// See [`load_from_file`].
///
/// # Examples
/// ```
/// use powerletter::core::{Difficulty, Language};
/// use powerletter::levels::parse_levels;
///
/// let levels = parse_levels("# mine\nmedium|river|Water flows in it\n", Language::English).unwrap();
/// assert_eq!(levels[0].solution(), "RIVER");
/// assert_eq!(levels[0].difficulty(), Difficulty::Medium);
/// ```
pub fn parse_levels(content: &str, language: Language) -> Result<LevelSet, LoadError> {
    let mut levels = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.splitn(3, '|').map(str::trim);
        let (Some(difficulty), Some(solution), Some(clue)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(LoadError::Malformed { line });
        };

        let level = level_for(language, difficulty, solution, clue)
            .map_err(|source| LoadError::Level { line, source })?;
        levels.push(level);
    }

    if levels.is_empty() {
        return Err(LoadError::Empty);
    }
    LevelSet::new(language, levels).map_err(|source| LoadError::Level { line: 0, source })
}

/// Convert embedded `(difficulty, solution, clue)` records into a level set
///
/// # Errors
///
/// Returns the first invalid record's error, or `LevelError::EmptyLevelSet`.
pub fn levels_from_slice(
    records: &[(&str, &str, &str)],
    language: Language,
) -> Result<LevelSet, LevelError> {
    let levels = records
        .iter()
        .map(|&(difficulty, solution, clue)| level_for(language, difficulty, solution, clue))
        .collect::<Result<Vec<_>, _>>()?;
    LevelSet::new(language, levels)
}

/// Built-in level set for a language
///
/// # Errors
///
/// Only fails if the embedded data is invalid, which the test suite rules out.
pub fn builtin(language: Language) -> Result<LevelSet, LevelError> {
    let records = match language {
        Language::English => ENGLISH_LEVELS,
        Language::Arabic => ARABIC_LEVELS,
    };
    levels_from_slice(records, language)
}

fn level_for(
    language: Language,
    difficulty: &str,
    solution: &str,
    clue: &str,
) -> Result<Level, LevelError> {
    let level = Level::new(clue, solution, Difficulty::from_name(difficulty))?;
    if let Some(letter) = level
        .solution()
        .chars()
        .find(|&c| !language.contains_letter(c))
    {
        return Err(LevelError::ForeignLetter { letter, language });
    }
    Ok(level)
}
