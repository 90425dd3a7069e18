//! Clue levels and level sets
//!
//! A `Level` is one clue/solution/difficulty unit of content. A `LevelSet` is the
//! ordered, non-empty sequence of levels played in one language.

use super::Language;
use std::fmt;
use std::ops::Index;

/// Level difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Create difficulty from name string
    ///
    /// Supported names: "easy", "medium", "hard".
    /// Defaults to easy if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Easy,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error type for invalid level content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    EmptySolution,
    NonLetter(char),
    ForeignLetter { letter: char, language: Language },
    EmptyLevelSet,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySolution => write!(f, "Solution must not be empty"),
            Self::NonLetter(ch) => write!(f, "Solution contains non-letter character {ch:?}"),
            Self::ForeignLetter { letter, language } => {
                write!(
                    f,
                    "Letter {letter:?} is not part of the {} alphabet",
                    language.code()
                )
            }
            Self::EmptyLevelSet => write!(f, "Level set must contain at least one level"),
        }
    }
}

impl std::error::Error for LevelError {}

/// One clue-driven word puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    clue: String,
    solution: String,
    difficulty: Difficulty,
}

impl Level {
    /// Create a new level
    ///
    /// The solution is stored uppercase-normalized.
    ///
    /// # Errors
    /// Returns `LevelError` if the solution is empty or contains anything other
    /// than letters (digits, spaces and punctuation are rejected).
    ///
    /// # Examples
    /// ```
    /// use powerletter::core::{Difficulty, Level};
    ///
    /// let level = Level::new("It shines in the sky", "sun", Difficulty::Easy).unwrap();
    /// assert_eq!(level.solution(), "SUN");
    ///
    /// assert!(Level::new("Not a word", "r2d2", Difficulty::Hard).is_err());
    /// ```
    pub fn new(
        clue: impl Into<String>,
        solution: &str,
        difficulty: Difficulty,
    ) -> Result<Self, LevelError> {
        let solution = solution.trim();
        if solution.is_empty() {
            return Err(LevelError::EmptySolution);
        }

        if let Some(bad) = solution.chars().find(|c| !c.is_alphabetic()) {
            return Err(LevelError::NonLetter(bad));
        }

        Ok(Self {
            clue: clue.into(),
            solution: solution.to_uppercase(),
            difficulty,
        })
    }

    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Uppercase solution
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Solution length in characters (not bytes)
    #[must_use]
    pub fn solution_len(&self) -> usize {
        self.solution.chars().count()
    }
}

/// Ordered, non-empty sequence of levels for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSet {
    language: Language,
    levels: Vec<Level>,
}

impl LevelSet {
    /// Create a level set
    ///
    /// # Errors
    /// Returns `LevelError::EmptyLevelSet` if `levels` is empty, or
    /// `LevelError::ForeignLetter` if a solution uses letters outside the
    /// language alphabet.
    pub fn new(language: Language, levels: Vec<Level>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::EmptyLevelSet);
        }

        for level in &levels {
            if let Some(letter) = level
                .solution()
                .chars()
                .find(|&c| !language.contains_letter(c))
            {
                return Err(LevelError::ForeignLetter { letter, language });
            }
        }

        Ok(Self { language, levels })
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Number of levels (always at least 1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; kept for API symmetry with slices
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Level> {
        self.levels.iter()
    }
}

impl Index<usize> for LevelSet {
    type Output = Level;

    fn index(&self, index: usize) -> &Self::Output {
        &self.levels[index]
    }
}

impl<'a> IntoIterator for &'a LevelSet {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}
