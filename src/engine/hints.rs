//! Progressive hints
//!
//! Hints disclose the solution a piece at a time: its length, then its first
//! letter, then its last letter.

use std::fmt;

/// A piece of disclosed solution information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// Number of letters in the solution
    Length(usize),
    /// First letter of the solution
    FirstLetter(char),
    /// Last letter of the solution
    LastLetter(char),
}

impl Hint {
    /// Hint for the given 1-based ordinal
    ///
    /// Returns `None` for ordinals outside `1..=3` or an empty solution.
    #[must_use]
    pub fn for_ordinal(solution: &str, ordinal: u32) -> Option<Self> {
        let word = solution.to_uppercase();
        match ordinal {
            1 => Some(Self::Length(word.chars().count())),
            2 => word.chars().next().map(Self::FirstLetter),
            3 => word.chars().next_back().map(Self::LastLetter),
            _ => None,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => write!(f, "The word has {len} letters"),
            Self::FirstLetter(ch) => write!(f, "The word starts with {ch}"),
            Self::LastLetter(ch) => write!(f, "The word ends with {ch}"),
        }
    }
}

/// English hint text for the given ordinal, or an empty string outside `1..=3`
///
/// # Examples
/// ```
/// use powerletter::engine::hint_text;
///
/// assert_eq!(hint_text("cat", 1), "The word has 3 letters");
/// assert_eq!(hint_text("cat", 4), "");
/// ```
#[must_use]
pub fn hint_text(solution: &str, ordinal: u32) -> String {
    Hint::for_ordinal(solution, ordinal)
        .map(|hint| hint.to_string())
        .unwrap_or_default()
}
