//! Scoring rules and fixed game constants

use crate::core::Difficulty;

/// Maximum number of teams in a competitive session
pub const MAX_TEAMS: usize = 8;

/// Minimum number of teams required to start competitive play
pub const MIN_COMPETITIVE_TEAMS: usize = 2;

/// Maximum number of hints per round
pub const MAX_HINTS: u32 = 3;

/// Points subtracted per hint used
pub const HINT_PENALTY: u32 = 2;

/// Lowest score a correct answer can earn
pub const MIN_SCORE: u32 = 1;

/// Target letter pool size for a difficulty
#[must_use]
pub const fn pool_size(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 14,
        Difficulty::Hard => 20,
    }
}

/// Points for a correct answer before hint penalties
#[must_use]
pub const fn base_score(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 20,
        Difficulty::Hard => 30,
    }
}

/// Calculate the points earned for a correct answer
///
/// Each hint costs [`HINT_PENALTY`] points; the result never drops below [`MIN_SCORE`].
///
/// # Examples
/// ```
/// use powerletter::core::Difficulty;
/// use powerletter::engine::calculate_score;
///
/// assert_eq!(calculate_score(Difficulty::Easy, 0), 10);
/// assert_eq!(calculate_score(Difficulty::Hard, 3), 24);
/// assert_eq!(calculate_score(Difficulty::Medium, 10), 1);
/// ```
#[must_use]
pub const fn calculate_score(difficulty: Difficulty, hints_used: u32) -> u32 {
    let penalty = hints_used.saturating_mul(HINT_PENALTY);
    let score = base_score(difficulty).saturating_sub(penalty);
    if score < MIN_SCORE { MIN_SCORE } else { score }
}
