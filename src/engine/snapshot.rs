//! Read-only state captures handed to the presentation layer

use super::hints::Hint;
use super::round::{RoundMessage, RoundPhase};
use super::session::{GameMode, TeamId};
use crate::core::Difficulty;

/// Round state after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub clue: String,
    pub difficulty: Difficulty,
    pub letters: Vec<char>,
    pub selected: Vec<usize>,
    pub answer: String,
    pub hints_used: u32,
    pub hint: Option<Hint>,
    pub message: Option<RoundMessage>,
    pub phase: RoundPhase,
}

impl RoundSnapshot {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.phase.is_finished()
    }
}

/// One row of the score table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamScore {
    pub id: TeamId,
    pub name: String,
    pub score: u32,
}

/// Session state after an award or advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub level_index: usize,
    pub level_count: usize,
    pub team_index: usize,
    /// Scores in team rotation order
    pub scores: Vec<TeamScore>,
    pub player_score: u32,
}

/// Combined game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub round: RoundSnapshot,
    pub session: SessionSnapshot,
    pub complete: bool,
}
