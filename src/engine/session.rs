//! Session progress tracking
//!
//! Owns everything that outlives a single round: the team roster, the score
//! table, the current level index and whose turn it is.

use super::scoring::{MAX_TEAMS, MIN_COMPETITIVE_TEAMS};
use super::snapshot::{SessionSnapshot, TeamScore};
use rustc_hash::FxHashMap;
use std::fmt;

/// How the session is played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// One player, progressive difficulty, no turns
    #[default]
    Single,
    /// Teams take turns answering and accumulate scores
    Competitive,
}

/// Opaque, unique team identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(u64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team#{}", self.0)
    }
}

/// A named competitive participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
}

impl Team {
    #[inline]
    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Result of trying to move to the next level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAdvance {
    /// Moved to the level at this index
    Next(usize),
    /// The last level was already current; the index is unchanged
    Complete,
}

/// Cross-level game progress
#[derive(Debug, Clone)]
pub struct Session {
    mode: GameMode,
    teams: Vec<Team>,
    scores: FxHashMap<TeamId, u32>,
    next_team_id: u64,
    player_score: u32,
    level_count: usize,
    current_level: usize,
    current_team: usize,
}

impl Session {
    /// Create a session over `level_count` levels
    ///
    /// # Panics
    /// Panics if `level_count` is zero.
    #[must_use]
    pub fn new(mode: GameMode, level_count: usize) -> Self {
        assert!(level_count > 0, "a session needs at least one level");

        Self {
            mode,
            teams: Vec::new(),
            scores: FxHashMap::default(),
            next_team_id: 1,
            player_score: 0,
            level_count,
            current_level: 0,
            current_team: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        log::info!("game mode set to {mode:?}");
    }

    #[inline]
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[inline]
    #[must_use]
    pub const fn level_count(&self) -> usize {
        self.level_count
    }

    /// Index of the level being played
    #[inline]
    #[must_use]
    pub const fn current_level(&self) -> usize {
        self.current_level
    }

    /// Index of the team whose turn it is
    #[inline]
    #[must_use]
    pub const fn current_team_index(&self) -> usize {
        self.current_team
    }

    /// Team whose turn it is (competitive mode with at least one team)
    #[must_use]
    pub fn current_team(&self) -> Option<&Team> {
        match self.mode {
            GameMode::Competitive => self.teams.get(self.current_team),
            GameMode::Single => None,
        }
    }

    #[must_use]
    pub fn is_last_level(&self) -> bool {
        self.current_level + 1 >= self.level_count
    }

    /// Whether play may begin: competitive mode needs at least two teams
    #[must_use]
    pub fn can_start(&self) -> bool {
        match self.mode {
            GameMode::Single => true,
            GameMode::Competitive => self.teams.len() >= MIN_COMPETITIVE_TEAMS,
        }
    }

    /// Whether another team may be added
    #[must_use]
    pub fn can_add_team(&self) -> bool {
        self.teams.len() < MAX_TEAMS
    }

    /// Add a team with a zeroed score
    ///
    /// The name is trimmed. Returns `None` (nothing added) when the roster is full
    /// or the name is blank.
    pub fn add_team(&mut self, name: &str) -> Option<TeamId> {
        let name = name.trim();
        if name.is_empty() || !self.can_add_team() {
            return None;
        }

        let id = TeamId(self.next_team_id);
        self.next_team_id += 1;
        self.teams.push(Team {
            id,
            name: name.to_string(),
        });
        self.scores.insert(id, 0);
        log::info!("added {id} ({name}), {} teams", self.teams.len());
        Some(id)
    }

    /// Remove a team and its score
    ///
    /// The turn keeps pointing at the same logical team when a team before it is
    /// removed; removing the active team hands the turn to the next one.
    pub fn remove_team(&mut self, id: TeamId) -> bool {
        let Some(index) = self.teams.iter().position(|team| team.id == id) else {
            return false;
        };

        self.teams.remove(index);
        self.scores.remove(&id);

        if index < self.current_team {
            self.current_team -= 1;
        }
        if self.current_team >= self.teams.len() {
            self.current_team = 0;
        }
        log::info!("removed {id}, {} teams left", self.teams.len());
        true
    }

    /// Score of a team, if it exists
    #[must_use]
    pub fn score(&self, id: TeamId) -> Option<u32> {
        self.scores.get(&id).copied()
    }

    /// Running total for single-player mode
    #[inline]
    #[must_use]
    pub const fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Add points to a team
    ///
    /// Unknown teams (e.g. removed mid-round) are ignored and `false` is returned.
    pub fn update_score(&mut self, id: TeamId, points: u32) -> bool {
        match self.scores.get_mut(&id) {
            Some(score) => {
                *score = score.saturating_add(points);
                log::info!("{id} +{points} = {score}");
                true
            }
            None => {
                log::warn!("dropping {points} points for unknown {id}");
                false
            }
        }
    }

    /// Credit points for a correct answer
    ///
    /// Competitive mode credits the active team and returns its id; single-player
    /// mode adds to the player total and returns `None`.
    pub fn award(&mut self, points: u32) -> Option<TeamId> {
        match self.mode {
            GameMode::Competitive => {
                let id = self.teams.get(self.current_team)?.id;
                self.update_score(id, points).then_some(id)
            }
            GameMode::Single => {
                self.player_score = self.player_score.saturating_add(points);
                log::info!("player +{points} = {}", self.player_score);
                None
            }
        }
    }

    /// Pass the turn to the next team (competitive mode only)
    pub fn advance_turn(&mut self) {
        if self.mode == GameMode::Competitive && !self.teams.is_empty() {
            self.current_team = (self.current_team + 1) % self.teams.len();
        }
    }

    /// Move to the next level, rotating the turn in competitive mode
    ///
    /// At the last level the index stays put and `LevelAdvance::Complete` is returned.
    pub fn advance_level(&mut self) -> LevelAdvance {
        if self.is_last_level() {
            log::info!("all {} levels complete", self.level_count);
            return LevelAdvance::Complete;
        }

        self.current_level += 1;
        self.advance_turn();
        log::info!(
            "advanced to level {} of {}",
            self.current_level + 1,
            self.level_count
        );
        LevelAdvance::Next(self.current_level)
    }

    /// Restart from the first level with zeroed scores; teams are kept
    pub fn reset(&mut self) {
        self.current_level = 0;
        self.current_team = 0;
        self.player_score = 0;
        for score in self.scores.values_mut() {
            *score = 0;
        }
        log::info!("session reset");
    }

    /// Capture the presentation-facing state
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            level_index: self.current_level,
            level_count: self.level_count,
            team_index: self.current_team,
            scores: self
                .teams
                .iter()
                .map(|team| TeamScore {
                    id: team.id,
                    name: team.name.clone(),
                    score: self.scores.get(&team.id).copied().unwrap_or(0),
                })
                .collect(),
            player_score: self.player_score,
        }
    }
}
