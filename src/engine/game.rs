//! Game orchestration
//!
//! `Game` owns the level set, the session and the live round, and funnels every
//! mutation through them: points from a correct check go to the session, and an
//! advance discards the round and loads the next level.

use super::hints::Hint;
use super::round::{CheckOutcome, Round};
use super::scoring::MAX_TEAMS;
use super::session::{GameMode, LevelAdvance, Session, Team, TeamId};
use super::snapshot::GameSnapshot;
use crate::core::{Language, LevelSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Reasons a game cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Competitive play needs at least two teams
    NotEnoughTeams(usize),
    /// More teams than the roster allows
    TooManyTeams(usize),
    /// A team name was empty after trimming
    BlankTeamName,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughTeams(count) => {
                write!(f, "competitive mode needs at least 2 teams, got {count}")
            }
            Self::TooManyTeams(count) => write!(
                f,
                "at most {} teams can play, got {count}",
                MAX_TEAMS
            ),
            Self::BlankTeamName => write!(f, "team names cannot be blank"),
        }
    }
}

impl std::error::Error for GameError {}

/// Result of an advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The round is not solved or revealed yet; nothing changed
    NotReady,
    /// A fresh round was loaded for the level at this index
    NextLevel(usize),
    /// The last level is done
    Complete,
}

/// A running game over one level set
#[derive(Debug, Clone)]
pub struct Game<R: Rng = StdRng> {
    levels: LevelSet,
    session: Session,
    round: Round,
    /// Team answering the live round, fixed when the round loads
    turn: Option<TeamId>,
    complete: bool,
    rng: R,
}

impl Game<StdRng> {
    /// Create a game whose letter pools are reproducible from `seed`
    ///
    /// # Errors
    /// See [`Game::new`].
    pub fn with_seed<I, S>(
        levels: LevelSet,
        mode: GameMode,
        teams: I,
        seed: u64,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(levels, mode, teams, StdRng::seed_from_u64(seed))
    }

    /// Create a game seeded from OS entropy
    ///
    /// # Errors
    /// See [`Game::new`].
    pub fn from_os_rng<I, S>(levels: LevelSet, mode: GameMode, teams: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(levels, mode, teams, StdRng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a game and load the first level
    ///
    /// Team names are ignored in single-player mode.
    ///
    /// # Errors
    /// Returns an error if a team name is blank, more than eight teams are given,
    /// or competitive mode has fewer than two teams.
    pub fn new<I, S>(levels: LevelSet, mode: GameMode, teams: I, mut rng: R) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut session = Session::new(mode, levels.len());

        if mode == GameMode::Competitive {
            let names: Vec<S> = teams.into_iter().collect();
            if names.len() > MAX_TEAMS {
                return Err(GameError::TooManyTeams(names.len()));
            }
            for name in &names {
                session
                    .add_team(name.as_ref())
                    .ok_or(GameError::BlankTeamName)?;
            }
            if !session.can_start() {
                return Err(GameError::NotEnoughTeams(names.len()));
            }
        }

        let round = Round::new(&levels[0], levels.language().alphabet(), &mut rng);
        let turn = session.current_team().map(Team::id);
        log::info!(
            "new {mode:?} game: {} {} levels, {} teams",
            levels.len(),
            levels.language().code(),
            session.teams().len()
        );

        Ok(Self {
            levels,
            session,
            round,
            turn,
            complete: false,
            rng,
        })
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    #[must_use]
    pub const fn levels(&self) -> &LevelSet {
        &self.levels
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.levels.language()
    }

    /// True once the last level was completed
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Team answering the live round
    #[must_use]
    pub fn turn(&self) -> Option<&Team> {
        let id = self.turn?;
        self.session.teams().iter().find(|team| team.id() == id)
    }

    pub fn select(&mut self, index: usize) -> bool {
        self.round.select(index)
    }

    pub fn select_letter(&mut self, letter: char) -> Option<usize> {
        self.round.select_letter(letter)
    }

    pub fn remove(&mut self, position: usize) -> bool {
        self.round.remove(position)
    }

    pub fn remove_last(&mut self) -> bool {
        self.round.remove_last()
    }

    pub fn clear(&mut self) {
        self.round.clear();
    }

    pub fn hint(&mut self) -> Option<Hint> {
        self.round.use_hint()
    }

    pub fn reveal(&mut self) -> bool {
        self.round.reveal()
    }

    /// Check the answer and credit any points earned
    ///
    /// In competitive mode the points go to the team whose turn it was when the
    /// round loaded; if that team was removed since, the points are dropped.
    pub fn check(&mut self) -> CheckOutcome {
        let outcome = self.round.check();
        if let CheckOutcome::Correct { points } = outcome {
            match self.turn {
                Some(id) => {
                    self.session.update_score(id, points);
                }
                None => {
                    self.session.award(points);
                }
            }
        }
        outcome
    }

    /// Add a team mid-game; see [`Session::add_team`]
    pub fn add_team(&mut self, name: &str) -> Option<TeamId> {
        self.session.add_team(name)
    }

    /// Remove a team mid-game; see [`Session::remove_team`]
    pub fn remove_team(&mut self, id: TeamId) -> bool {
        self.session.remove_team(id)
    }

    /// Move on once the round is finished
    ///
    /// Loads a fresh round for the next level, or marks the game complete after
    /// the last one.
    pub fn advance(&mut self) -> Advance {
        if self.complete {
            return Advance::Complete;
        }
        if !self.round.is_correct() {
            return Advance::NotReady;
        }

        match self.session.advance_level() {
            LevelAdvance::Next(index) => {
                self.load_round(index);
                Advance::NextLevel(index)
            }
            LevelAdvance::Complete => {
                self.complete = true;
                Advance::Complete
            }
        }
    }

    /// Start over from the first level with zeroed scores, keeping the teams
    pub fn reset(&mut self) {
        self.session.reset();
        self.complete = false;
        self.load_round(0);
    }

    /// Capture round and session state
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            round: self.round.snapshot(),
            session: self.session.snapshot(),
            complete: self.complete,
        }
    }

    fn load_round(&mut self, index: usize) {
        let alphabet = self.levels.language().alphabet();
        self.round = Round::new(&self.levels[index], alphabet, &mut self.rng);
        self.turn = self.session.current_team().map(Team::id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, Level};

    fn levels() -> LevelSet {
        LevelSet::new(
            Language::English,
            vec![
                Level::new("Shines by day", "sun", Difficulty::Easy).unwrap(),
                Level::new("A red fruit", "apple", Difficulty::Medium).unwrap(),
                Level::new("Purrs", "cat", Difficulty::Hard).unwrap(),
            ],
        )
        .unwrap()
    }

    fn single() -> Game {
        Game::with_seed(levels(), GameMode::Single, [""; 0], 42).unwrap()
    }

    fn competitive(names: &[&str]) -> Game {
        Game::with_seed(levels(), GameMode::Competitive, names, 42).unwrap()
    }

    fn answer_correctly<R: Rng>(game: &mut Game<R>) -> CheckOutcome {
        let solution = game.round().level().solution().to_string();
        for index in game.round().spell(&solution).unwrap() {
            game.select(index);
        }
        game.check()
    }

    #[test]
    fn competitive_needs_two_teams() {
        let err = Game::with_seed(levels(), GameMode::Competitive, ["Solo"], 1).unwrap_err();
        assert_eq!(err, GameError::NotEnoughTeams(1));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn rejects_too_many_or_blank_teams() {
        let names: Vec<String> = (0..9).map(|i| format!("T{i}")).collect();
        assert_eq!(
            Game::with_seed(levels(), GameMode::Competitive, &names, 1).unwrap_err(),
            GameError::TooManyTeams(9)
        );
        assert_eq!(
            Game::with_seed(levels(), GameMode::Competitive, ["A", " "], 1).unwrap_err(),
            GameError::BlankTeamName
        );
    }

    #[test]
    fn single_player_sun_scores_ten() {
        let mut game = single();
        assert_eq!(answer_correctly(&mut game), CheckOutcome::Correct { points: 10 });
        assert_eq!(game.session().player_score(), 10);
    }

    #[test]
    fn double_check_does_not_double_score() {
        let mut game = competitive(&["A", "B"]);
        answer_correctly(&mut game);
        assert_eq!(game.check(), CheckOutcome::AlreadyFinished);
        let id = game.session().teams()[0].id();
        assert_eq!(game.session().score(id), Some(10));
    }

    #[test]
    fn advance_requires_finished_round() {
        let mut game = single();
        assert_eq!(game.advance(), Advance::NotReady);
        assert_eq!(game.session().current_level(), 0);
    }

    #[test]
    fn three_team_medium_level_with_two_hints() {
        let mut game = competitive(&["A", "B", "C"]);
        game.reveal();
        assert_eq!(game.advance(), Advance::NextLevel(1));
        assert_eq!(game.session().current_team_index(), 1);

        game.hint();
        game.hint();
        assert_eq!(answer_correctly(&mut game), CheckOutcome::Correct { points: 16 });

        let teams = game.session().teams();
        assert_eq!(game.session().score(teams[1].id()), Some(16));
        assert_eq!(game.session().score(teams[0].id()), Some(0));

        assert_eq!(game.advance(), Advance::NextLevel(2));
        assert_eq!(game.session().current_team_index(), 2);
    }

    #[test]
    fn reveal_forfeits_points() {
        let mut game = single();
        assert!(game.reveal());
        assert!(game.round().is_correct());
        assert_eq!(game.session().player_score(), 0);
    }

    #[test]
    fn points_for_removed_team_are_dropped() {
        let mut game = competitive(&["A", "B", "C"]);
        let answering = game.turn().map(Team::id).unwrap();
        assert!(game.remove_team(answering));
        answer_correctly(&mut game);

        let snapshot = game.snapshot();
        assert!(snapshot.session.scores.iter().all(|row| row.score == 0));
    }

    #[test]
    fn completes_after_last_level() {
        let mut game = single();
        for expected in [Advance::NextLevel(1), Advance::NextLevel(2), Advance::Complete] {
            answer_correctly(&mut game);
            assert_eq!(game.advance(), expected);
        }
        assert!(game.is_complete());
        assert_eq!(game.session().current_level(), 2);
        assert_eq!(game.advance(), Advance::Complete);
        assert!(game.snapshot().complete);
    }

    #[test]
    fn new_round_resets_round_state() {
        let mut game = single();
        game.hint();
        answer_correctly(&mut game);
        game.advance();

        let round = game.round();
        assert_eq!(round.level().solution(), "APPLE");
        assert_eq!(round.letters().len(), 14);
        assert_eq!(round.hints_used(), 0);
        assert!(round.selected().is_empty());
        assert!(!round.is_correct());
    }

    #[test]
    fn reset_restarts_from_first_level() {
        let mut game = competitive(&["A", "B"]);
        answer_correctly(&mut game);
        game.advance();
        game.reset();

        assert!(!game.is_complete());
        assert_eq!(game.session().current_level(), 0);
        assert_eq!(game.round().level().solution(), "SUN");
        assert_eq!(game.session().teams().len(), 2);
        assert!(game.snapshot().session.scores.iter().all(|row| row.score == 0));
    }

    #[test]
    fn same_seed_same_pools() {
        let a = single();
        let b = single();
        assert_eq!(a.round().letters(), b.round().letters());
    }
}
