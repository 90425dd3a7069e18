//! Round state machine
//!
//! A `Round` is one attempt at a single level: the letter pool, the player's
//! selections, hints and correctness. Every action is applied atomically and
//! rejected actions leave the state untouched.

use super::hints::Hint;
use super::pool::{can_form_word, generate_letters};
use super::scoring::{MAX_HINTS, calculate_score};
use super::snapshot::RoundSnapshot;
use crate::core::Level;
use rand::Rng;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// Accepting selections and checks
    InProgress,
    /// Answered correctly through a check; points were awarded
    Solved,
    /// Solution shown on request; points were forfeited
    Revealed,
}

impl RoundPhase {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Outcome message of the latest check or reveal
///
/// Language-agnostic; the presentation layer picks the display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundMessage {
    Correct { points: u32 },
    Incorrect,
    Revealed,
}

/// Result of checking the current answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The answer matched; `points` should be credited
    Correct { points: u32 },
    /// The answer did not match; keep trying
    Incorrect,
    /// The round was already solved or revealed; nothing changes
    AlreadyFinished,
}

/// Mutable state of one level attempt
#[derive(Debug, Clone)]
pub struct Round {
    level: Level,
    letters: Vec<char>,
    selected: Vec<usize>,
    answer: String,
    hints_used: u32,
    hint: Option<Hint>,
    message: Option<RoundMessage>,
    phase: RoundPhase,
}

impl Round {
    /// Load a level, generating its letter pool
    ///
    /// # Panics
    /// Panics if the level has an empty solution.
    pub fn new<R: Rng + ?Sized>(level: &Level, alphabet: &[char], rng: &mut R) -> Self {
        assert!(
            !level.solution().is_empty(),
            "a round needs a level with a solution"
        );
        let letters = generate_letters(level.solution(), level.difficulty(), alphabet, rng);
        Self::with_letters(level, letters)
    }

    /// Load a level with a fixed letter pool
    ///
    /// # Panics
    /// Panics if the solution cannot be spelled from `letters`.
    #[must_use]
    pub fn with_letters(level: &Level, letters: Vec<char>) -> Self {
        assert!(
            can_form_word(level.solution(), &letters),
            "letter pool must contain every solution letter"
        );
        log::debug!(
            "round loaded: {} letters for a {} level",
            letters.len(),
            level.difficulty()
        );

        Self {
            level: level.clone(),
            letters,
            selected: Vec::new(),
            answer: String::new(),
            hints_used: 0,
            hint: None,
            message: None,
            phase: RoundPhase::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> &Level {
        &self.level
    }

    /// The shuffled letter pool
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Selected pool indices in selection order
    #[inline]
    #[must_use]
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Selected letters joined in selection order
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Most recently disclosed hint
    #[inline]
    #[must_use]
    pub const fn hint(&self) -> Option<Hint> {
        self.hint
    }

    #[inline]
    #[must_use]
    pub const fn message(&self) -> Option<RoundMessage> {
        self.message
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// True once the round was solved or revealed
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.phase.is_finished()
    }

    #[must_use]
    pub fn can_use_hint(&self) -> bool {
        self.hints_used < MAX_HINTS
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Select the pool letter at `index`
    ///
    /// Returns `false` (and changes nothing) if the index is out of range, already
    /// selected, or the round is finished. There is no cap at the solution length.
    pub fn select(&mut self, index: usize) -> bool {
        if self.phase.is_finished() || index >= self.letters.len() || self.is_selected(index) {
            return false;
        }

        self.selected.push(index);
        self.answer.push(self.letters[index]);
        log::debug!("select {index}: answer now {}", self.answer);
        true
    }

    /// Select the first unselected pool slot holding `letter` (case-insensitive)
    ///
    /// Returns the chosen pool index.
    pub fn select_letter(&mut self, letter: char) -> Option<usize> {
        let wanted: Vec<char> = letter.to_uppercase().collect();
        let index = (0..self.letters.len())
            .find(|&i| !self.is_selected(i) && wanted == [self.letters[i]])?;
        self.select(index).then_some(index)
    }

    /// Remove the selection at ordinal `position` (not by letter value)
    ///
    /// Returns `false` if `position` is out of range.
    pub fn remove(&mut self, position: usize) -> bool {
        if position >= self.selected.len() {
            return false;
        }

        let index = self.selected.remove(position);
        self.refresh_answer();
        log::debug!("remove position {position} (pool index {index})");
        true
    }

    /// Remove the most recent selection
    pub fn remove_last(&mut self) -> bool {
        match self.selected.len() {
            0 => false,
            len => self.remove(len - 1),
        }
    }

    /// Empty the selection
    pub fn clear(&mut self) {
        self.selected.clear();
        self.answer.clear();
        log::debug!("selection cleared");
    }

    /// Disclose the next hint
    ///
    /// Returns `None` once the hint budget is spent.
    pub fn use_hint(&mut self) -> Option<Hint> {
        if !self.can_use_hint() {
            return None;
        }

        self.hints_used += 1;
        self.hint = Hint::for_ordinal(self.level.solution(), self.hints_used);
        log::debug!("hint {} of {MAX_HINTS} used", self.hints_used);
        self.hint
    }

    /// Compare the current answer to the solution (case-insensitive)
    ///
    /// A correct answer finishes the round and reports the points earned. Checking a
    /// finished round is a no-op, so points are never reported twice.
    pub fn check(&mut self) -> CheckOutcome {
        if self.phase.is_finished() {
            return CheckOutcome::AlreadyFinished;
        }

        if self.answer.to_uppercase() == self.level.solution() {
            let points = calculate_score(self.level.difficulty(), self.hints_used);
            self.phase = RoundPhase::Solved;
            self.message = Some(RoundMessage::Correct { points });
            log::debug!("check: correct for {points} points");
            CheckOutcome::Correct { points }
        } else {
            self.message = Some(RoundMessage::Incorrect);
            log::debug!("check: {} is incorrect", self.answer);
            CheckOutcome::Incorrect
        }
    }

    /// Show the solution without awarding points
    ///
    /// The selection is replaced by pool letters spelling the solution. Returns
    /// `false` if the round is already finished.
    pub fn reveal(&mut self) -> bool {
        if self.phase.is_finished() {
            return false;
        }

        // The pool always holds the solution letters, so spelling cannot fail
        if let Some(indices) = self.spell(self.level.solution()) {
            self.selected = indices;
        }
        self.refresh_answer();
        self.phase = RoundPhase::Revealed;
        self.message = Some(RoundMessage::Revealed);
        log::debug!("solution revealed");
        true
    }

    /// Pool indices spelling `word`, each letter taken from the first free slot
    ///
    /// Ignores the current selection. Returns `None` if the pool lacks a letter.
    #[must_use]
    pub fn spell(&self, word: &str) -> Option<Vec<usize>> {
        let mut used = vec![false; self.letters.len()];
        word.to_uppercase()
            .chars()
            .map(|letter| {
                let index = (0..self.letters.len()).find(|&i| !used[i] && self.letters[i] == letter)?;
                used[index] = true;
                Some(index)
            })
            .collect()
    }

    /// Capture the presentation-facing state
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            clue: self.level.clue().to_string(),
            difficulty: self.level.difficulty(),
            letters: self.letters.clone(),
            selected: self.selected.clone(),
            answer: self.answer.clone(),
            hints_used: self.hints_used,
            hint: self.hint,
            message: self.message,
            phase: self.phase,
        }
    }

    fn refresh_answer(&mut self) {
        self.answer = self.selected.iter().map(|&i| self.letters[i]).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, ENGLISH_ALPHABET};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn level(solution: &str, difficulty: Difficulty) -> Level {
        Level::new("clue", solution, difficulty).unwrap()
    }

    fn fixed_round() -> Round {
        // S U N plus filler, with a duplicate N
        Round::with_letters(
            &level("sun", Difficulty::Easy),
            vec!['N', 'X', 'S', 'N', 'U', 'A', 'B', 'C', 'D', 'E'],
        )
    }

    fn select_word(round: &mut Round, word: &str) {
        for index in round.spell(word).unwrap() {
            assert!(round.select(index));
        }
    }

    #[test]
    fn new_round_starts_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let round = Round::new(&level("sun", Difficulty::Easy), ENGLISH_ALPHABET, &mut rng);

        assert_eq!(round.letters().len(), 10);
        assert!(round.selected().is_empty());
        assert_eq!(round.answer(), "");
        assert_eq!(round.hints_used(), 0);
        assert_eq!(round.phase(), RoundPhase::InProgress);
        assert!(!round.is_correct());
        assert!(round.message().is_none());
    }

    #[test]
    #[should_panic(expected = "letter pool must contain")]
    fn with_letters_rejects_incomplete_pool() {
        let _ = Round::with_letters(&level("sun", Difficulty::Easy), vec!['S', 'U']);
    }

    #[test]
    fn select_appends_in_order() {
        let mut round = fixed_round();
        assert!(round.select(2));
        assert!(round.select(4));
        assert!(round.select(0));
        assert_eq!(round.selected(), &[2, 4, 0]);
        assert_eq!(round.answer(), "SUN");
    }

    #[test]
    fn select_twice_is_noop() {
        let mut round = fixed_round();
        assert!(round.select(2));
        assert!(!round.select(2));
        assert_eq!(round.selected(), &[2]);
        assert_eq!(round.answer(), "S");
    }

    #[test]
    fn select_out_of_range_is_noop() {
        let mut round = fixed_round();
        assert!(!round.select(10));
        assert!(round.selected().is_empty());
    }

    #[test]
    fn select_beyond_solution_length_allowed() {
        let mut round = fixed_round();
        for index in 0..10 {
            assert!(round.select(index));
        }
        assert_eq!(round.answer().chars().count(), 10);
        assert_eq!(round.check(), CheckOutcome::Incorrect);
    }

    #[test]
    fn select_letter_uses_first_free_slot() {
        let mut round = fixed_round();
        assert_eq!(round.select_letter('n'), Some(0));
        assert_eq!(round.select_letter('N'), Some(3));
        assert_eq!(round.select_letter('N'), None);
        assert_eq!(round.select_letter('Z'), None);
        assert_eq!(round.answer(), "NN");
    }

    #[test]
    fn remove_by_position_with_duplicates() {
        let mut round = fixed_round();
        // N U N
        round.select(0);
        round.select(4);
        round.select(3);
        assert_eq!(round.answer(), "NUN");

        // Removing the first N keeps the second one selected
        assert!(round.remove(0));
        assert_eq!(round.selected(), &[4, 3]);
        assert_eq!(round.answer(), "UN");
        assert!(!round.remove(5));
        assert_eq!(round.answer(), "UN");
    }

    #[test]
    fn removing_last_position_repeatedly_equals_clear() {
        let mut round = fixed_round();
        for index in [5, 1, 7, 2, 9] {
            round.select(index);
        }
        while !round.selected().is_empty() {
            let last = round.selected().len() - 1;
            assert!(round.remove(last));
        }
        assert_eq!(round.answer(), "");

        let mut cleared = fixed_round();
        for index in [5, 1, 7, 2, 9] {
            cleared.select(index);
        }
        cleared.clear();
        assert_eq!(cleared.answer(), round.answer());
        assert_eq!(cleared.selected(), round.selected());
    }

    #[test]
    fn remove_last_on_empty_is_noop() {
        let mut round = fixed_round();
        assert!(!round.remove_last());
        round.select(1);
        assert!(round.remove_last());
        assert!(round.selected().is_empty());
    }

    #[test]
    fn hints_progress_and_cap() {
        let mut round = fixed_round();
        assert_eq!(round.use_hint(), Some(Hint::Length(3)));
        assert_eq!(round.use_hint(), Some(Hint::FirstLetter('S')));
        assert_eq!(round.use_hint(), Some(Hint::LastLetter('N')));
        assert!(!round.can_use_hint());
        assert_eq!(round.use_hint(), None);
        assert_eq!(round.hints_used(), 3);
        assert_eq!(round.hint(), Some(Hint::LastLetter('N')));
    }

    #[test]
    fn correct_check_scores_and_finishes() {
        let mut round = fixed_round();
        select_word(&mut round, "SUN");
        assert_eq!(round.check(), CheckOutcome::Correct { points: 10 });
        assert_eq!(round.phase(), RoundPhase::Solved);
        assert_eq!(round.message(), Some(RoundMessage::Correct { points: 10 }));
        assert!(round.is_correct());
    }

    #[test]
    fn check_applies_hint_penalty() {
        let mut round = Round::with_letters(
            &level("apple", Difficulty::Medium),
            "PXAELPQRSTUVWY".chars().collect(),
        );
        round.use_hint();
        round.use_hint();
        select_word(&mut round, "apple");
        assert_eq!(round.check(), CheckOutcome::Correct { points: 16 });
    }

    #[test]
    fn check_twice_does_not_score_twice() {
        let mut round = fixed_round();
        select_word(&mut round, "SUN");
        assert_eq!(round.check(), CheckOutcome::Correct { points: 10 });
        assert_eq!(round.check(), CheckOutcome::AlreadyFinished);
    }

    #[test]
    fn incorrect_check_keeps_playing() {
        let mut round = fixed_round();
        select_word(&mut round, "NUS");
        assert_eq!(round.check(), CheckOutcome::Incorrect);
        assert_eq!(round.message(), Some(RoundMessage::Incorrect));
        assert_eq!(round.phase(), RoundPhase::InProgress);

        // Player keeps adjusting after a miss
        round.clear();
        select_word(&mut round, "SUN");
        assert_eq!(round.check(), CheckOutcome::Correct { points: 10 });
    }

    #[test]
    fn selection_blocked_after_solve() {
        let mut round = fixed_round();
        select_word(&mut round, "SUN");
        round.check();
        assert!(!round.select(1));
        assert_eq!(round.answer(), "SUN");
    }

    #[test]
    fn reveal_shows_solution_without_points() {
        let mut round = fixed_round();
        round.select(1);
        assert!(round.reveal());
        assert_eq!(round.answer(), "SUN");
        assert_eq!(round.selected().len(), 3);
        assert_eq!(round.phase(), RoundPhase::Revealed);
        assert_eq!(round.message(), Some(RoundMessage::Revealed));
        assert_eq!(round.check(), CheckOutcome::AlreadyFinished);
        assert!(!round.reveal());
    }

    #[test]
    fn spell_picks_distinct_slots() {
        let round = fixed_round();
        assert_eq!(round.spell("nn"), Some(vec![0, 3]));
        assert_eq!(round.spell("nnn"), None);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut round = fixed_round();
        round.select(2);
        round.use_hint();
        let snapshot = round.snapshot();
        assert_eq!(snapshot.letters, round.letters());
        assert_eq!(snapshot.selected, vec![2]);
        assert_eq!(snapshot.answer, "S");
        assert_eq!(snapshot.hints_used, 1);
        assert_eq!(snapshot.hint, Some(Hint::Length(3)));
        assert!(!snapshot.is_correct());
    }
}
