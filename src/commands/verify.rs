//! Level set self-check
//!
//! Plays every level of a set through the engine under many seeds in parallel
//! and reports any level whose pool, hints or scoring misbehave.

use crate::core::LevelSet;
use crate::engine::{
    Advance, CheckOutcome, Game, GameMode, Hint, MAX_HINTS, calculate_score, can_form_word,
    pool_size,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// One detected problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyFailure {
    pub seed: u64,
    /// 1-based level number
    pub level: usize,
    pub problem: String,
}

/// Aggregate outcome of a verification run
#[derive(Debug)]
pub struct VerifyReport {
    pub levels: usize,
    pub seeds: u64,
    pub rounds_played: usize,
    pub failures: Vec<VerifyFailure>,
    pub duration: Duration,
}

impl VerifyReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Play the whole level set once per seed in `0..seeds`
///
/// Seed `s` uses `s % 4` hints on every level so each penalty step is exercised.
#[must_use]
pub fn run_verify(levels: &LevelSet, seeds: u64, show_progress: bool) -> VerifyReport {
    let pb = if show_progress {
        let pb = ProgressBar::new(seeds);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results: Vec<(usize, Vec<VerifyFailure>)> = (0..seeds)
        .into_par_iter()
        .map(|seed| {
            let result = verify_seed(levels, seed);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    let rounds_played = results.iter().map(|(rounds, _)| rounds).sum();
    let mut failures: Vec<VerifyFailure> = results.into_iter().flat_map(|(_, f)| f).collect();
    failures.sort_by_key(|f| (f.seed, f.level));

    VerifyReport {
        levels: levels.len(),
        seeds,
        rounds_played,
        failures,
        duration: start.elapsed(),
    }
}

/// Play one game; returns rounds played and problems found
fn verify_seed(levels: &LevelSet, seed: u64) -> (usize, Vec<VerifyFailure>) {
    let mut failures = Vec::new();
    let mut fail = |level: usize, problem: String| {
        failures.push(VerifyFailure {
            seed,
            level,
            problem,
        });
    };

    let Ok(mut game) = Game::with_seed(levels.clone(), GameMode::Single, [""; 0], seed) else {
        fail(0, "game could not start".to_string());
        return (0, failures);
    };

    let hints = (seed % u64::from(MAX_HINTS + 1)) as u32;
    let alphabet = levels.language().alphabet();
    let mut expected_total = 0;
    let mut rounds = 0;

    loop {
        let number = game.session().current_level() + 1;
        let round = game.round();
        let level = round.level().clone();
        let letters = round.letters().to_vec();
        rounds += 1;

        let expected_len = pool_size(level.difficulty()).max(level.solution_len());
        if letters.len() != expected_len {
            fail(
                number,
                format!("pool has {} letters, expected {expected_len}", letters.len()),
            );
        }
        if !can_form_word(level.solution(), &letters) {
            fail(number, format!("pool cannot spell {}", level.solution()));
        }
        if let Some(stray) = letters.iter().find(|c| !alphabet.contains(c)) {
            fail(number, format!("pool letter {stray} is outside the alphabet"));
        }

        for ordinal in 1..=hints {
            let expected = Hint::for_ordinal(level.solution(), ordinal);
            let got = game.hint();
            if got != expected {
                fail(number, format!("hint {ordinal} was {got:?}, expected {expected:?}"));
            }
        }

        let Some(indices) = game.round().spell(level.solution()) else {
            fail(number, "solution cannot be selected".to_string());
            break;
        };
        for index in indices {
            game.select(index);
        }

        let points = calculate_score(level.difficulty(), hints);
        match game.check() {
            CheckOutcome::Correct { points: got } if got == points => expected_total += points,
            other => fail(number, format!("check returned {other:?}, expected {points} points")),
        }
        if game.check() != CheckOutcome::AlreadyFinished {
            fail(number, "second check was not a no-op".to_string());
        }

        match game.advance() {
            Advance::NextLevel(index) if index == number => {}
            Advance::Complete if number == levels.len() => break,
            other => {
                fail(number, format!("advance returned {other:?}"));
                break;
            }
        }
    }

    if game.session().player_score() != expected_total {
        fail(
            0,
            format!(
                "player score {} does not match {expected_total}",
                game.session().player_score()
            ),
        );
    }

    (rounds, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;
    use crate::levels::builtin;

    #[test]
    fn builtin_english_passes() {
        let levels = builtin(Language::English).unwrap();
        let report = run_verify(&levels, 8, false);
        assert!(report.passed(), "{:?}", report.failures);
        assert_eq!(report.rounds_played, levels.len() * 8);
    }

    #[test]
    fn builtin_arabic_passes() {
        let levels = builtin(Language::Arabic).unwrap();
        let report = run_verify(&levels, 8, false);
        assert!(report.passed(), "{:?}", report.failures);
        assert_eq!(report.levels, levels.len());
    }

    #[test]
    fn zero_seeds_is_empty_run() {
        let levels = builtin(Language::English).unwrap();
        let report = run_verify(&levels, 0, false);
        assert_eq!(report.rounds_played, 0);
        assert!(report.passed());
    }
}
