//! Level set overview

use crate::core::{Difficulty, Language, LevelSet};
use crate::engine::{base_score, pool_size};

/// Per-level row of the overview
#[derive(Debug, Clone)]
pub struct LevelRow {
    pub number: usize,
    pub difficulty: Difficulty,
    pub solution: String,
    pub clue: String,
    pub pool_size: usize,
    pub max_points: u32,
}

/// Summary of a level set
#[derive(Debug, Clone)]
pub struct LevelSummary {
    pub language: Language,
    pub rows: Vec<LevelRow>,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    /// Points for solving every level without hints
    pub max_total: u32,
}

/// Summarize a level set in play order
#[must_use]
pub fn summarize_levels(levels: &LevelSet) -> LevelSummary {
    let rows: Vec<LevelRow> = levels
        .iter()
        .enumerate()
        .map(|(i, level)| LevelRow {
            number: i + 1,
            difficulty: level.difficulty(),
            solution: level.solution().to_string(),
            clue: level.clue().to_string(),
            pool_size: pool_size(level.difficulty()).max(level.solution_len()),
            max_points: base_score(level.difficulty()),
        })
        .collect();

    let count = |difficulty: Difficulty| rows.iter().filter(|r| r.difficulty == difficulty).count();

    LevelSummary {
        language: levels.language(),
        easy: count(Difficulty::Easy),
        medium: count(Difficulty::Medium),
        hard: count(Difficulty::Hard),
        max_total: rows.iter().map(|r| r.max_points).sum(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;

    #[test]
    fn summary_counts_difficulties() {
        let levels = LevelSet::new(
            Language::English,
            vec![
                Level::new("a", "sun", Difficulty::Easy).unwrap(),
                Level::new("b", "apple", Difficulty::Medium).unwrap(),
                Level::new("c", "volcano", Difficulty::Hard).unwrap(),
                Level::new("d", "cat", Difficulty::Easy).unwrap(),
            ],
        )
        .unwrap();

        let summary = summarize_levels(&levels);
        assert_eq!(summary.rows.len(), 4);
        assert_eq!((summary.easy, summary.medium, summary.hard), (2, 1, 1));
        assert_eq!(summary.max_total, 70);
        assert_eq!(summary.rows[1].pool_size, 14);
        assert_eq!(summary.rows[3].number, 4);
    }

    #[test]
    fn long_solution_pool_size() {
        let levels = LevelSet::new(
            Language::English,
            vec![Level::new("x", "encyclopedia", Difficulty::Easy).unwrap()],
        )
        .unwrap();
        assert_eq!(summarize_levels(&levels).rows[0].pool_size, 12);
    }
}
