//! Display functions for command results

use super::formatters::{create_progress_bar, format_pool, format_slots, hint_meter};
use super::text::{difficulty_name, hint_message, mode_name, round_message, strings};
use crate::commands::{LevelSummary, VerifyReport};
use crate::core::{Difficulty, Language};
use crate::engine::{GameMode, MAX_HINTS, RoundPhase, RoundSnapshot, SessionSnapshot};
use colored::{ColoredString, Colorize};

fn colored_difficulty(language: Language, difficulty: Difficulty) -> ColoredString {
    let name = difficulty_name(language, difficulty);
    match difficulty {
        Difficulty::Easy => name.green(),
        Difficulty::Medium => name.yellow(),
        Difficulty::Hard => name.red(),
    }
}

/// Print the game title
pub fn print_banner(language: Language, mode: GameMode) {
    let text = strings(language);
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({})",
        text.title.bright_cyan().bold(),
        mode_name(language, mode).bright_yellow()
    );
    println!(" {}", text.subtitle);
    println!("{}", "═".repeat(60).cyan());
}

/// Print the round board: level header, clue, pool and answer
pub fn print_round(
    language: Language,
    round: &RoundSnapshot,
    session: &SessionSnapshot,
    solution_len: usize,
) {
    let text = strings(language);
    let level = session.level_index + 1;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {level}/{}  [{}]  {}: {}",
        text.level.bright_cyan().bold(),
        session.level_count,
        create_progress_bar(level, session.level_count, 20).green(),
        text.difficulty,
        colored_difficulty(language, round.difficulty)
    );
    if session.mode == GameMode::Competitive {
        if let Some(team) = session.scores.get(session.team_index) {
            println!("{}: {}", text.team_turn, team.name.bright_magenta().bold());
        }
    }
    println!("{}", "─".repeat(60).cyan());

    println!("\n{}: {}", text.clue.bright_cyan(), round.clue.bright_white().bold());
    println!(
        "\n{}:\n  {}",
        text.letters,
        format_pool(&round.letters, &round.selected)
    );
    println!(
        "\n{}: {}",
        text.your_answer,
        format_slots(&round.answer, solution_len).bright_yellow().bold()
    );
    println!(
        "{}: {}",
        text.hint,
        hint_meter(round.hints_used, MAX_HINTS).yellow()
    );

    if let Some(hint) = round.hint {
        println!("💡 {}", hint_message(language, hint));
    }
}

/// Print the outcome of the latest check or reveal
pub fn print_message(language: Language, round: &RoundSnapshot, team: Option<&str>) {
    let Some(message) = round.message else {
        return;
    };
    let line = round_message(language, message, team);
    if round.phase == RoundPhase::Solved {
        println!("\n✅ {}", line.green().bold());
    } else if round.phase.is_finished() {
        println!("\n👁  {}", line.yellow());
    } else {
        println!("\n❌ {}", line.red());
    }
}

/// Print team scores, or the player total in single-player mode
pub fn print_scoreboard(language: Language, session: &SessionSnapshot) {
    let text = strings(language);
    println!("\n📊 {}", text.score.bright_cyan().bold());

    if session.mode == GameMode::Single {
        println!("   {}", session.player_score.to_string().bright_yellow().bold());
        return;
    }

    let best = session.scores.iter().map(|row| row.score).max().unwrap_or(0);
    for (i, row) in session.scores.iter().enumerate() {
        let marker = if i == session.team_index { "▶" } else { " " };
        let score = if row.score == best && best > 0 {
            row.score.to_string().bright_green().bold()
        } else {
            row.score.to_string().normal()
        };
        println!("  {marker} {:<20} {score:>5}", row.name);
    }
}

/// Print the end-of-game screen
pub fn print_complete(language: Language, session: &SessionSnapshot) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("  🎉 {}", strings(language).complete.bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    print_scoreboard(language, session);
}

/// Print a level set overview
pub fn print_level_summary(summary: &LevelSummary) {
    let language = summary.language;
    println!("\n{}", "═".repeat(70).cyan());
    println!(
        " {} {} ",
        "LEVELS:".bright_cyan().bold(),
        language.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(70).cyan());

    for row in &summary.rows {
        println!(
            "{:>3}. {:<8} {:<14} pool {:>2}  max {:>2}  {}",
            row.number,
            colored_difficulty(language, row.difficulty),
            row.solution.bright_white().bold(),
            row.pool_size,
            row.max_points,
            row.clue.bright_black()
        );
    }

    println!(
        "\n   {} levels: {} easy, {} medium, {} hard",
        summary.rows.len(),
        summary.easy.to_string().green(),
        summary.medium.to_string().yellow(),
        summary.hard.to_string().red()
    );
    println!(
        "   Perfect game: {} points",
        summary.max_total.to_string().bright_yellow().bold()
    );
}

/// Print the result of a verification run
pub fn print_verify_report(report: &VerifyReport) {
    println!("\n{}", "═".repeat(70));
    println!(" Verification Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Coverage".bright_cyan().bold());
    println!("  Levels:          {}", report.levels);
    println!("  Seeds:           {}", report.seeds);
    println!("  Rounds played:   {}", report.rounds_played);
    println!(
        "  Total time:      {:.2}s",
        report.duration.as_secs_f64()
    );

    if report.passed() {
        println!("\n{}", "✅ Every level passed".green().bold());
        return;
    }

    println!(
        "\n{}",
        format!("❌ {} problems found", report.failures.len())
            .red()
            .bold()
    );
    for failure in report.failures.iter().take(20) {
        println!(
            "  seed {:>4} level {:>3}: {}",
            failure.seed,
            failure.level,
            failure.problem.yellow()
        );
    }
    if report.failures.len() > 20 {
        println!("  … and {} more", report.failures.len() - 20);
    }
}
