//! PowerLetter - CLI
//!
//! Bilingual clue-driven word puzzle with TUI and line-oriented modes.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use powerletter::{
    commands::{run_simple, run_verify, summarize_levels},
    core::{Language, LevelSet},
    engine::{Game, GameMode, MIN_COMPETITIVE_TEAMS},
    levels::{builtin, load_from_file},
    output::{logger, print_level_summary, print_verify_report},
};

#[derive(Parser)]
#[command(
    name = "powerletter",
    about = "Find the word from a clue and a pool of letters, alone or in teams (English/Arabic)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game language: en (default) or ar
    #[arg(short, long, global = true, default_value = "en", value_parser = parse_language)]
    language: Language,

    /// Level file (`difficulty|solution|clue` per line) instead of the built-in levels
    #[arg(short = 'L', long, global = true)]
    levels: Option<String>,

    /// Seed for letter pools (default: OS entropy)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log to stderr (-v info, -vv debug); ignored by the TUI
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented play without TUI)
    Simple {
        /// Team name; two or more teams start a competitive game
        #[arg(short, long = "team")]
        teams: Vec<String>,
    },

    /// List the level set with pool sizes and maximum points
    Levels,

    /// Play every level across many seeds and check the engine invariants
    Verify {
        /// Number of seeded games per level set
        #[arg(short = 'n', long, default_value = "100")]
        seeds: u64,
    },
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code).ok_or_else(|| format!("unknown language '{code}' (expected en or ar)"))
}

/// Load levels based on the -L flag
fn load_levels(path: Option<&str>, language: Language) -> Result<LevelSet> {
    match path {
        Some(path) => Ok(load_from_file(path, language)?),
        None => Ok(builtin(language)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if !matches!(command, Commands::Play) {
        logger::init(cli.verbose).map_err(|e| anyhow::anyhow!(e))?;
    }

    match command {
        Commands::Play => run_play_command(cli.levels.as_deref(), cli.language, cli.seed),
        Commands::Simple { teams } => {
            let levels = load_levels(cli.levels.as_deref(), cli.language)?;
            run_simple_command(levels, &teams, cli.seed)
        }
        Commands::Levels => {
            let levels = load_levels(cli.levels.as_deref(), cli.language)?;
            print_level_summary(&summarize_levels(&levels));
            Ok(())
        }
        Commands::Verify { seeds } => {
            let levels = load_levels(cli.levels.as_deref(), cli.language)?;
            run_verify_command(&levels, seeds)
        }
    }
}

fn run_simple_command(levels: LevelSet, teams: &[String], seed: Option<u64>) -> Result<()> {
    let mode = if teams.len() >= MIN_COMPETITIVE_TEAMS {
        GameMode::Competitive
    } else {
        GameMode::Single
    };

    match seed {
        Some(seed) => {
            let mut game = Game::with_seed(levels, mode, teams, seed)?;
            run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
        }
        None => {
            let mut game = Game::from_os_rng(levels, mode, teams)?;
            run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
        }
    }
}

fn run_verify_command(levels: &LevelSet, seeds: u64) -> Result<()> {
    println!(
        "Verifying {} {} levels across {seeds} seeds...",
        levels.len(),
        levels.language()
    );

    let report = run_verify(levels, seeds, true);
    print_verify_report(&report);

    if report.passed() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{} verification problems",
            report.failures.len()
        ))
    }
}

fn run_play_command(path: Option<&str>, language: Language, seed: Option<u64>) -> Result<()> {
    use powerletter::interactive::{App, AppConfig, run_tui};

    let levels = path.map(|path| load_from_file(path, language)).transpose()?;
    let app = App::new(AppConfig {
        language,
        levels,
        seed,
    });
    run_tui(app)
}
