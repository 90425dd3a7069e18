//! Simple interactive CLI mode
//!
//! Line-oriented clue game without TUI

use crate::engine::{Advance, CheckOutcome, Game, Team};
use crate::output::display::{
    print_banner, print_complete, print_message, print_round, print_scoreboard,
};
use crate::output::text::{hint_message, strings};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    /// Select pool slots by 1-based number
    Slots(Vec<usize>),
    /// Select letters by value, first free slot each
    Letters(Vec<char>),
    /// Remove the selection at a 1-based position, or the last one
    Remove(Option<usize>),
    Clear,
    Hint,
    Check,
    Reveal,
    Next,
    Scores,
    Help,
    Quit,
    Unknown(String),
}

impl SimpleCommand {
    /// Parse an input line
    ///
    /// Keywords win over letter selection, so a solution such as "NEXT" has to be
    /// picked by slot number.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "" | "check" => return Self::Check,
            "clear" => return Self::Clear,
            "hint" | "?" => return Self::Hint,
            "reveal" | "solution" | "!" => return Self::Reveal,
            "next" => return Self::Next,
            "scores" => return Self::Scores,
            "help" => return Self::Help,
            "quit" | "exit" => return Self::Quit,
            "-" | "undo" => return Self::Remove(None),
            _ => {}
        }

        if let Some(rest) = input.strip_prefix('-') {
            return rest
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .map_or_else(|| Self::Unknown(input.to_string()), |n| Self::Remove(Some(n)));
        }

        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.iter().all(|t| t.chars().all(|c| c.is_ascii_digit())) {
            let slots: Option<Vec<usize>> = tokens
                .iter()
                .map(|t| t.parse::<usize>().ok().filter(|&n| n > 0))
                .collect();
            return slots.map_or_else(|| Self::Unknown(input.to_string()), Self::Slots);
        }

        if input.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
            return Self::Letters(input.chars().filter(|c| c.is_alphabetic()).collect());
        }

        Self::Unknown(input.to_string())
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: Rng>(game: &mut Game<R>) -> Result<(), String> {
    let language = game.language();
    print_banner(language, game.session().mode());
    print_help();

    let mut redraw = true;
    loop {
        let snapshot = game.snapshot();
        if redraw {
            print_round(
                language,
                &snapshot.round,
                &snapshot.session,
                game.round().level().solution_len(),
            );
        }
        redraw = true;

        let input = get_user_input(">")?;
        match SimpleCommand::parse(&input) {
            SimpleCommand::Slots(slots) => {
                for slot in slots {
                    if !game.select(slot - 1) {
                        println!("{}", format!("Slot {slot} is not available").red());
                    }
                }
            }
            SimpleCommand::Letters(letters) => {
                for letter in letters {
                    if game.select_letter(letter).is_none() {
                        println!("{}", format!("No free '{letter}' in the pool").red());
                    }
                }
            }
            SimpleCommand::Remove(position) => {
                let removed = match position {
                    Some(n) => game.remove(n - 1),
                    None => game.remove_last(),
                };
                if !removed {
                    println!("Nothing to remove!");
                }
            }
            SimpleCommand::Clear => game.clear(),
            SimpleCommand::Hint => match game.hint() {
                Some(hint) => println!("\n💡 {}", hint_message(language, hint).bright_yellow()),
                None => println!("No hints left!"),
            },
            SimpleCommand::Check => {
                if game.round().answer().is_empty() && !game.round().is_correct() {
                    println!("Select some letters first!");
                    redraw = false;
                    continue;
                }
                let team = game.turn().map(Team::name).map(str::to_string);
                let outcome = game.check();
                if outcome != CheckOutcome::AlreadyFinished {
                    print_message(language, &game.round().snapshot(), team.as_deref());
                }
                redraw = !game.round().is_correct();
            }
            SimpleCommand::Reveal => {
                if game.reveal() {
                    println!(
                        "\n👁  {} {}",
                        strings(language).revealed.yellow(),
                        game.round().answer().bright_white().bold()
                    );
                }
                redraw = false;
            }
            SimpleCommand::Next => match game.advance() {
                Advance::NotReady => {
                    println!("Solve or reveal this level first!");
                    redraw = false;
                }
                Advance::NextLevel(_) => {}
                Advance::Complete => {
                    print_complete(language, &game.session().snapshot());
                    if !play_again()? {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    game.reset();
                    println!("\n🔄 New game started!\n");
                }
            },
            SimpleCommand::Scores => {
                print_scoreboard(language, &snapshot.session);
                redraw = false;
            }
            SimpleCommand::Help => {
                print_help();
                redraw = false;
            }
            SimpleCommand::Quit => {
                print_scoreboard(language, &game.session().snapshot());
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::Unknown(text) => {
                println!("❌ Unknown command '{text}' (type 'help')");
                redraw = false;
            }
        }

        if game.round().is_correct() && !redraw {
            println!("Type 'next' to continue.");
        }
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  3 7 1      select letters by slot number");
    println!("  sun        select letters by value");
    println!("  -  / -2    remove the last letter / the letter at position 2");
    println!("  clear      remove every selected letter");
    println!("  hint (?)   reveal a hint (costs 2 points)");
    println!("  Enter      check your answer");
    println!("  reveal (!) show the solution (no points)");
    println!("  next       go to the next level");
    println!("  scores     show the scoreboard");
    println!("  quit       leave the game\n");
}

fn play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y" | "نعم"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
