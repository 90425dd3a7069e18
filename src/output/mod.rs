//! Terminal output formatting
//!
//! Display utilities for the line-oriented commands, bilingual strings shared
//! with the TUI, and the stderr log backend.

pub mod display;
pub mod formatters;
pub mod logger;
pub mod text;

pub use display::{
    print_banner, print_complete, print_level_summary, print_message, print_round,
    print_scoreboard, print_verify_report,
};
