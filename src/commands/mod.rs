//! Command implementations

pub mod levels;
pub mod simple;
pub mod verify;

pub use levels::{LevelRow, LevelSummary, summarize_levels};
pub use simple::{SimpleCommand, run_simple};
pub use verify::{VerifyFailure, VerifyReport, run_verify};
