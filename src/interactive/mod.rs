//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, AppConfig, Message, MessageStyle, Screen, run_tui};
