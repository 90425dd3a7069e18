//! TUI application state and logic
//!
//! Setup runs language → mode → teams before the clue game; every key press
//! is routed through [`App::handle_key`].

use crate::core::{Language, LevelSet};
use crate::engine::{Advance, CheckOutcome, Game, GameMode, MAX_TEAMS, MIN_COMPETITIVE_TEAMS, Team};
use crate::levels::builtin;
use crate::output::text::{hint_message, round_message, strings};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest team name accepted by the roster input
const MAX_TEAM_NAME: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Language,
    Mode,
    Teams,
    Playing,
    Complete,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Start-up options from the command line
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub language: Language,
    /// Custom level set; fixes the language and skips the language screen
    pub levels: Option<LevelSet>,
    pub seed: Option<u64>,
}

/// Application state
pub struct App {
    pub screen: Screen,
    pub language: Language,
    pub mode: GameMode,
    /// Highlighted row on the language, mode and team screens
    pub menu_index: usize,
    pub team_names: Vec<String>,
    pub input_buffer: String,
    pub game: Option<Game>,
    /// Highlighted pool slot
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    custom_levels: Option<LevelSet>,
    seed: Option<u64>,
}

impl App {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let language = config
            .levels
            .as_ref()
            .map_or(config.language, LevelSet::language);
        let screen = if config.levels.is_some() {
            Screen::Mode
        } else {
            Screen::Language
        };

        Self {
            screen,
            language,
            mode: GameMode::Single,
            menu_index: Language::ALL
                .iter()
                .position(|&l| l == language)
                .unwrap_or(0),
            team_names: Vec::new(),
            input_buffer: String::new(),
            game: None,
            cursor: 0,
            messages: Vec::new(),
            should_quit: false,
            custom_levels: config.levels,
            seed: config.seed,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Whether the roster allows starting a competitive game
    #[must_use]
    pub fn teams_ready(&self) -> bool {
        self.team_names.len() >= MIN_COMPETITIVE_TEAMS
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Language => self.handle_language_key(key.code),
            Screen::Mode => self.handle_mode_key(key.code),
            Screen::Teams => self.handle_teams_key(key.code),
            Screen::Playing => self.handle_playing_key(key.code),
            Screen::Complete => self.handle_complete_key(key.code),
        }
    }

    fn handle_language_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down => self.menu_index = 1 - self.menu_index.min(1),
            KeyCode::Char('1') => self.choose_language(Language::English),
            KeyCode::Char('2') => self.choose_language(Language::Arabic),
            KeyCode::Enter => self.choose_language(Language::ALL[self.menu_index.min(1)]),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn choose_language(&mut self, language: Language) {
        self.language = language;
        self.screen = Screen::Mode;
        self.menu_index = 0;
    }

    fn handle_mode_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down => self.menu_index = 1 - self.menu_index.min(1),
            KeyCode::Char('1') => self.choose_mode(GameMode::Single),
            KeyCode::Char('2') => self.choose_mode(GameMode::Competitive),
            KeyCode::Enter => {
                let mode = if self.menu_index == 0 {
                    GameMode::Single
                } else {
                    GameMode::Competitive
                };
                self.choose_mode(mode);
            }
            KeyCode::Esc if self.custom_levels.is_none() => {
                self.screen = Screen::Language;
                self.menu_index = Language::ALL
                    .iter()
                    .position(|&l| l == self.language)
                    .unwrap_or(0);
            }
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn choose_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        match mode {
            GameMode::Single => self.start_game(),
            GameMode::Competitive => {
                self.screen = Screen::Teams;
                self.menu_index = 0;
                self.input_buffer.clear();
            }
        }
    }

    fn handle_teams_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < MAX_TEAM_NAME {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Up => self.menu_index = self.menu_index.saturating_sub(1),
            KeyCode::Down => {
                if self.menu_index + 1 < self.team_names.len() {
                    self.menu_index += 1;
                }
            }
            KeyCode::Delete => {
                if self.menu_index < self.team_names.len() {
                    self.team_names.remove(self.menu_index);
                    self.menu_index = self.menu_index.min(self.team_names.len().saturating_sub(1));
                }
            }
            KeyCode::Enter if self.input_buffer.trim().is_empty() => {
                if self.teams_ready() {
                    self.start_game();
                } else {
                    let text = match self.team_names.len() {
                        0 => strings(self.language).need_two_teams,
                        _ => strings(self.language).need_one_more,
                    };
                    self.add_message(text, MessageStyle::Error);
                }
            }
            KeyCode::Enter => self.add_team(),
            KeyCode::Esc => {
                self.screen = Screen::Mode;
                self.menu_index = 1;
            }
            _ => {}
        }
    }

    fn add_team(&mut self) {
        let name = self.input_buffer.trim().to_string();
        if self.team_names.len() >= MAX_TEAMS {
            let text = strings(self.language).max_teams;
            self.add_message(text, MessageStyle::Error);
            return;
        }
        if self.team_names.contains(&name) {
            let text = strings(self.language).duplicate_team;
            self.add_message(text, MessageStyle::Error);
            return;
        }
        self.team_names.push(name);
        self.menu_index = self.team_names.len() - 1;
        self.input_buffer.clear();
    }

    /// Build the game from the chosen settings and switch to the play screen
    pub fn start_game(&mut self) {
        match self.build_game() {
            Ok(game) => {
                self.game = Some(game);
                self.screen = Screen::Playing;
                self.cursor = 0;
                self.messages.clear();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn build_game(&self) -> Result<Game> {
        let levels = match &self.custom_levels {
            Some(levels) => levels.clone(),
            None => builtin(self.language)?,
        };
        let game = match self.seed {
            Some(seed) => Game::with_seed(levels, self.mode, &self.team_names, seed)?,
            None => Game::from_os_rng(levels, self.mode, &self.team_names)?,
        };
        Ok(game)
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let pool_len = game.round().letters().len();

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => self.cursor = self.cursor.checked_sub(1).unwrap_or(pool_len - 1),
            KeyCode::Right => self.cursor = (self.cursor + 1) % pool_len,
            KeyCode::Char(' ') => {
                game.select(self.cursor);
            }
            KeyCode::Char('?') | KeyCode::F(1) => self.use_hint(),
            KeyCode::Char('!') | KeyCode::F(2) => self.reveal(),
            KeyCode::Char(c) if c.is_alphabetic() => {
                if let Some(index) = game.select_letter(c) {
                    self.cursor = index;
                }
            }
            KeyCode::Backspace => {
                game.remove_last();
            }
            KeyCode::Delete => game.clear(),
            KeyCode::Enter if game.round().is_correct() => self.advance(),
            KeyCode::Enter => self.check(),
            _ => {}
        }
    }

    fn use_hint(&mut self) {
        let language = self.language;
        let Some(game) = self.game.as_mut() else {
            return;
        };
        match game.hint() {
            Some(hint) => self.add_message(&hint_message(language, hint), MessageStyle::Info),
            None => self.add_message(strings(language).no_hints, MessageStyle::Error),
        }
    }

    fn reveal(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.reveal() {
            let text = format!("{}: {}", strings(self.language).revealed, game.round().answer());
            self.add_message(&text, MessageStyle::Info);
        }
    }

    fn check(&mut self) {
        let language = self.language;
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.round().answer().is_empty() {
            return;
        }

        let team = game.turn().map(Team::name).map(str::to_string);
        let outcome = game.check();
        let Some(message) = game.round().message() else {
            return;
        };
        let style = match outcome {
            CheckOutcome::Correct { .. } => MessageStyle::Success,
            CheckOutcome::Incorrect => MessageStyle::Error,
            CheckOutcome::AlreadyFinished => return,
        };
        self.add_message(&round_message(language, message, team.as_deref()), style);
    }

    fn advance(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        match game.advance() {
            Advance::NextLevel(_) => {
                self.cursor = 0;
                self.messages.clear();
            }
            Advance::Complete => {
                self.screen = Screen::Complete;
                let text = strings(self.language).complete;
                self.add_message(text, MessageStyle::Success);
            }
            Advance::NotReady => {}
        }
    }

    fn handle_complete_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('r') | KeyCode::Enter => {
                if let Some(game) = self.game.as_mut() {
                    game.reset();
                }
                self.screen = Screen::Playing;
                self.cursor = 0;
                self.messages.clear();
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, Level};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn seeded(config: AppConfig) -> App {
        App::new(AppConfig {
            seed: Some(7),
            ..config
        })
    }

    fn custom_levels() -> LevelSet {
        LevelSet::new(
            Language::English,
            vec![
                Level::new("Shines by day", "sun", Difficulty::Easy).unwrap(),
                Level::new("Purrs", "cat", Difficulty::Easy).unwrap(),
            ],
        )
        .unwrap()
    }

    fn solve_current(app: &mut App) {
        let solution = app.game.as_ref().unwrap().round().level().solution().to_string();
        type_text(app, &solution);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn setup_flow_single_player() {
        let mut app = seeded(AppConfig::default());
        assert_eq!(app.screen, Screen::Language);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.language, Language::Arabic);
        assert_eq!(app.screen, Screen::Mode);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Playing);
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.language(), Language::Arabic);
        assert_eq!(game.session().mode(), GameMode::Single);
    }

    #[test]
    fn competitive_needs_two_teams_before_start() {
        let mut app = seeded(AppConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, Screen::Teams);

        type_text(&mut app, "Owls");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Teams);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        type_text(&mut app, "Foxes");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.game.as_ref().unwrap().session().teams().len(), 2);
    }

    #[test]
    fn team_roster_caps_and_removes() {
        let mut app = seeded(AppConfig::default());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));

        for i in 0..=MAX_TEAMS {
            type_text(&mut app, &format!("T{i}"));
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.team_names.len(), MAX_TEAMS);

        app.input_buffer.clear();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.team_names.len(), MAX_TEAMS - 1);
        assert!(!app.team_names.contains(&"T6".to_string()));
    }

    #[test]
    fn custom_levels_skip_language_screen() {
        let app = App::new(AppConfig {
            levels: Some(custom_levels()),
            ..AppConfig::default()
        });
        assert_eq!(app.screen, Screen::Mode);
    }

    #[test]
    fn playing_through_to_completion_and_restart() {
        let mut app = seeded(AppConfig {
            levels: Some(custom_levels()),
            ..AppConfig::default()
        });
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Playing);

        solve_current(&mut app);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.as_ref().unwrap().session().current_level(), 1);

        press(&mut app, KeyCode::Char('?'));
        solve_current(&mut app);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Complete);
        assert_eq!(app.game.as_ref().unwrap().session().player_score(), 18);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.game.as_ref().unwrap().session().player_score(), 0);
    }

    #[test]
    fn wrong_answer_reports_error() {
        let mut app = seeded(AppConfig {
            levels: Some(custom_levels()),
            ..AppConfig::default()
        });
        press(&mut app, KeyCode::Enter);
        let first = app.game.as_ref().unwrap().round().letters()[0];
        type_text(&mut app, &first.to_string());
        press(&mut app, KeyCode::Enter);

        let game = app.game.as_ref().unwrap();
        assert!(!game.round().is_correct());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        press(&mut app, KeyCode::Delete);
        assert!(app.game.as_ref().unwrap().round().answer().is_empty());
    }

    #[test]
    fn space_selects_cursor_slot() {
        let mut app = seeded(AppConfig {
            levels: Some(custom_levels()),
            ..AppConfig::default()
        });
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game.as_ref().unwrap().round().selected(), &[1]);

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 9);
        press(&mut app, KeyCode::Backspace);
        assert!(app.game.as_ref().unwrap().round().selected().is_empty());
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = seeded(AppConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
