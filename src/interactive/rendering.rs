//! TUI rendering with ratatui
//!
//! Arabic screens are right-aligned; the letter pool keeps slot order so the
//! arrow keys move the same way in both languages.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Difficulty, Language};
use crate::engine::{Game, GameMode, MAX_HINTS, MAX_TEAMS, RoundPhase};
use crate::output::formatters::{format_slots, hint_meter};
use crate::output::text::{Strings, difficulty_name, hint_message, strings};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Language => render_language(f, app, chunks[1]),
        Screen::Mode => render_mode(f, app, chunks[1]),
        Screen::Teams => render_teams(f, app, chunks[1]),
        Screen::Playing | Screen::Complete => render_game(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

const fn text_alignment(language: Language) -> Alignment {
    if language.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn menu_item(label: String, highlighted: bool) -> ListItem<'static> {
    let style = if highlighted {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if highlighted { "▶ " } else { "  " };
    ListItem::new(format!("{marker}{label}")).style(style)
}

const fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let text = strings(app.language);
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("🔤 {}", text.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(text.subtitle),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_language(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Language::ALL
        .iter()
        .enumerate()
        .map(|(i, language)| {
            let flag = match language {
                Language::English => "🇺🇸",
                Language::Arabic => "🇸🇦",
            };
            menu_item(format!("{}. {flag} {language}", i + 1), i == app.menu_index)
        })
        .collect();

    let title = format!(
        "{} / {}",
        strings(Language::English).choose_language,
        strings(Language::Arabic).choose_language
    );
    f.render_widget(List::new(items).block(rounded(&title)), area);
}

fn render_mode(f: &mut Frame, app: &App, area: Rect) {
    let text = strings(app.language);
    let mut items = Vec::new();
    for (i, (name, about)) in [
        (text.single, text.single_about),
        (text.competitive, text.competitive_about),
    ]
    .into_iter()
    .enumerate()
    {
        items.push(menu_item(format!("{}. {name}", i + 1), i == app.menu_index));
        items.push(ListItem::new(format!("     {about}")).style(Style::default().fg(Color::DarkGray)));
    }

    f.render_widget(List::new(items).block(rounded(text.choose_mode)), area);
}

fn render_teams(f: &mut Frame, app: &App, area: Rect) {
    let text = strings(app.language);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name input
            Constraint::Min(4),    // Roster
            Constraint::Length(3), // Readiness
        ])
        .split(area);

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(text_alignment(app.language))
        .block(
            Block::default()
                .title(format!(" {} | {} ", text.team_name, text.team_setup_about))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, chunks[0]);

    let items: Vec<ListItem> = app
        .team_names
        .iter()
        .enumerate()
        .map(|(i, name)| menu_item(format!("{}. {name}", i + 1), i == app.menu_index))
        .collect();
    let title = format!(
        "{} ({}/{MAX_TEAMS})",
        text.teams_added,
        app.team_names.len()
    );
    f.render_widget(List::new(items).block(rounded(&title)), chunks[1]);

    let (status, color) = match app.team_names.len() {
        0 => (text.need_two_teams.to_string(), Color::Red),
        1 => (text.need_one_more.to_string(), Color::Yellow),
        n if n >= MAX_TEAMS => (text.max_teams.to_string(), Color::Cyan),
        n => (format!("✓ {n}"), Color::Green),
    };
    let readiness = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(readiness, chunks[2]);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let Some(game) = app.game.as_ref() else {
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Board
            Constraint::Percentage(35), // Scores and messages
        ])
        .split(area);

    let board = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Level info
            Constraint::Min(4),    // Clue and hint
            Constraint::Length(3), // Letter pool
            Constraint::Length(3), // Answer
        ])
        .split(columns[0]);

    render_level_info(f, app, game, board[0]);
    render_clue(f, app, game, board[1]);
    render_pool(f, app, game, board[2]);
    render_answer(f, app, game, board[3]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(4),    // Scores
            Constraint::Length(7), // Messages
        ])
        .split(columns[1]);

    render_progress(f, app, game, side[0]);
    render_scores(f, app, game, side[1]);
    render_messages(f, app, side[2]);
}

fn render_level_info(f: &mut Frame, app: &App, game: &Game, area: Rect) {
    let text = strings(app.language);
    let session = game.session();
    let difficulty = game.round().level().difficulty();

    let mut spans = vec![
        Span::styled(
            format!(
                "{} {}/{}",
                text.level,
                session.current_level() + 1,
                session.level_count()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {}: ", text.difficulty)),
        Span::styled(
            difficulty_name(app.language, difficulty),
            Style::default().fg(difficulty_color(difficulty)),
        ),
    ];
    if let Some(team) = game.turn() {
        spans.push(Span::raw(format!("  {}: ", text.team_turn)));
        spans.push(Span::styled(
            team.name().to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let info = Paragraph::new(Line::from(spans))
        .alignment(text_alignment(app.language))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(info, area);
}

fn render_clue(f: &mut Frame, app: &App, game: &Game, area: Rect) {
    let text = strings(app.language);
    let round = game.round();

    let mut lines = vec![Line::from(Span::styled(
        round.level().clue().to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(hint) = round.hint() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("💡 {}", hint_message(app.language, hint)),
            Style::default().fg(Color::Yellow),
        )));
    }

    let clue = Paragraph::new(lines)
        .alignment(text_alignment(app.language))
        .wrap(Wrap { trim: true })
        .block(rounded(text.clue).style(Style::default().fg(Color::Cyan)));
    f.render_widget(clue, area);
}

fn render_pool(f: &mut Frame, app: &App, game: &Game, area: Rect) {
    let round = game.round();
    let finished = round.phase().is_finished();

    let spans: Vec<Span> = round
        .letters()
        .iter()
        .enumerate()
        .flat_map(|(i, &letter)| {
            let mut style = if round.is_selected(i) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            };
            if i == app.cursor && !finished {
                style = style.bg(Color::Blue);
            }
            [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
        })
        .collect();

    let pool = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(rounded(strings(app.language).letters));
    f.render_widget(pool, area);
}

fn render_answer(f: &mut Frame, app: &App, game: &Game, area: Rect) {
    let round = game.round();
    let color = match round.phase() {
        RoundPhase::Solved => Color::Green,
        RoundPhase::Revealed => Color::Yellow,
        RoundPhase::InProgress => Color::White,
    };

    let answer = Paragraph::new(format_slots(round.answer(), round.level().solution_len()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} ", strings(app.language).your_answer))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(answer, area);
}

fn render_progress(f: &mut Frame, app: &App, game: &Game, area: Rect) {
    let session = game.session();
    let done = if game.is_complete() {
        session.level_count()
    } else {
        session.current_level()
    };
    let percent = (done * 100 / session.level_count()).min(100) as u16;

    let gauge = Gauge::default()
        .block(rounded(strings(app.language).level))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!(
            "{done}/{} | {} {}",
            session.level_count(),
            strings(app.language).hint,
            hint_meter(game.round().hints_used(), MAX_HINTS)
        ));
    f.render_widget(gauge, area);
}

fn render_scores(f: &mut Frame, app: &App, game: &Game, area: Rect) {
    let text = strings(app.language);
    let snapshot = game.session().snapshot();

    let items: Vec<ListItem> = match snapshot.mode {
        GameMode::Single => vec![ListItem::new(Span::styled(
            snapshot.player_score.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))],
        GameMode::Competitive => snapshot
            .scores
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let active = i == snapshot.team_index && !game.is_complete();
                menu_item(format!("{:<16} {:>4}", row.name, row.score), active)
            })
            .collect(),
    };

    f.render_widget(List::new(items).block(rounded(text.score)), area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn help_text(app: &App, text: &Strings) -> String {
    match app.screen {
        Screen::Language => "↑↓: Choose | 1/2 | Enter: Select | Esc: Quit".to_string(),
        Screen::Mode => "↑↓: Choose | 1/2 | Enter: Select | Esc: Back".to_string(),
        Screen::Teams => format!(
            "Enter: Add / Start | Del: Remove | ↑↓: Choose | Esc: Back | {}",
            text.team_setup
        ),
        Screen::Playing => format!(
            "Type/Space: Select | ←→: Move | Bksp: Remove | Del: {} | Enter: {} / {} | ?: {} | !: {} | Esc: {}",
            text.clear, text.check, text.next, text.hint, text.reveal, text.quit
        ),
        Screen::Complete => format!(
            "{} | r: {} | q: {}",
            text.complete, text.play_again, text.quit
        ),
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = strings(app.language);
    let help = Paragraph::new(help_text(app, text))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}
