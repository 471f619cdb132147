//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and status for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Verdict;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = u16::try_from(app.config.max_rounds)
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board + messages
            Constraint::Length(5),         // Keyboard
            Constraint::Length(3),         // Input area
            Constraint::Length(1),         // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn verdict_style(verdict: Verdict) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match verdict {
        Verdict::Exact => base.fg(Color::Black).bg(Color::Green),
        Verdict::Present => base.fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => base.fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let word_length = session.secret().len();
    let mut lines = Vec::with_capacity(session.max_rounds());

    for (guess, pattern) in session.guesses().iter().zip(session.history()) {
        let cells = guess
            .letters()
            .iter()
            .zip(pattern.verdicts())
            .map(|(&letter, &verdict)| {
                Span::styled(format!(" {} ", letter as char), verdict_style(verdict))
            });
        lines.push(spaced(cells));
    }

    if app.input_mode == InputMode::Guessing {
        let typed: Vec<char> = app.input_buffer.to_uppercase().chars().collect();
        let cells = (0..word_length.max(typed.len())).map(|i| {
            let c = typed.get(i).copied().unwrap_or('_');
            Span::styled(format!(" {c} "), Style::default().fg(Color::Yellow))
        });
        lines.push(spaced(cells));
    }

    for _ in lines.len()..session.max_rounds() {
        let cells =
            (0..word_length).map(|_| Span::styled(" . ", Style::default().fg(Color::DarkGray)));
        lines.push(spaced(cells));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// Join cells with a one-column gap
fn spaced<'s>(cells: impl Iterator<Item = Span<'s>>) -> Line<'s> {
    let mut spans = Vec::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(cell);
    }
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.letter_hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            spaced(row.bytes().map(|letter| {
                let style = hints
                    .get(&letter)
                    .map_or_else(|| Style::default().fg(Color::White), |&v| verdict_style(v));
                Span::styled(format!("{}", letter as char), style)
            }))
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a word and press Enter | ESC to quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let text = format!(
        "Round {}/{} | Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.session.rounds_played(),
        app.session.max_rounds(),
        stats.games_played,
        stats.win_rate(),
        stats.current_streak
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
