//! TUI rendering with ratatui
//!
//! The board, keyboard legend, notifications and statistics screen.

use super::app::{App, MessageStyle, Screen};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{GuessRow, Session, ShareCode};
use crate::output::formatters::create_progress_bar;
use crate::stats::StatsSummary;
use crate::store::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: Storage>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Notification
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let puzzle_index = app.puzzle.session().map(Session::puzzle_index);
    render_header(f, puzzle_index, chunks[0]);

    match app.screen {
        Screen::Game => render_game(f, app, chunks[1]),
        Screen::Stats => render_stats(f, &app.puzzle.stats(), app.puzzle.share(), chunks[1]),
    }

    render_notification(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, puzzle_index: Option<i64>, area: Rect) {
    let title = match puzzle_index {
        Some(index) => format!("WORDLE #{index}"),
        None => "WORDLE".to_string(),
    };
    let header = Paragraph::new(title)
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

fn render_game<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard legend
        ])
        .split(area);

    let Some(session) = app.puzzle.session() else {
        return;
    };
    render_board(f, session, chunks[0]);
    render_legend(f, session, chunks[1]);
}

/// Foreground and background for a tile
fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterStatus::WrongPosition => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::NotPresent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Neutral => Style::default().fg(Color::White),
    }
}

fn row_line(row: &GuessRow, cursor: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (i, (slot, &status)) in row.slots().iter().zip(row.statuses()).enumerate() {
        let letter = slot.map_or('_', |b| char::from(b).to_ascii_uppercase());
        let mut style = tile_style(status).add_modifier(Modifier::BOLD);
        if cursor == Some(i) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, session: &Session, area: Rect) {
    let cursor = session.cursor();
    let mut lines = Vec::new();
    for (r, row) in session.rows().iter().enumerate() {
        let column = cursor.and_then(|(cr, cc)| (cr == r).then_some(cc));
        lines.push(row_line(row, column));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_legend(f: &mut Frame, session: &Session, area: Rect) {
    let mut lines = vec![Line::from("")];
    for keys in KEYBOARD_ROWS {
        let spans: Vec<Span> = keys
            .bytes()
            .map(|b| {
                Span::styled(
                    format!(" {} ", char::from(b).to_ascii_uppercase()),
                    tile_style(session.letter_status(b)),
                )
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let legend = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(legend, area);
}

fn render_stats(f: &mut Frame, summary: &StatsSummary, share: Option<ShareCode>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Statistics
            Constraint::Percentage(40), // Share
        ])
        .split(area);

    let highlight = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Played:          "),
            Span::styled(summary.played.to_string(), highlight),
        ]),
        Line::from(vec![
            Span::raw("Win %:           "),
            Span::styled(summary.win_percent.to_string(), highlight),
        ]),
        Line::from(vec![
            Span::raw("Current streak:  "),
            Span::styled(summary.current_streak.to_string(), highlight),
        ]),
        Line::from(vec![
            Span::raw("Max streak:      "),
            Span::styled(summary.max_streak.to_string(), highlight),
        ]),
        Line::from(""),
        Line::from("Guess distribution"),
    ];

    let max = summary.distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in summary.distribution.iter().enumerate().skip(1) {
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses} ")),
            Span::styled(
                create_progress_bar(count, max, 20),
                Style::default().fg(Color::Green),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }
    lines.push(Line::from(vec![
        Span::raw("X "),
        Span::styled(
            create_progress_bar(summary.distribution[0], max, 20),
            Style::default().fg(Color::Red),
        ),
        Span::raw(format!(" {}", summary.distribution[0])),
    ]));

    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stats, chunks[0]);

    let share_lines: Vec<Line> = match share {
        Some(share) => share
            .grid
            .lines()
            .map(|l| Line::from(l.to_string()))
            .chain([
                Line::from(""),
                Line::from(Span::styled(share.token.clone(), highlight)),
                Line::from(share.url()),
            ])
            .collect(),
        None => vec![Line::from("Nothing to share yet")],
    };
    let share_panel = Paragraph::new(share_lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(share_panel, chunks[1]);
}

fn render_notification<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let Some(note) = &app.notification else {
        f.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    let color = match note.style {
        MessageStyle::Info => Color::White,
        MessageStyle::Success => Color::Green,
        MessageStyle::Error => Color::Red,
    };
    let paragraph = Paragraph::new(note.text.clone())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_help<S: Storage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let finished = app.puzzle.session().and_then(Session::cursor).is_none();
    let help_text = match app.screen {
        Screen::Stats => "Esc: Leave | q: Quit",
        Screen::Game if finished => "Enter: Statistics | Esc: Leave | q: Quit",
        Screen::Game => "↑/↓: Letter | Enter: Confirm | Backspace: Back | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
