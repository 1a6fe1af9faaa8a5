//! TUI application state and logic

use crate::game::{ConfirmOutcome, DailyPuzzle, GameStatus, LetterStep, RetreatOutcome, messages};
use crate::store::{StoreError, Storage};
use crate::wordlists::TableError;
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
use std::time::{Duration, Instant};
use tracing::{error, info};

/// How long input stays locked after a row is scored
pub const REVEAL_DELAY: Duration = Duration::from_millis(1500);

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Banner shown over the board until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub style: MessageStyle,
}

/// Application state
#[derive(Debug)]
pub struct App<S: Storage> {
    pub puzzle: DailyPuzzle<S>,
    pub screen: Screen,
    pub notification: Option<Notification>,
    /// Input is ignored until this instant while a scored row is revealed
    pub locked_until: Option<Instant>,
    pub should_quit: bool,
}

impl<S: Storage> App<S> {
    /// Restore today's session and start on the board
    ///
    /// # Errors
    /// Returns `TableError::NoPuzzle` when today is outside the solution table.
    pub fn new(mut puzzle: DailyPuzzle<S>) -> Result<Self, TableError> {
        let session = puzzle.restore()?;
        let notification = finished_notification(session.status(), session.message());

        Ok(Self {
            puzzle,
            screen: Screen::Game,
            notification,
            locked_until: None,
            should_quit: false,
        })
    }

    #[must_use]
    pub fn is_locked(&self, now: Instant) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Release the reveal lock once it has expired
    pub fn tick(&mut self, now: Instant) {
        if self.locked_until.is_none() || self.is_locked(now) {
            return;
        }
        self.locked_until = None;

        if let Some(session) = self.puzzle.session() {
            self.notification = finished_notification(session.status(), session.message());
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        self.tick(now);
        if self.is_locked(now) {
            return;
        }

        match self.screen {
            Screen::Stats => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) {
                    self.should_quit = true;
                }
            }
            Screen::Game => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.cycle(LetterStep::Next),
                KeyCode::Down | KeyCode::Char('j') => self.cycle(LetterStep::Previous),
                KeyCode::Enter | KeyCode::Char(' ') => self.confirm(now),
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => self.back(),
                _ => {}
            },
        }
    }

    fn is_finished(&self) -> bool {
        self.puzzle
            .session()
            .is_some_and(|s| s.status() != GameStatus::Playing)
    }

    fn cycle(&mut self, step: LetterStep) {
        if self.notification.take().is_some() {
            return;
        }
        self.puzzle.advance_letter(step);
    }

    fn confirm(&mut self, now: Instant) {
        if self.is_finished() {
            self.screen = Screen::Stats;
            return;
        }
        if self.notification.take().is_some() {
            return;
        }

        match self.puzzle.confirm_slot() {
            Ok(ConfirmOutcome::InvalidWord(word)) => {
                self.notify(messages::invalid_word(&word), MessageStyle::Error);
            }
            Ok(ConfirmOutcome::NothingToConfirm) => {
                self.notify("Pick a letter with ↑/↓ first", MessageStyle::Info);
            }
            Ok(ConfirmOutcome::Scored(_) | ConfirmOutcome::Finished { .. }) => {
                self.locked_until = Some(now + REVEAL_DELAY);
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "Failed to persist finished puzzle");
                self.notify(e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn back(&mut self) {
        if self.is_finished() {
            self.should_quit = true;
            return;
        }
        if self.notification.take().is_some() {
            return;
        }
        if self.puzzle.retreat() == RetreatOutcome::LeavePuzzle {
            self.should_quit = true;
        }
    }

    /// Persist the session so it can be resumed
    ///
    /// # Errors
    /// Returns `StoreError` if the write fails.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.puzzle.serialize()?;
        info!("Saved session");
        Ok(())
    }

    pub fn notify(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.notification = Some(Notification {
            text: text.into(),
            style,
        });
    }
}

fn finished_notification(status: GameStatus, message: Option<String>) -> Option<Notification> {
    let style = match status {
        GameStatus::Playing => return None,
        GameStatus::Won => MessageStyle::Success,
        GameStatus::Lost => MessageStyle::Error,
    };
    message.map(|text| Notification { text, style })
}

/// Run the TUI application
///
/// The session is saved when the loop ends, whether or not it ended cleanly.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the session cannot be saved.
pub fn run_tui<S: Storage>(mut app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Save before touching the terminal so a failed restore keeps progress
    let saved = app.save();

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

    saved?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Storage>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        let now = Instant::now();
        app.tick(now);

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
