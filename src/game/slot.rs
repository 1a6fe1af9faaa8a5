//! Owner of the live session

use super::{Session, SessionRecord};
use crate::store::{self, SESSION_KEY, StoreError, Storage};
use crate::wordlists::{SolutionTable, TableError};
use tracing::{info, instrument, warn};

/// Holds at most one live session and rehydrates it on first use
#[derive(Debug, Default)]
pub struct SessionSlot {
    session: Option<Session>,
}

impl SessionSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring today's session to life
    ///
    /// The stored session is used only when it belongs to `today` and passes
    /// validation; otherwise a fresh one is started. Once a session is held,
    /// further calls return it untouched.
    ///
    /// # Errors
    /// Returns `TableError::NoPuzzle` if the solution table has no word for
    /// `today`.
    #[instrument(skip(self, storage, solutions))]
    pub fn restore(
        &mut self,
        storage: &impl Storage,
        today: i64,
        solutions: &SolutionTable,
    ) -> Result<&mut Session, TableError> {
        let session = match self.session.take() {
            Some(session) => session,
            None => Self::load(storage, today, solutions)?,
        };
        Ok(self.session.insert(session))
    }

    fn load(
        storage: &impl Storage,
        today: i64,
        solutions: &SolutionTable,
    ) -> Result<Session, TableError> {
        let secret = solutions.word_for(today)?;

        match store::load_versioned::<SessionRecord>(storage, SESSION_KEY) {
            Some(record) if record.puzzle_index == today => {
                match Session::from_record(&record, secret) {
                    Ok(session) => {
                        info!(puzzle = today, status = ?session.status(), "Restored session");
                        return Ok(session);
                    }
                    Err(e) => warn!(puzzle = today, error = %e, "Discarding invalid session"),
                }
            }
            Some(record) => {
                info!(stored = record.puzzle_index, puzzle = today, "Discarding stale session");
            }
            None => {}
        }

        info!(puzzle = today, "Starting new session");
        Ok(Session::new(today, secret))
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Persist the live session, if any
    ///
    /// # Errors
    /// Returns `StoreError` if the write fails.
    pub fn serialize(&self, storage: &mut impl Storage) -> Result<(), StoreError> {
        match &self.session {
            Some(session) => store::save_versioned(storage, SESSION_KEY, &session.to_record()),
            None => Ok(()),
        }
    }
}
