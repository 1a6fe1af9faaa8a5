//! Today's puzzle with its dictionary, calendar, persistence and statistics

use super::{ConfirmOutcome, LetterStep, RetreatOutcome, Session, SessionSlot, ShareCode};
use crate::calendar::PuzzleCalendar;
use crate::stats::{StatsError, StatsSummary, StatsTracker};
use crate::store::{StoreError, Storage};
use crate::wordlists::{Dictionary, SolutionTable, TableError};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Failure to persist a puzzle that just finished
#[derive(Debug, Display, Error)]
pub enum FinishError {
    #[display("could not save statistics: {source}")]
    Stats { source: StatsError },
    #[display("could not save the finished game: {source}")]
    Session { source: StoreError },
}

/// Everything the presentation needs to play one day's puzzle
///
/// Input is forwarded to the live session; a finished session's result is
/// written to the statistics exactly once, at the confirm that ends it.
#[derive(Debug)]
pub struct DailyPuzzle<S: Storage> {
    dictionary: Dictionary,
    solutions: SolutionTable,
    calendar: PuzzleCalendar,
    storage: S,
    slot: SessionSlot,
    stats: StatsTracker,
}

impl<S: Storage> DailyPuzzle<S> {
    /// Assemble a puzzle, loading statistics from `storage`
    ///
    /// No session exists until [`restore`](Self::restore) is called.
    pub fn new(
        dictionary: Dictionary,
        solutions: SolutionTable,
        calendar: PuzzleCalendar,
        storage: S,
    ) -> Self {
        let stats = StatsTracker::load(&storage);
        Self {
            dictionary,
            solutions,
            calendar,
            storage,
            slot: SessionSlot::new(),
            stats,
        }
    }

    /// Puzzle index for the calendar's current date
    #[must_use]
    pub fn today(&self) -> i64 {
        self.calendar.puzzle_index_for_now()
    }

    /// Resume or start today's session
    ///
    /// # Errors
    /// Returns `TableError::NoPuzzle` when today is outside the solution table.
    #[instrument(skip(self))]
    pub fn restore(&mut self) -> Result<&Session, TableError> {
        let today = self.today();
        let session = self.slot.restore(&self.storage, today, &self.solutions)?;
        Ok(&*session)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.slot.session()
    }

    pub fn advance_letter(&mut self, step: LetterStep) {
        if let Some(session) = self.slot.session_mut() {
            session.advance_letter(step);
        }
    }

    /// Confirm the active slot, recording the result if the puzzle ends
    ///
    /// # Errors
    /// Returns `FinishError::Stats` if the result cannot be recorded and
    /// `FinishError::Session` if the finished session cannot be saved.
    #[instrument(skip(self))]
    pub fn confirm_slot(&mut self) -> Result<ConfirmOutcome, FinishError> {
        let Some(session) = self.slot.session_mut() else {
            return Ok(ConfirmOutcome::Ignored);
        };

        let outcome = session.confirm_slot(&self.dictionary);
        debug!(?outcome, "Confirmed slot");

        if let ConfirmOutcome::Finished { result, .. } = outcome {
            self.stats
                .record_result(&mut self.storage, result.puzzle_index, result.guesses_used)
                .map_err(|source| FinishError::Stats { source })?;
            self.slot
                .serialize(&mut self.storage)
                .map_err(|source| FinishError::Session { source })?;
        }
        Ok(outcome)
    }

    pub fn retreat(&mut self) -> RetreatOutcome {
        self.slot
            .session_mut()
            .map_or(RetreatOutcome::LeavePuzzle, Session::retreat)
    }

    /// Persist the live session
    ///
    /// # Errors
    /// Returns `StoreError` if the write fails.
    #[instrument(skip(self))]
    pub fn serialize(&mut self) -> Result<(), StoreError> {
        self.slot.serialize(&mut self.storage)
    }

    /// Statistics as of today
    #[must_use]
    pub fn stats(&self) -> StatsSummary {
        self.stats.summary(self.today())
    }

    /// Share token and grid for the live session
    #[must_use]
    pub fn share(&self) -> Option<ShareCode> {
        self.session().map(ShareCode::from_session)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage, dropping the live session unsaved
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{FixedClock, default_epoch};
    use crate::store::{MemoryStore, SESSION_KEY};
    use chrono::DateTime;
    use std::io;

    /// Memory storage whose session writes always fail
    #[derive(Debug, Default)]
    struct SessionWritesFail(MemoryStore);

    impl Storage for SessionWritesFail {
        fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            self.0.read(key)
        }

        fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
            if key == SESSION_KEY {
                return Err(StoreError::Io {
                    key: key.to_string(),
                    source: io::Error::other("disk full"),
                });
            }
            self.0.write(key, bytes)
        }
    }

    fn puzzle<S: Storage>(storage: S) -> DailyPuzzle<S> {
        // Puzzle 0, secret "cigar"
        let now = DateTime::parse_from_rfc3339("2021-06-19T08:00:00+00:00").unwrap();
        let mut puzzle = DailyPuzzle::new(
            Dictionary::bundled().unwrap(),
            SolutionTable::bundled().unwrap(),
            PuzzleCalendar::new(default_epoch(), Box::new(FixedClock(now))),
            storage,
        );
        puzzle.restore().unwrap();
        puzzle
    }

    fn play<S: Storage>(
        puzzle: &mut DailyPuzzle<S>,
        text: &str,
    ) -> Result<ConfirmOutcome, FinishError> {
        let mut outcome = Ok(ConfirmOutcome::Ignored);
        for &letter in text.as_bytes() {
            for _ in 0..=(letter - b'a') {
                puzzle.advance_letter(LetterStep::Next);
            }
            outcome = puzzle.confirm_slot();
        }
        outcome
    }

    #[test]
    fn finishing_records_stats_and_saves_session() {
        let mut puzzle = puzzle(MemoryStore::new());
        let outcome = play(&mut puzzle, "cigar").unwrap();
        assert!(matches!(outcome, ConfirmOutcome::Finished { .. }));
        assert_eq!(puzzle.stats().played, 1);
        assert!(puzzle.storage().read(SESSION_KEY).unwrap().is_some());
    }

    #[test]
    fn session_save_failure_is_not_a_stats_failure() {
        let mut puzzle = puzzle(SessionWritesFail::default());
        let err = play(&mut puzzle, "cigar").unwrap_err();
        assert!(matches!(err, FinishError::Session { .. }));
        assert!(err.to_string().starts_with("could not save the finished game"));

        // The result itself was recorded
        assert_eq!(puzzle.stats().played, 1);
        assert_eq!(puzzle.stats().current_streak, 1);
    }
}
