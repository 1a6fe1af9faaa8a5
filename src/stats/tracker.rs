//! Lifetime statistics
//!
//! Streak continuity is judged by puzzle index: a win extends the streak when
//! the previous win was the same or the preceding puzzle. Losses break the
//! streak but leave the last solved index alone.

use crate::core::GUESS_LIMIT;
use crate::store::{self, STATS_KEY, StoreError, Storage};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Histogram buckets: index 0 counts losses, 1..=6 wins by guesses used
pub const BUCKETS: usize = GUESS_LIMIT + 1;

/// Failure to record a result
#[derive(Debug, Display, Error)]
pub enum StatsError {
    #[display("cannot record {guesses_used} guesses, the limit is {}", GUESS_LIMIT)]
    InvalidGuessCount { guesses_used: u8 },
    #[display("failed to persist statistics: {source}")]
    Store { source: StoreError },
}

impl From<StoreError> for StatsError {
    fn from(source: StoreError) -> Self {
        Self::Store { source }
    }
}

/// Persisted aggregate statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub current_streak: u32,
    pub max_streak: u32,
    pub last_solved: Option<i64>,
    pub histogram: [u32; BUCKETS],
}

impl StatsRecord {
    /// Fold one completed puzzle into the record; `guesses_used == 0` is a loss
    ///
    /// # Errors
    /// Returns `StatsError::InvalidGuessCount` if `guesses_used` exceeds the
    /// guess limit. The record is not modified.
    pub fn record_result(&mut self, puzzle_index: i64, guesses_used: u8) -> Result<(), StatsError> {
        let bucket = usize::from(guesses_used);
        if bucket > GUESS_LIMIT {
            return Err(StatsError::InvalidGuessCount { guesses_used });
        }

        if guesses_used == 0 {
            self.current_streak = 0;
        } else {
            let continues = self
                .last_solved
                .is_some_and(|last| last >= puzzle_index - 1);
            self.current_streak = if continues { self.current_streak + 1 } else { 1 };
            self.max_streak = self.max_streak.max(self.current_streak);
            self.last_solved = Some(puzzle_index);
        }

        self.histogram[bucket] += 1;
        Ok(())
    }

    /// Streak as of `today`: zero once a puzzle has been skipped
    #[must_use]
    pub fn current_streak(&self, today: i64) -> u32 {
        match self.last_solved {
            Some(last) if last >= today - 1 => self.current_streak,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Number of completed puzzles, won or lost
    #[must_use]
    pub fn total_played(&self) -> u32 {
        self.histogram.iter().sum()
    }

    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.histogram[0]
    }

    /// Rounded percentage of completed puzzles that were won, 100 before any
    /// puzzle is completed
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::stats::StatsRecord;
    ///
    /// let mut record = StatsRecord::default();
    /// assert_eq!(record.win_percent(), 100);
    ///
    /// record.record_result(10, 3).unwrap();
    /// record.record_result(11, 0).unwrap();
    /// record.record_result(12, 4).unwrap();
    /// assert_eq!(record.win_percent(), 67);
    /// ```
    #[must_use]
    pub fn win_percent(&self) -> u32 {
        let played = u64::from(self.total_played());
        if played == 0 {
            return 100;
        }
        let wins = played - u64::from(self.losses());
        // Round half up in integer arithmetic
        ((wins * 200 + played) / (played * 2)) as u32
    }

    /// Histogram buckets, losses first
    #[must_use]
    pub const fn distribution(&self) -> &[u32; BUCKETS] {
        &self.histogram
    }

    /// Snapshot of everything the statistics screen shows
    #[must_use]
    pub fn summary(&self, today: i64) -> StatsSummary {
        StatsSummary {
            played: self.total_played(),
            win_percent: self.win_percent(),
            current_streak: self.current_streak(today),
            max_streak: self.max_streak,
            distribution: self.histogram,
        }
    }
}

/// Display-ready statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSummary {
    pub played: u32,
    pub win_percent: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub distribution: [u32; BUCKETS],
}

/// Owner of the live statistics record, persisted on every change
#[derive(Debug, Clone, Default)]
pub struct StatsTracker {
    record: StatsRecord,
}

impl StatsTracker {
    /// Load the stored record, starting from zero if there is none
    #[instrument(skip(storage))]
    pub fn load(storage: &impl Storage) -> Self {
        let record: StatsRecord = store::load_versioned(storage, STATS_KEY).unwrap_or_default();
        info!(played = record.total_played(), "Loaded statistics");
        Self { record }
    }

    #[must_use]
    pub fn from_record(record: StatsRecord) -> Self {
        Self { record }
    }

    #[must_use]
    pub const fn record(&self) -> &StatsRecord {
        &self.record
    }

    /// Record one completed puzzle and persist it as a single write
    ///
    /// The in-memory record only changes once the write succeeds.
    ///
    /// # Errors
    /// Returns `StatsError::InvalidGuessCount` for an out-of-range guess count
    /// and `StatsError::Store` if the write fails.
    #[instrument(skip(self, storage))]
    pub fn record_result(
        &mut self,
        storage: &mut impl Storage,
        puzzle_index: i64,
        guesses_used: u8,
    ) -> Result<(), StatsError> {
        let mut updated = self.record;
        updated.record_result(puzzle_index, guesses_used)?;
        store::save_versioned(storage, STATS_KEY, &updated)?;
        self.record = updated;

        info!(
            streak = updated.current_streak,
            max_streak = updated.max_streak,
            played = updated.total_played(),
            "Recorded result"
        );
        Ok(())
    }

    #[must_use]
    pub fn summary(&self, today: i64) -> StatsSummary {
        self.record.summary(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn fresh_record() {
        let record = StatsRecord::default();
        assert_eq!(record.total_played(), 0);
        assert_eq!(record.win_percent(), 100);
        assert_eq!(record.current_streak(0), 0);
        assert_eq!(record.last_solved, None);
    }

    #[test]
    fn consecutive_wins_build_a_streak() {
        let mut record = StatsRecord::default();
        record.record_result(10, 3).unwrap();
        record.record_result(11, 4).unwrap();
        record.record_result(12, 2).unwrap();

        assert_eq!(record.current_streak(12), 3);
        assert_eq!(record.max_streak(), 3);
        assert_eq!(record.distribution(), &[0, 0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn loss_resets_streak() {
        let mut record = StatsRecord::default();
        record.record_result(10, 3).unwrap();
        record.record_result(11, 0).unwrap();
        assert_eq!(record.current_streak(11), 0);
        assert_eq!(record.last_solved, Some(10));

        record.record_result(12, 5).unwrap();
        // The loss left last_solved at 10, so 12 does not continue it
        assert_eq!(record.current_streak(12), 1);
        assert_eq!(record.max_streak(), 1);
        assert_eq!(record.losses(), 1);
    }

    #[test]
    fn skipped_day_restarts_streak() {
        let mut record = StatsRecord::default();
        record.record_result(10, 3).unwrap();
        record.record_result(11, 3).unwrap();
        record.record_result(13, 3).unwrap();
        assert_eq!(record.current_streak(13), 1);
        assert_eq!(record.max_streak(), 2);
    }

    #[test]
    fn streak_lapses_when_today_moves_on() {
        let mut record = StatsRecord::default();
        record.record_result(10, 3).unwrap();
        assert_eq!(record.current_streak(10), 1);
        assert_eq!(record.current_streak(11), 1);
        assert_eq!(record.current_streak(12), 0);
    }

    #[test]
    fn first_puzzles_do_not_count_as_continuity() {
        let mut record = StatsRecord::default();
        record.record_result(0, 2).unwrap();
        assert_eq!(record.current_streak(0), 1);

        let mut record = StatsRecord::default();
        record.record_result(1, 2).unwrap();
        assert_eq!(record.current_streak(1), 1);
    }

    #[test]
    fn win_percent_rounds() {
        let mut record = StatsRecord::default();
        record.record_result(1, 0).unwrap();
        for day in 2..=8 {
            record.record_result(day, 0).unwrap();
        }
        record.record_result(9, 1).unwrap();
        // 1 of 9 won
        assert_eq!(record.win_percent(), 11);

        let mut record = StatsRecord::default();
        record.record_result(1, 4).unwrap();
        record.record_result(2, 0).unwrap();
        // 1 of 2 won: exactly half rounds up
        assert_eq!(record.win_percent(), 50);
        record.record_result(3, 0).unwrap();
        assert_eq!(record.win_percent(), 33);
    }

    #[test]
    fn out_of_range_guess_count_is_rejected() {
        let mut record = StatsRecord::default();
        let err = record.record_result(5, 7).unwrap_err();
        assert!(matches!(err, StatsError::InvalidGuessCount { guesses_used: 7 }));
        assert_eq!(record, StatsRecord::default());
    }

    #[test]
    fn tracker_persists_and_reloads() {
        let mut storage = MemoryStore::new();
        let mut tracker = StatsTracker::load(&storage);
        tracker.record_result(&mut storage, 42, 4).unwrap();
        tracker.record_result(&mut storage, 43, 6).unwrap();

        let reloaded = StatsTracker::load(&storage);
        assert_eq!(reloaded.record(), tracker.record());
        assert_eq!(reloaded.summary(43).current_streak, 2);
        assert_eq!(reloaded.summary(43).played, 2);
    }

    #[test]
    fn tracker_loads_fresh_from_empty_or_corrupt_storage() {
        let mut storage = MemoryStore::new();
        assert_eq!(*StatsTracker::load(&storage).record(), StatsRecord::default());

        storage.write(STATS_KEY, b"{not json").unwrap();
        assert_eq!(*StatsTracker::load(&storage).record(), StatsRecord::default());
    }

    #[test]
    fn tracker_rejects_without_writing() {
        let mut storage = MemoryStore::new();
        let mut tracker = StatsTracker::default();
        assert!(tracker.record_result(&mut storage, 1, 9).is_err());
        assert_eq!(storage.read(STATS_KEY).unwrap(), None);
        assert_eq!(tracker.record().total_played(), 0);
    }
}
