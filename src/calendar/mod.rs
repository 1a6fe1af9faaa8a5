//! Puzzle-day calculation
//!
//! Puzzle 0 is the epoch date at local midnight. The index for an instant is
//! the number of whole local calendar days since then: the UTC instant is
//! shifted by the signed local offset before the floor division, so the day
//! rolls over at the player's midnight and not at UTC midnight.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime};
use std::fmt;

const SECONDS_PER_DAY: i64 = 86_400;

/// The date of puzzle 0
///
/// # Panics
/// Will not panic - the date is a valid calendar date.
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).expect("epoch is a valid date")
}

/// Source of the current wall-clock time with its local offset
pub trait Clock: fmt::Debug {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Host clock in the host's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Maps wall-clock time to puzzle indices
#[derive(Debug)]
pub struct PuzzleCalendar {
    epoch: NaiveDate,
    clock: Box<dyn Clock>,
}

impl PuzzleCalendar {
    #[must_use]
    pub fn new(epoch: NaiveDate, clock: Box<dyn Clock>) -> Self {
        Self { epoch, clock }
    }

    /// Calendar on the host clock with the standard epoch
    #[must_use]
    pub fn system() -> Self {
        Self::new(default_epoch(), Box::new(SystemClock))
    }

    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Puzzle index for the clock's current time
    #[must_use]
    pub fn puzzle_index_for_now(&self) -> i64 {
        self.index_at(self.clock.now())
    }

    /// Puzzle index for a specific instant, using that instant's offset as
    /// the local time zone
    ///
    /// # Examples
    /// ```
    /// use chrono::DateTime;
    /// use daily_wordle::calendar::PuzzleCalendar;
    ///
    /// let calendar = PuzzleCalendar::system();
    /// let first = DateTime::parse_from_rfc3339("2021-06-19T23:59:59+09:00").unwrap();
    /// let second = DateTime::parse_from_rfc3339("2021-06-20T00:00:00+09:00").unwrap();
    ///
    /// assert_eq!(calendar.index_at(first), 0);
    /// assert_eq!(calendar.index_at(second), 1);
    /// ```
    #[must_use]
    pub fn index_at(&self, now: DateTime<FixedOffset>) -> i64 {
        let offset = i64::from(now.offset().local_minus_utc());
        let local_seconds = now.timestamp() + offset;
        let epoch_seconds = self.epoch.and_time(NaiveTime::MIN).and_utc().timestamp();

        (local_seconds - epoch_seconds).div_euclid(SECONDS_PER_DAY)
    }
}
