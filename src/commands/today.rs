//! Today's puzzle number and progress

use crate::core::GUESS_LIMIT;
use crate::game::{DailyPuzzle, GameStatus};
use crate::store::Storage;
use crate::wordlists::TableError;
use chrono::{Days, NaiveDate};

/// Snapshot of today's session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayReport {
    pub puzzle_index: i64,
    pub date: Option<NaiveDate>,
    pub status: GameStatus,
    pub guesses_used: usize,
    pub guesses_left: usize,
    /// Terminal message, once the puzzle is over
    pub message: Option<String>,
}

/// Resume today's session and describe it
///
/// # Errors
/// Returns `TableError::NoPuzzle` when today is outside the solution table.
pub fn today_report<S: Storage>(
    puzzle: &mut DailyPuzzle<S>,
    epoch: NaiveDate,
) -> Result<TodayReport, TableError> {
    let session = puzzle.restore()?;
    let guesses_used = session.guesses_used();

    Ok(TodayReport {
        puzzle_index: session.puzzle_index(),
        date: u64::try_from(session.puzzle_index())
            .ok()
            .and_then(|days| epoch.checked_add_days(Days::new(days))),
        status: session.status(),
        guesses_used,
        guesses_left: GUESS_LIMIT - guesses_used,
        message: session.message(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{FixedClock, PuzzleCalendar, default_epoch};
    use crate::store::MemoryStore;
    use crate::wordlists::{Dictionary, SolutionTable};
    use chrono::DateTime;

    #[test]
    fn fresh_day_report() {
        let now = DateTime::parse_from_rfc3339("2021-06-21T09:00:00-04:00").unwrap();
        let mut puzzle = DailyPuzzle::new(
            Dictionary::bundled().unwrap(),
            SolutionTable::bundled().unwrap(),
            PuzzleCalendar::new(default_epoch(), Box::new(FixedClock(now))),
            MemoryStore::new(),
        );

        let report = today_report(&mut puzzle, default_epoch()).unwrap();
        assert_eq!(report.puzzle_index, 2);
        assert_eq!(report.date, NaiveDate::from_ymd_opt(2021, 6, 21));
        assert_eq!(report.status, GameStatus::Playing);
        assert_eq!(report.guesses_left, GUESS_LIMIT);
        assert_eq!(report.message, None);
    }
}
