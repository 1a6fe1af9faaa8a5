//! Share token and emoji grid for today's session

use crate::game::{DailyPuzzle, GameStatus, ShareCode};
use crate::store::Storage;
use crate::wordlists::TableError;

/// Share output plus whether the puzzle is finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareReport {
    pub share: ShareCode,
    pub status: GameStatus,
}

/// Resume today's session and build its share code
///
/// # Errors
/// Returns `TableError::NoPuzzle` when today is outside the solution table.
pub fn share_today<S: Storage>(puzzle: &mut DailyPuzzle<S>) -> Result<ShareReport, TableError> {
    let session = puzzle.restore()?;
    Ok(ShareReport {
        share: ShareCode::from_session(session),
        status: session.status(),
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
    fn untouched_session_has_header_only() {
        let now = DateTime::parse_from_rfc3339("2021-06-19T12:00:00+00:00").unwrap();
        let mut puzzle = DailyPuzzle::new(
            Dictionary::bundled().unwrap(),
            SolutionTable::bundled().unwrap(),
            PuzzleCalendar::new(default_epoch(), Box::new(FixedClock(now))),
            MemoryStore::new(),
        );

        let report = share_today(&mut puzzle).unwrap();
        assert_eq!(report.status, GameStatus::Playing);
        assert_eq!(report.share.token, "AAA");
        assert_eq!(report.share.url(), "HTTPS://WORD.KTBY.IO/AAA");
        assert_eq!(report.share.grid, "Wordle 0 0/6\n");
    }
}
