//! End-to-end tests for a day's puzzle: play, persist, resume and record.

use chrono::{DateTime, FixedOffset};
use daily_wordle::calendar::{FixedClock, PuzzleCalendar, default_epoch};
use daily_wordle::game::{ConfirmOutcome, DailyPuzzle, GameResult, GameStatus, LetterStep};
use daily_wordle::store::{MemoryStore, SESSION_KEY, Storage};
use daily_wordle::wordlists::{Dictionary, SolutionTable};

/// Local 08:00 on the given date in UTC-5
fn morning(date: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(&format!("{date}T08:00:00-05:00")).expect("valid timestamp")
}

fn open(storage: MemoryStore, date: &str) -> DailyPuzzle<MemoryStore> {
    let mut puzzle = DailyPuzzle::new(
        Dictionary::bundled().expect("bundled dictionary"),
        SolutionTable::bundled().expect("bundled solutions"),
        PuzzleCalendar::new(default_epoch(), Box::new(FixedClock(morning(date)))),
        storage,
    );
    puzzle.restore().expect("puzzle for date");
    puzzle
}

/// Enter a whole word from an empty row and return the final outcome
fn guess(puzzle: &mut DailyPuzzle<MemoryStore>, word: &str) -> ConfirmOutcome {
    let mut outcome = ConfirmOutcome::Ignored;
    for &letter in word.as_bytes() {
        for _ in 0..=(letter - b'a') {
            puzzle.advance_letter(LetterStep::Next);
        }
        outcome = puzzle.confirm_slot().expect("confirm");
    }
    outcome
}

#[test]
fn test_first_day_secret() {
    let puzzle = open(MemoryStore::new(), "2021-06-19");
    let session = puzzle.session().expect("live session");
    assert_eq!(session.puzzle_index(), 0);
    assert_eq!(session.secret().as_str(), "cigar");
}

#[test]
fn test_win_is_recorded_once() {
    let mut puzzle = open(MemoryStore::new(), "2021-06-19");

    assert!(matches!(guess(&mut puzzle, "rebut"), ConfirmOutcome::Scored(_)));
    let outcome = guess(&mut puzzle, "cigar");
    assert!(matches!(
        outcome,
        ConfirmOutcome::Finished {
            result: GameResult {
                puzzle_index: 0,
                guesses_used: 2
            },
            ..
        }
    ));

    // Further input is ignored and does not touch the statistics
    assert_eq!(puzzle.confirm_slot().expect("confirm"), ConfirmOutcome::Ignored);
    let stats = puzzle.stats();
    assert_eq!(stats.played, 1);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.distribution[2], 1);
}

#[test]
fn test_finished_session_survives_restart() {
    let mut puzzle = open(MemoryStore::new(), "2021-06-19");
    guess(&mut puzzle, "cigar");
    puzzle.serialize().expect("serialize");

    let mut puzzle = open(puzzle.into_storage(), "2021-06-19");
    let session = puzzle.session().expect("live session");
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.message().as_deref(), Some("Genius"));

    assert_eq!(puzzle.confirm_slot().expect("confirm"), ConfirmOutcome::Ignored);
    assert_eq!(puzzle.stats().played, 1);
}

#[test]
fn test_partial_session_resumes_same_day() {
    let mut puzzle = open(MemoryStore::new(), "2021-06-20");
    guess(&mut puzzle, "cigar");
    puzzle.advance_letter(LetterStep::Next);
    puzzle.confirm_slot().expect("confirm");
    puzzle.serialize().expect("serialize");

    let puzzle = open(puzzle.into_storage(), "2021-06-20");
    let session = puzzle.session().expect("live session");
    assert_eq!(session.puzzle_index(), 1);
    assert_eq!(session.cursor(), Some((1, 1)));
    assert_eq!(session.guesses_used(), 1);
    assert_eq!(session.rows()[1].slots()[0], Some(b'a'));
    assert_eq!(session.letter_status(b'r'), session.rows()[0].statuses()[4]);
}

#[test]
fn test_stale_session_is_replaced_next_day() {
    let mut puzzle = open(MemoryStore::new(), "2021-06-19");
    guess(&mut puzzle, "rebut");
    puzzle.serialize().expect("serialize");

    let puzzle = open(puzzle.into_storage(), "2021-06-20");
    let session = puzzle.session().expect("live session");
    assert_eq!(session.puzzle_index(), 1);
    assert_eq!(session.secret().as_str(), "rebut");
    assert_eq!(session.guesses_used(), 0);
}

#[test]
fn test_streak_across_days_and_loss() {
    let mut puzzle = open(MemoryStore::new(), "2021-06-19");
    guess(&mut puzzle, "cigar");

    let mut puzzle = open(puzzle.into_storage(), "2021-06-20");
    guess(&mut puzzle, "rebut");
    assert_eq!(puzzle.stats().current_streak, 2);

    let mut puzzle = open(puzzle.into_storage(), "2021-06-21");
    for _ in 0..5 {
        assert!(matches!(guess(&mut puzzle, "cigar"), ConfirmOutcome::Scored(_)));
    }
    let outcome = guess(&mut puzzle, "cigar");
    assert!(matches!(
        outcome,
        ConfirmOutcome::Finished {
            result: GameResult { guesses_used: 0, .. },
            ..
        }
    ));

    let stats = puzzle.stats();
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.max_streak, 2);
    assert_eq!(stats.played, 3);
    assert_eq!(stats.win_percent, 67);
    assert_eq!(stats.distribution[0], 1);
}

#[test]
fn test_corrupt_session_starts_fresh() {
    let mut storage = MemoryStore::new();
    storage
        .write(SESSION_KEY, b"{\"version\":1,\"record\":\"garbage\"}")
        .expect("write");

    let puzzle = open(storage, "2021-06-19");
    let session = puzzle.session().expect("live session");
    assert_eq!(session.status(), GameStatus::Playing);
    assert_eq!(session.cursor(), Some((0, 0)));
}

#[test]
fn test_share_after_win() {
    let mut puzzle = open(MemoryStore::new(), "2021-06-19");
    guess(&mut puzzle, "cigar");
    let share = puzzle.share().expect("share");
    assert_eq!(share.token, "AAA2P");
    assert_eq!(share.grid, "Wordle 0 1/6\n\n🟩🟩🟩🟩🟩");
}
