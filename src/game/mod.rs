//! Playing a day's puzzle
//!
//! [`Session`] is the state machine for one attempt, [`SessionSlot`] owns and
//! persists it, and [`DailyPuzzle`] wires it to the calendar, dictionary and
//! statistics.

pub mod daily;
pub mod messages;
pub mod session;
pub mod share;
pub mod slot;

pub use daily::{DailyPuzzle, FinishError};
pub use session::{
    ConfirmOutcome, GameResult, GameStatus, GuessRow, LetterStep, RetreatOutcome, Session,
    SessionError, SessionRecord,
};
pub use share::ShareCode;
pub use slot::SessionSlot;
