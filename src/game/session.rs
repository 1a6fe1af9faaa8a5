//! Single-puzzle session state machine
//!
//! A session starts `Playing` and ends `Won` or `Lost`. While playing there
//! is exactly one active row; every row above it is confirmed and scored.
//! Finished sessions reject all further edits.

use super::messages;
use crate::core::{ALPHABET_SIZE, GUESS_LIMIT, LetterStatus, Score, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where a session stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Direction for cycling the active letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStep {
    Next,
    Previous,
}

/// Terminal result handed to the statistics tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub puzzle_index: i64,
    /// Guesses taken to win, 0 for a loss
    pub guesses_used: u8,
}

impl GameResult {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.guesses_used > 0
    }
}

/// What a confirm press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The session is finished
    Ignored,
    /// Empty slot on the first row
    NothingToConfirm,
    /// Empty slot filled from the row above
    CarriedDown { letter: u8 },
    /// Cursor moved one slot right
    Advanced,
    /// Completed row is not in the dictionary; nothing changed
    InvalidWord(Word),
    /// Row scored and the next row is active
    Scored(Score),
    /// Row scored and the session ended
    Finished { score: Score, result: GameResult },
}

/// What a back press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    MovedBack,
    /// Nothing left to undo; the presentation should leave the puzzle
    LeavePuzzle,
}

/// One row of guess slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuessRow {
    slots: [Option<u8>; WORD_LENGTH],
    statuses: [LetterStatus; WORD_LENGTH],
    confirmed: bool,
}

impl GuessRow {
    #[must_use]
    pub const fn slots(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.slots
    }

    /// Per-slot statuses, all `Neutral` until the row is confirmed
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.statuses
    }

    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// The row as a word, if every slot is filled
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let mut letters = [0; WORD_LENGTH];
        for (dst, slot) in letters.iter_mut().zip(self.slots) {
            *dst = slot?;
        }
        Word::from_bytes(&letters).ok()
    }

    fn filled_prefix(&self) -> usize {
        self.slots.iter().take_while(|s| s.is_some()).count()
    }

    fn is_blank(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    fn apply(&mut self, score: &Score) {
        self.statuses = *score.statuses();
        self.confirmed = true;
    }
}

/// An attempt at one day's puzzle
#[derive(Debug, Clone)]
pub struct Session {
    puzzle_index: i64,
    secret: Word,
    rows: [GuessRow; GUESS_LIMIT],
    row: usize,
    column: usize,
    alphabet: [LetterStatus; ALPHABET_SIZE],
    status: GameStatus,
}

impl Session {
    /// Fresh session with the cursor at the first slot
    #[must_use]
    pub fn new(puzzle_index: i64, secret: Word) -> Self {
        Self {
            puzzle_index,
            secret,
            rows: [GuessRow::default(); GUESS_LIMIT],
            row: 0,
            column: 0,
            alphabet: [LetterStatus::Neutral; ALPHABET_SIZE],
            status: GameStatus::Playing,
        }
    }

    /// Cycle the active slot through the alphabet, wrapping at either end
    ///
    /// An empty slot becomes `a` going forward and `z` going back. Does
    /// nothing once the session is finished.
    pub fn advance_letter(&mut self, step: LetterStep) {
        if self.status != GameStatus::Playing {
            return;
        }

        let slot = &mut self.rows[self.row].slots[self.column];
        *slot = Some(match (*slot, step) {
            (None, LetterStep::Next) | (Some(b'z'), LetterStep::Next) => b'a',
            (None, LetterStep::Previous) | (Some(b'a'), LetterStep::Previous) => b'z',
            (Some(letter), LetterStep::Next) => letter + 1,
            (Some(letter), LetterStep::Previous) => letter - 1,
        });
    }

    /// Confirm the active slot, scoring the row when it is complete
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    /// use daily_wordle::game::{ConfirmOutcome, LetterStep, Session};
    /// use daily_wordle::wordlists::Dictionary;
    ///
    /// let secret = Word::new("abbey").unwrap();
    /// let dictionary = Dictionary::from_words([secret]);
    /// let mut session = Session::new(0, secret);
    ///
    /// assert_eq!(session.confirm_slot(&dictionary), ConfirmOutcome::NothingToConfirm);
    ///
    /// session.advance_letter(LetterStep::Next);
    /// assert_eq!(session.confirm_slot(&dictionary), ConfirmOutcome::Advanced);
    /// assert_eq!(session.cursor(), Some((0, 1)));
    /// ```
    pub fn confirm_slot(&mut self, dictionary: &Dictionary) -> ConfirmOutcome {
        if self.status != GameStatus::Playing {
            return ConfirmOutcome::Ignored;
        }

        if self.rows[self.row].slots[self.column].is_none() {
            return self.carry_down();
        }

        if self.column < WORD_LENGTH - 1 {
            self.column += 1;
            return ConfirmOutcome::Advanced;
        }

        let Some(guess) = self.rows[self.row].word() else {
            return ConfirmOutcome::NothingToConfirm;
        };
        // The secret is always a legal guess, listed or not
        if guess != self.secret && !dictionary.is_valid(&guess) {
            debug!(guess = %guess, "Rejected guess outside dictionary");
            return ConfirmOutcome::InvalidWord(guess);
        }

        self.submit(guess)
    }

    /// Step the cursor left, or ask to leave when there is nowhere to go
    pub fn retreat(&mut self) -> RetreatOutcome {
        if self.status == GameStatus::Playing && self.column > 0 {
            self.column -= 1;
            RetreatOutcome::MovedBack
        } else {
            RetreatOutcome::LeavePuzzle
        }
    }

    fn carry_down(&mut self) -> ConfirmOutcome {
        if self.row == 0 {
            return ConfirmOutcome::NothingToConfirm;
        }
        let Some(letter) = self.rows[self.row - 1].slots[self.column] else {
            return ConfirmOutcome::NothingToConfirm;
        };
        self.rows[self.row].slots[self.column] = Some(letter);
        ConfirmOutcome::CarriedDown { letter }
    }

    fn submit(&mut self, guess: Word) -> ConfirmOutcome {
        let score = Score::calculate(&guess, &self.secret);
        self.rows[self.row].apply(&score);
        self.raise_alphabet(&guess, &score);

        let guesses_used = self.row + 1;
        debug!(guess = %guess, row = self.row, exact = score.is_exact(), "Scored guess");

        if score.is_exact() {
            self.status = GameStatus::Won;
        } else if guesses_used == GUESS_LIMIT {
            self.status = GameStatus::Lost;
        } else {
            self.row += 1;
            self.column = 0;
            return ConfirmOutcome::Scored(score);
        }

        info!(puzzle = self.puzzle_index, status = ?self.status, guesses_used, "Puzzle finished");
        match self.result() {
            Some(result) => ConfirmOutcome::Finished { score, result },
            None => ConfirmOutcome::Scored(score),
        }
    }

    fn raise_alphabet(&mut self, guess: &Word, score: &Score) {
        for (letter, &status) in guess.as_bytes().iter().zip(score.statuses()) {
            let entry = &mut self.alphabet[usize::from(letter - b'a')];
            *entry = (*entry).max(status);
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn puzzle_index(&self) -> i64 {
        self.puzzle_index
    }

    /// The secret word, for revealing after a loss
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Active (row, column), or `None` once the session is finished
    #[must_use]
    pub const fn cursor(&self) -> Option<(usize, usize)> {
        match self.status {
            GameStatus::Playing => Some((self.row, self.column)),
            GameStatus::Won | GameStatus::Lost => None,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> &[GuessRow; GUESS_LIMIT] {
        &self.rows
    }

    /// Confirmed rows, oldest first
    pub fn scored_rows(&self) -> impl Iterator<Item = &GuessRow> {
        self.rows.iter().take_while(|row| row.confirmed)
    }

    /// Number of confirmed guesses
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.scored_rows().count()
    }

    /// Best status seen for `letter` (a-z) across all scored guesses
    #[must_use]
    pub fn letter_status(&self, letter: u8) -> LetterStatus {
        letter
            .checked_sub(b'a')
            .and_then(|i| self.alphabet.get(usize::from(i)))
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn alphabet(&self) -> &[LetterStatus; ALPHABET_SIZE] {
        &self.alphabet
    }

    /// Terminal result, once the session has one
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let guesses_used = match self.status {
            GameStatus::Playing => return None,
            GameStatus::Won => (self.row + 1) as u8,
            GameStatus::Lost => 0,
        };
        Some(GameResult {
            puzzle_index: self.puzzle_index,
            guesses_used,
        })
    }

    /// Message to show once the session has ended
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Won => Some(messages::victory((self.row + 1) as u8).to_string()),
            GameStatus::Lost => Some(messages::loss(&self.secret)),
        }
    }

    /// Snapshot for persistence
    #[must_use]
    pub fn to_record(&self) -> SessionRecord {
        let mut guesses = [[0; WORD_LENGTH]; GUESS_LIMIT];
        for (dst, row) in guesses.iter_mut().zip(&self.rows) {
            for (byte, slot) in dst.iter_mut().zip(row.slots) {
                *byte = slot.unwrap_or(0);
            }
        }
        SessionRecord {
            puzzle_index: self.puzzle_index,
            row: self.row as u8,
            column: self.column as u8,
            status: self.status,
            guesses,
        }
    }

    /// Rebuild a session from a stored snapshot
    ///
    /// Statuses and the keyboard legend are recomputed by rescoring the
    /// confirmed rows, so a snapshot can never disagree with the scorer.
    ///
    /// # Errors
    /// Returns `SessionError` if the snapshot could not have been produced by
    /// playing the puzzle for `secret`.
    pub fn from_record(record: &SessionRecord, secret: Word) -> Result<Self, SessionError> {
        let row = usize::from(record.row);
        let column = usize::from(record.column);
        if row >= GUESS_LIMIT || column >= WORD_LENGTH {
            return Err(SessionError::InvalidCursor {
                row: record.row,
                column: record.column,
            });
        }

        let mut session = Self::new(record.puzzle_index, secret);
        for (r, (dst, src)) in session.rows.iter_mut().zip(&record.guesses).enumerate() {
            for (c, (slot, &byte)) in dst.slots.iter_mut().zip(src).enumerate() {
                *slot = match byte {
                    0 => None,
                    b'a'..=b'z' => Some(byte),
                    _ => return Err(SessionError::InvalidLetter { row: r, column: c }),
                };
            }
        }

        let confirmed = match record.status {
            GameStatus::Playing => row,
            GameStatus::Won | GameStatus::Lost => row + 1,
        };
        if record.status == GameStatus::Lost && row != GUESS_LIMIT - 1 {
            return Err(SessionError::StatusMismatch {
                status: record.status,
            });
        }

        for r in 0..confirmed {
            let guess = session.rows[r]
                .word()
                .ok_or(SessionError::IncompleteRow { row: r })?;
            let score = Score::calculate(&guess, &secret);
            let is_last = r + 1 == confirmed;
            let expect_exact = is_last && record.status == GameStatus::Won;
            if score.is_exact() != expect_exact {
                return Err(SessionError::StatusMismatch {
                    status: record.status,
                });
            }
            session.rows[r].apply(&score);
            session.raise_alphabet(&guess, &score);
        }

        if record.status == GameStatus::Playing {
            let active = &session.rows[row];
            let filled = active.filled_prefix();
            if column > filled || active.slots[filled..].iter().any(Option::is_some) {
                return Err(SessionError::IncompleteRow { row });
            }
        }

        if let Some(r) = (confirmed.max(row + 1)..GUESS_LIMIT).find(|&r| !session.rows[r].is_blank()) {
            return Err(SessionError::UnexpectedLetters { row: r });
        }

        session.row = row;
        session.column = column;
        session.status = record.status;
        Ok(session)
    }
}

/// Persisted form of a session
///
/// Letters are stored per slot with 0 marking an empty slot. Statuses are not
/// stored; they are rescored on restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub puzzle_index: i64,
    pub row: u8,
    pub column: u8,
    pub status: GameStatus,
    pub guesses: [[u8; WORD_LENGTH]; GUESS_LIMIT],
}

/// A stored session that could not have come from real play
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    #[display("cursor ({row}, {column}) is outside the board")]
    InvalidCursor { row: u8, column: u8 },
    #[display("slot ({row}, {column}) holds a non-letter")]
    InvalidLetter { row: usize, column: usize },
    #[display("row {row} is not filled in order")]
    IncompleteRow { row: usize },
    #[display("row {row} has letters past the active row")]
    UnexpectedLetters { row: usize },
    #[display("stored status {:?} does not match the guesses", status)]
    StatusMismatch { status: GameStatus },
}
