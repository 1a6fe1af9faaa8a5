//! Shareable summaries of a session
//!
//! The token uses only QR alphanumeric characters: three base-36 digits of the
//! puzzle index followed by two per scored row. Each row packs its five
//! statuses two bits apiece, first letter lowest.

use super::{GameStatus, Session};
use crate::core::{GUESS_LIMIT, LetterStatus, WORD_LENGTH};
use tracing::warn;

/// Prefix of the share link; upper case keeps the whole URL QR alphanumeric
pub const SHARE_URL_BASE: &str = "HTTPS://WORD.KTBY.IO/";

const DIGITS: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const BASE: u32 = 36;

/// Token and emoji grid for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCode {
    pub token: String,
    pub grid: String,
}

impl ShareCode {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let rows: Vec<&[LetterStatus; WORD_LENGTH]> =
            session.scored_rows().map(|row| row.statuses()).collect();

        let outcome = match session.status() {
            GameStatus::Lost => "X".to_string(),
            GameStatus::Won | GameStatus::Playing => rows.len().to_string(),
        };
        let mut grid = format!("Wordle {} {}/{}\n", session.puzzle_index(), outcome, GUESS_LIMIT);
        for statuses in &rows {
            grid.push('\n');
            grid.extend(statuses.iter().map(|s| s.emoji()));
        }

        Self {
            token: token(session.puzzle_index(), rows.iter().copied()),
            grid,
        }
    }

    /// Share link carrying the token
    #[must_use]
    pub fn url(&self) -> String {
        format!("{SHARE_URL_BASE}{}", self.token)
    }
}

/// Encode a puzzle index and its scored rows
///
/// Encoding stops at the first row whose leading status is unscored.
///
/// # Examples
/// ```
/// use daily_wordle::core::LetterStatus;
/// use daily_wordle::game::share::token;
///
/// let solved = [LetterStatus::Correct; 5];
/// assert_eq!(token(1944, [&solved]), "BSA2P");
/// ```
pub fn token<'a>(
    puzzle_index: i64,
    rows: impl IntoIterator<Item = &'a [LetterStatus; WORD_LENGTH]>,
) -> String {
    let mut out = String::with_capacity(3 + 2 * GUESS_LIMIT);
    match u32::try_from(puzzle_index) {
        Ok(index) => push_digits(&mut out, index, 3),
        Err(_) => push_digits(&mut out, u32::MAX, 3),
    }

    for statuses in rows.into_iter().take(GUESS_LIMIT) {
        if !statuses[0].is_scored() {
            break;
        }
        let packed = statuses
            .iter()
            .enumerate()
            .fold(0u32, |acc, (j, s)| acc | (u32::from(s.bits()) << (2 * j)));
        push_digits(&mut out, packed, 2);
    }
    out
}

/// Append `value` as `width` base-36 digits, or all nines when it does not fit
fn push_digits(out: &mut String, value: u32, width: u32) {
    if value >= BASE.pow(width) {
        warn!(value, width, "Share value out of range");
        for _ in 0..width {
            out.push('9');
        }
        return;
    }

    for position in (0..width).rev() {
        let digit = (value / BASE.pow(position)) % BASE;
        out.push(char::from(DIGITS[digit as usize]));
    }
}
