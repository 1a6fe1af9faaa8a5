//! Core domain types for the daily puzzle
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and deterministic.

mod score;
mod status;
mod word;

pub use score::{Score, score};
pub use status::LetterStatus;
pub use word::{Word, WordError};

/// Letters in every word
pub const WORD_LENGTH: usize = 5;

/// Rows a player gets before the puzzle is lost
pub const GUESS_LIMIT: usize = 6;

/// Size of the Latin alphabet used by the keyboard legend
pub const ALPHABET_SIZE: usize = 26;
