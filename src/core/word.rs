//! Puzzle word representation
//!
//! A Word is exactly five lowercase ASCII letters stored inline, so it is
//! `Copy` and orders byte-wise the same way the packed word tables do.

use super::WORD_LENGTH;
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;

/// A five-letter lowercase word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    #[display("word must be exactly {} letters, got {len}", WORD_LENGTH)]
    InvalidLength { len: usize },
    #[display("word must contain only the letters a-z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly five or any character
    /// is outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.to_ascii_lowercase();
        Self::from_bytes(text.as_bytes())
    }

    /// Create a Word from raw bytes, which must already be lowercase
    ///
    /// # Errors
    /// Returns `WordError` on a wrong length or any byte outside `a-z`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WordError> {
        let letters: [u8; WORD_LENGTH] = bytes
            .try_into()
            .map_err(|_| WordError::InvalidLength { len: bytes.len() })?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self(letters))
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - construction guarantees ASCII content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("word is validated ASCII")
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Count occurrences of `letter` among the first `limit` positions
    #[inline]
    #[must_use]
    pub fn count_in_prefix(&self, letter: u8, limit: usize) -> usize {
        self.0[..limit].iter().filter(|&&b| b == letter).count()
    }

    /// Count occurrences of `letter` anywhere in the word
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.count_in_prefix(letter, WORD_LENGTH)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
