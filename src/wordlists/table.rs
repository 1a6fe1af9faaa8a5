//! Fixed-record word tables
//!
//! Tables are flat byte strings with one five-byte record per word and no
//! separators, the layout produced by the build script.

use crate::core::{WORD_LENGTH, Word, WordError};
use derive_more::{Display, Error};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Packaged word data that cannot serve a puzzle
#[derive(Debug, Display, Error)]
pub enum TableError {
    #[display("{name} table is empty")]
    Empty { name: &'static str },
    #[display("{name} table is {len} bytes, not a multiple of {}", WORD_LENGTH)]
    Misaligned { name: &'static str, len: usize },
    #[display("{name} table entry {index} is not a lowercase word")]
    InvalidEntry { name: &'static str, index: usize },
    #[display("{name} table is not strictly sorted at entry {index}")]
    Unsorted { name: &'static str, index: usize },
    #[display("no puzzle for day {index}: the solution table holds {available} words")]
    NoPuzzle { index: i64, available: usize },
    #[display("failed to read word list '{}': {}", path.display(), source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("{}:{}: {}", path.display(), line, source)]
    BadLine {
        path: PathBuf,
        line: usize,
        source: WordError,
    },
}

/// Validated fixed-record storage shared by the dictionary and solution table
#[derive(Clone)]
pub(crate) struct Records {
    bytes: Cow<'static, [u8]>,
}

impl Records {
    /// Check alignment and letters; optionally require strictly ascending order
    pub(crate) fn validate(
        name: &'static str,
        bytes: Cow<'static, [u8]>,
        require_sorted: bool,
    ) -> Result<Self, TableError> {
        if bytes.len() % WORD_LENGTH != 0 {
            return Err(TableError::Misaligned {
                name,
                len: bytes.len(),
            });
        }

        let mut previous: Option<&[u8]> = None;
        for (index, record) in bytes.chunks_exact(WORD_LENGTH).enumerate() {
            if !record.iter().all(u8::is_ascii_lowercase) {
                return Err(TableError::InvalidEntry { name, index });
            }
            if require_sorted && previous.is_some_and(|prev| prev >= record) {
                return Err(TableError::Unsorted { name, index });
            }
            previous = Some(record);
        }

        Ok(Self { bytes })
    }

    /// Pack words into records, in the order given
    pub(crate) fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let bytes: Vec<u8> = words
            .into_iter()
            .flat_map(|word| *word.as_bytes())
            .collect();
        Self {
            bytes: Cow::Owned(bytes),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bytes.len() / WORD_LENGTH
    }

    #[inline]
    pub(crate) fn record(&self, index: usize) -> &[u8] {
        &self.bytes[index * WORD_LENGTH..(index + 1) * WORD_LENGTH]
    }

    /// Decode a record; validation at construction makes this infallible
    pub(crate) fn word(&self, index: usize) -> Option<Word> {
        if index >= self.len() {
            return None;
        }
        Word::from_bytes(self.record(index)).ok()
    }
}

impl fmt::Debug for Records {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Records").field("len", &self.len()).finish()
    }
}
