//! Day-ordered table of secret words

use super::embedded::SOLUTIONS;
use super::table::{Records, TableError};
use crate::core::Word;
use std::borrow::Cow;

/// Append-only list of secret words, one per puzzle day
#[derive(Debug, Clone)]
pub struct SolutionTable {
    records: Records,
}

impl SolutionTable {
    /// The solution table compiled into the binary
    ///
    /// # Errors
    /// Returns `TableError` if the embedded table is empty or malformed.
    pub fn bundled() -> Result<Self, TableError> {
        Self::from_records(Cow::Borrowed(SOLUTIONS))
    }

    /// Wrap a packed table in puzzle order
    ///
    /// # Errors
    /// Returns `TableError` if the table is empty, misaligned, or holds
    /// anything other than lowercase letters.
    pub fn from_records(bytes: Cow<'static, [u8]>) -> Result<Self, TableError> {
        let records = Records::validate("solution", bytes, false)?;
        if records.len() == 0 {
            return Err(TableError::Empty { name: "solution" });
        }
        Ok(Self { records })
    }

    /// Build a table from words in puzzle order
    ///
    /// # Errors
    /// Returns `TableError::Empty` when no words are given.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self, TableError> {
        let records = Records::from_words(words);
        if records.len() == 0 {
            return Err(TableError::Empty { name: "solution" });
        }
        Ok(Self { records })
    }

    /// Secret word for a puzzle index
    ///
    /// # Errors
    /// Returns `TableError::NoPuzzle` if the index is before the epoch or past
    /// the end of the table.
    pub fn word_for(&self, index: i64) -> Result<Word, TableError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.records.word(i))
            .ok_or(TableError::NoPuzzle {
                index,
                available: self.records.len(),
            })
    }

    /// Number of puzzles available
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: construction rejects empty tables
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_for_follows_table_order() {
        let table = SolutionTable::from_records(Cow::Borrowed(&b"cigarrebutsissy"[..])).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.word_for(0).unwrap().as_str(), "cigar");
        assert_eq!(table.word_for(2).unwrap().as_str(), "sissy");
    }

    #[test]
    fn out_of_range_index_is_fatal() {
        let table = SolutionTable::from_records(Cow::Borrowed(&b"cigar"[..])).unwrap();
        assert!(matches!(
            table.word_for(1),
            Err(TableError::NoPuzzle {
                index: 1,
                available: 1
            })
        ));
        assert!(matches!(
            table.word_for(-1),
            Err(TableError::NoPuzzle { index: -1, .. })
        ));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            SolutionTable::from_records(Cow::Borrowed(&b""[..])),
            Err(TableError::Empty { .. })
        ));
        assert!(SolutionTable::from_words(Vec::new()).is_err());
    }

    #[test]
    fn bundled_table_starts_at_epoch_word() {
        let table = SolutionTable::bundled().unwrap();
        assert_eq!(table.word_for(0).unwrap().as_str(), "cigar");
        assert_eq!(table.word_for(1).unwrap().as_str(), "rebut");
        assert!(!table.is_empty());
    }
}
