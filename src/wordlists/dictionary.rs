//! Accepted-guess dictionary
//!
//! Membership is a binary search over a byte-sorted fixed-record table.

use super::embedded::ACCEPTED;
use super::table::{Records, TableError};
use crate::core::Word;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Read-only set of words accepted as guesses
#[derive(Debug, Clone)]
pub struct Dictionary {
    records: Records,
}

impl Dictionary {
    /// The dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `TableError` if the embedded table is malformed, which means the
    /// packaged data is corrupt.
    pub fn bundled() -> Result<Self, TableError> {
        Self::from_records(Cow::Borrowed(ACCEPTED))
    }

    /// Wrap a packed table, checking that it is aligned, lowercase, and
    /// strictly ascending
    ///
    /// # Errors
    /// Returns `TableError` describing the first malformed record.
    pub fn from_records(bytes: Cow<'static, [u8]>) -> Result<Self, TableError> {
        let records = Records::validate("dictionary", bytes, true)?;
        Ok(Self { records })
    }

    /// Build a dictionary from loose words in any order; duplicates collapse
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    /// use daily_wordle::wordlists::Dictionary;
    ///
    /// let words = ["slate", "crane", "slate"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::from_words(words);
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.is_valid(&Word::new("crane").unwrap()));
    /// ```
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let sorted: BTreeSet<Word> = words.into_iter().collect();
        Self {
            records: Records::from_words(sorted),
        }
    }

    /// Exact membership test
    #[must_use]
    pub fn is_valid(&self, word: &Word) -> bool {
        let target: &[u8] = word.as_bytes();
        let mut low = 0;
        let mut high = self.records.len();

        while low < high {
            let mid = low + (high - low) / 2;
            match self.records.record(mid).cmp(target) {
                Ordering::Equal => return true,
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }

        false
    }

    /// Number of accepted words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dictionary accepts nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.len() == 0
    }

    /// Iterate the accepted words in byte order
    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        (0..self.records.len()).filter_map(|i| self.records.word(i))
    }
}
