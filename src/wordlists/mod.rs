//! Word tables for the daily puzzle
//!
//! Provides the embedded solution and dictionary tables plus loaders for
//! custom word lists.

mod dictionary;
mod embedded;
pub mod loader;
mod solutions;
mod table;

pub use dictionary::Dictionary;
pub use embedded::{ACCEPTED, ACCEPTED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
pub use solutions::SolutionTable;
pub use table::TableError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WORD_LENGTH, Word};

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT * WORD_LENGTH);
    }

    #[test]
    fn accepted_count_matches_const() {
        assert_eq!(ACCEPTED.len(), ACCEPTED_COUNT * WORD_LENGTH);
    }

    #[test]
    fn solutions_are_lowercase_words() {
        for record in SOLUTIONS.chunks_exact(WORD_LENGTH) {
            assert!(
                record.iter().all(u8::is_ascii_lowercase),
                "{record:?} is not a lowercase word"
            );
        }
    }

    #[test]
    fn every_solution_is_an_accepted_guess() {
        let dictionary = Dictionary::bundled().unwrap();
        for record in SOLUTIONS.chunks_exact(WORD_LENGTH) {
            let word = Word::from_bytes(record).unwrap();
            assert!(dictionary.is_valid(&word), "'{word}' not accepted");
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(SOLUTIONS_COUNT, 2310, "Expected 2,310 solution words");
        assert!(ACCEPTED_COUNT > SOLUTIONS_COUNT);
        assert!(ACCEPTED_COUNT > 12_000, "Expected the full guess list");
    }

    #[test]
    fn common_openers_are_accepted() {
        let dictionary = Dictionary::bundled().unwrap();
        for opener in ["soare", "tares", "roate", "salet", "crane", "adieu"] {
            let word = Word::new(opener).unwrap();
            assert!(dictionary.is_valid(&word), "'{opener}' not accepted");
        }
        assert!(!dictionary.is_valid(&Word::new("xxxxx").unwrap()));
    }
}
