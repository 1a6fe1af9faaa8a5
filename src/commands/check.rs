//! Dictionary lookup

use crate::core::{Word, WordError};
use crate::wordlists::Dictionary;

/// Whether a word would be accepted as a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub word: Word,
    pub accepted: bool,
}

/// Look `text` up in `dictionary`
///
/// # Errors
/// Returns `WordError` if `text` is not a five-letter word.
pub fn check_word(dictionary: &Dictionary, text: &str) -> Result<CheckReport, WordError> {
    let word = Word::new(text)?;
    Ok(CheckReport {
        word,
        accepted: dictionary.is_valid(&word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_membership() {
        let dictionary = Dictionary::from_words([Word::new("crane").unwrap()]);
        assert!(check_word(&dictionary, "CRANE").unwrap().accepted);
        assert!(!check_word(&dictionary, "slate").unwrap().accepted);
        assert!(check_word(&dictionary, "cran").is_err());
    }
}
