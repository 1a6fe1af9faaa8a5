//! Player-facing notification text

use crate::core::{GUESS_LIMIT, Word};

/// Rank names for a win, indexed by guesses used minus one
pub const VICTORY_MESSAGES: [&str; GUESS_LIMIT] = [
    "Genius",
    "Magnificent",
    "Impressive",
    "Splendid",
    "Great",
    "Phew",
];

/// Rank name for a win in `guesses_used` guesses
#[must_use]
pub fn victory(guesses_used: u8) -> &'static str {
    let index = usize::from(guesses_used.clamp(1, GUESS_LIMIT as u8)) - 1;
    VICTORY_MESSAGES[index]
}

/// Loss notification revealing the secret
#[must_use]
pub fn loss(secret: &Word) -> String {
    format!("'{}'", secret.as_str().to_ascii_uppercase())
}

/// Rejection for a guess outside the dictionary
#[must_use]
pub fn invalid_word(word: &Word) -> String {
    format!("'{word}' is not a valid word")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn victory_by_guess_count() {
        assert_eq!(victory(1), "Genius");
        assert_eq!(victory(3), "Impressive");
        assert_eq!(victory(6), "Phew");
    }

    #[test]
    fn loss_reveals_secret() {
        assert_eq!(loss(&Word::new("crane").unwrap()), "'CRANE'");
    }

    #[test]
    fn invalid_word_quotes_guess() {
        assert_eq!(
            invalid_word(&Word::new("xxxxx").unwrap()),
            "'xxxxx' is not a valid word"
        );
    }
}
