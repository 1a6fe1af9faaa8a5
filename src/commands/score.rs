//! Score a guess against an arbitrary secret

use crate::core::{LetterStatus, Score, WORD_LENGTH, Word, WordError};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub guess: Word,
    pub secret: Word,
    pub statuses: [LetterStatus; WORD_LENGTH],
    pub exact: bool,
}

/// Parse both words and score them
///
/// No dictionary check is applied; any five letters can be scored.
///
/// # Errors
/// Returns `WordError` if either argument is not a five-letter word.
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreReport, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    let score = Score::calculate(&guess, &secret);

    Ok(ScoreReport {
        guess,
        secret,
        statuses: *score.statuses(),
        exact: score.is_exact(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Correct as C, NotPresent as N, WrongPosition as W};

    #[test]
    fn scores_mixed_case_input() {
        let report = score_words("TRAIN", "Crane").unwrap();
        assert_eq!(report.statuses, [N, C, C, N, W]);
        assert!(!report.exact);
        assert_eq!(report.secret.as_str(), "crane");
    }

    #[test]
    fn rejects_bad_words() {
        assert!(score_words("trains", "crane").is_err());
        assert!(score_words("train", "cr4ne").is_err());
    }
}
