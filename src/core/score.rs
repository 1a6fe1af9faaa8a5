//! Guess scoring with duplicate-letter handling
//!
//! Scoring runs in two passes:
//! 1. Exact position matches are marked `Correct`.
//! 2. Remaining positions are scanned left to right. A letter is credited
//!    `WrongPosition` only while the secret still holds an occurrence that is
//!    neither matched exactly nor claimed by an earlier slot of the guess.
//!
//! The left-to-right order is part of the output: when the guess repeats a
//! letter more often than the secret, the earliest unmatched slots win.

use super::{LetterStatus, WORD_LENGTH, Word};

/// Result of scoring one guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    statuses: [LetterStatus; WORD_LENGTH],
    exact: bool,
}

impl Score {
    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{LetterStatus, Score, Word};
    ///
    /// let guess = Word::new("train").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let score = Score::calculate(&guess, &secret);
    ///
    /// assert_eq!(score.statuses()[1], LetterStatus::Correct);
    /// assert_eq!(score.statuses()[4], LetterStatus::WrongPosition);
    /// assert!(!score.is_exact());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut statuses = [LetterStatus::NotPresent; WORD_LENGTH];
        let mut exact = true;

        for (i, status) in statuses.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == secret.letter_at(i) {
                *status = LetterStatus::Correct;
                continue;
            }
            exact = false;

            let in_secret = secret.count(letter);
            let matched = exact_matches(guess, secret, letter);
            let claimed_earlier = guess.count_in_prefix(letter, i);

            if in_secret.saturating_sub(matched) > claimed_earlier {
                *status = LetterStatus::WrongPosition;
            }
        }

        Self { statuses, exact }
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.statuses
    }

    /// Whether every position is `Correct`
    #[inline]
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.exact
    }

    /// Render as a row of square emoji
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|s| s.emoji()).collect()
    }
}

/// Score `guess` against `secret`, returning the statuses and the exact-match flag
#[must_use]
pub fn score(guess: &Word, secret: &Word) -> ([LetterStatus; WORD_LENGTH], bool) {
    let score = Score::calculate(guess, secret);
    (score.statuses, score.exact)
}

/// Positions where both words hold `letter`
fn exact_matches(guess: &Word, secret: &Word, letter: u8) -> usize {
    guess
        .as_bytes()
        .iter()
        .zip(secret.as_bytes())
        .filter(|&(&g, &s)| g == letter && s == letter)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Correct as C, NotPresent as N, WrongPosition as W};

    fn statuses(guess: &str, secret: &str) -> [LetterStatus; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        *Score::calculate(&guess, &secret).statuses()
    }

    #[test]
    fn identical_words_are_exact() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            let (statuses, exact) = score(&w, &w);
            assert!(exact);
            assert_eq!(statuses, [C; WORD_LENGTH]);
        }
    }

    #[test]
    fn disjoint_words_are_all_not_present() {
        assert_eq!(statuses("abcde", "fghij"), [N; WORD_LENGTH]);
    }

    #[test]
    fn train_against_crane() {
        assert_eq!(statuses("train", "crane"), [N, C, C, N, W]);
    }

    #[test]
    fn erase_against_speed() {
        // Both e's in the secret are unmatched, so both guessed e's get credit
        assert_eq!(statuses("erase", "speed"), [W, N, N, W, W]);
    }

    #[test]
    fn only_earlier_duplicate_gets_credit() {
        // One e in the secret, two in the guess: the first one wins
        assert_eq!(statuses("speed", "abide"), [N, N, W, N, W]);
    }

    #[test]
    fn exact_match_consumes_the_only_occurrence() {
        // The final e is correct, so neither earlier e gets credit
        assert_eq!(statuses("eerie", "crane"), [N, N, W, N, C]);
    }

    #[test]
    fn exact_match_later_in_word() {
        assert_eq!(statuses("robot", "floor"), [W, W, N, C, N]);
    }

    #[test]
    fn earlier_slots_claim_even_when_correct() {
        // Secret has two o's; one is matched at position 1, the first guessed o
        // at position 0 takes the remaining one, leaving nothing for position 4
        assert_eq!(statuses("ooxxo", "noone"), [W, C, N, N, N]);
    }

    #[test]
    fn emoji_rendering() {
        let guess = Word::new("train").unwrap();
        let secret = Word::new("crane").unwrap();
        assert_eq!(Score::calculate(&guess, &secret).to_emoji(), "⬜🟩🟩⬜🟨");
    }
}
