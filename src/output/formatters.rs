//! Formatting utilities for terminal output

use crate::core::{LetterStatus, WORD_LENGTH};

/// Format statuses as an emoji string
#[must_use]
pub fn statuses_to_emoji(statuses: &[LetterStatus; WORD_LENGTH]) -> String {
    statuses.iter().map(|s| s.emoji()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (u64::from(value) * width as u64 / u64::from(max)) as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Upper-cased letters with a gap between them, as on the board
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_to_emoji_all_gray() {
        let emoji = statuses_to_emoji(&[LetterStatus::NotPresent; WORD_LENGTH]);
        assert_eq!(emoji, "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn statuses_to_emoji_all_green() {
        let emoji = statuses_to_emoji(&[LetterStatus::Correct; WORD_LENGTH]);
        assert_eq!(emoji, "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 100, 10), "░░░░░░░░░░");
        assert_eq!(create_progress_bar(5, 0, 4), "░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("crane"), "C R A N E");
        assert_eq!(spaced_letters(""), "");
    }
}
