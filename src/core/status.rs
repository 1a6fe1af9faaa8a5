//! Per-letter feedback status

use serde::{Deserialize, Serialize};

/// Feedback for one letter
///
/// The variants are totally ordered from least to most informative, so the
/// keyboard legend can keep the maximum status seen for every letter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LetterStatus {
    /// Not scored yet
    #[default]
    Neutral,
    /// Letter does not occur (or all its occurrences are already claimed)
    NotPresent,
    /// Letter occurs elsewhere in the word
    WrongPosition,
    /// Letter is in the right place
    Correct,
}

impl LetterStatus {
    /// Two-bit code used by the share token
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            Self::Neutral => 0,
            Self::NotPresent => 1,
            Self::WrongPosition => 2,
            Self::Correct => 3,
        }
    }

    /// Square emoji for share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::NotPresent | Self::Neutral => '⬜',
        }
    }

    /// Whether the letter has been scored at all
    #[inline]
    #[must_use]
    pub fn is_scored(self) -> bool {
        self != Self::Neutral
    }
}
