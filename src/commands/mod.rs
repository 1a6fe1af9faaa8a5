//! Command implementations
//!
//! Each command computes a report; printing lives in `output`.

pub mod check;
pub mod score;
pub mod share;
pub mod today;

pub use check::{CheckReport, check_word};
pub use score::{ScoreReport, score_words};
pub use share::{ShareReport, share_today};
pub use today::{TodayReport, today_report};

use crate::calendar::{PuzzleCalendar, SystemClock};
use crate::config::AppConfig;
use crate::game::DailyPuzzle;
use crate::store::FileStore;
use crate::wordlists::{Dictionary, SolutionTable, loader::load_dictionary};
use anyhow::{Context, Result};

/// Load the configured dictionary, falling back to the bundled one
///
/// # Errors
/// Returns an error if the custom word list cannot be loaded or the bundled
/// table is corrupt.
pub fn open_dictionary(config: &AppConfig) -> Result<Dictionary> {
    let dictionary = match &config.dictionary {
        Some(path) => load_dictionary(path)?,
        None => Dictionary::bundled().context("bundled dictionary is corrupt")?,
    };
    Ok(dictionary)
}

/// Assemble today's puzzle on the host clock with file-backed state
///
/// # Errors
/// Returns an error if the word data cannot be loaded or the state directory
/// cannot be created.
pub fn open_puzzle(config: &AppConfig) -> Result<DailyPuzzle<FileStore>> {
    let dictionary = open_dictionary(config)?;
    let solutions = SolutionTable::bundled().context("bundled solution table is corrupt")?;
    let calendar = PuzzleCalendar::new(config.epoch, Box::new(SystemClock));
    let storage = FileStore::open(&config.state_dir)?;

    Ok(DailyPuzzle::new(dictionary, solutions, calendar, storage))
}
