//! Runtime configuration shared by every command

use crate::calendar::default_epoch;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// File name of the TUI log inside the state directory
pub const LOG_FILE: &str = "daily_wordle.log";

/// Where state lives and which words and epoch to play with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub state_dir: PathBuf,
    /// Custom accepted-word list, one word per line
    pub dictionary: Option<PathBuf>,
    pub epoch: NaiveDate,
}

impl AppConfig {
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
            dictionary: None,
            epoch: default_epoch(),
        }
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join(LOG_FILE)
    }

    #[must_use]
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(".daily_wordle")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lives_in_state_dir() {
        let config = AppConfig::new("/tmp/wordle-state");
        assert_eq!(config.log_path(), PathBuf::from("/tmp/wordle-state/daily_wordle.log"));
    }

    #[test]
    fn default_uses_standard_epoch() {
        let config = AppConfig::default();
        assert_eq!(config.epoch, default_epoch());
        assert_eq!(config.dictionary, None);
        assert_eq!(config.state_dir(), Path::new(".daily_wordle"));
    }
}
