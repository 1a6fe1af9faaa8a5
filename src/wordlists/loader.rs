//! Word list loading utilities
//!
//! Loads custom dictionaries from plain text files, one word per line.

use super::{Dictionary, TableError};
use crate::core::Word;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a dictionary from a file
///
/// Blank lines are skipped. Any other line that is not a five-letter word is
/// rejected with its line number, since a silently shrunken dictionary would
/// reject valid guesses.
///
/// # Errors
///
/// Returns `TableError::Io` if the file cannot be read and
/// `TableError::BadLine` for the first malformed line.
///
/// # Examples
/// ```no_run
/// use daily_wordle::wordlists::loader::load_dictionary;
///
/// let dictionary = load_dictionary("data/allowed.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, TableError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content).map_err(|(line, source)| TableError::BadLine {
        path: path.to_path_buf(),
        line,
        source,
    })?;

    let dictionary = Dictionary::from_words(words);
    info!(path = %path.display(), words = dictionary.len(), "Loaded custom dictionary");
    Ok(dictionary)
}

/// Parse one word per line, reporting the 1-based line number of the first bad entry
fn parse_words(content: &str) -> Result<Vec<Word>, (usize, crate::core::WordError)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Word::new(line.trim()).map_err(|e| (i + 1, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn parse_words_skips_blank_lines() {
        let words = parse_words("crane\n\n  slate  \nIRATE\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_words_reports_bad_line() {
        let err = parse_words("crane\nslate\ntoolong\n").unwrap_err();
        assert_eq!(err, (3, WordError::InvalidLength { len: 7 }));
    }

    #[test]
    fn parse_words_empty() {
        assert!(parse_words("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_dictionary("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }
}
