//! Daily Wordle
//!
//! The rules and state behind a daily five-letter word puzzle: duplicate-aware
//! scoring, dictionary validation, the puzzle calendar, a resumable session
//! and lifetime statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_wordle::core::{LetterStatus, Word, score};
//!
//! let guess = Word::new("erase").unwrap();
//! let secret = Word::new("speed").unwrap();
//!
//! let (statuses, exact) = score(&guess, &secret);
//! assert_eq!(statuses[0], LetterStatus::WrongPosition);
//! assert!(!exact);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Puzzle-day calculation
pub mod calendar;

// Versioned persistence
pub mod store;

// Lifetime statistics
pub mod stats;

// Session state machine and daily puzzle
pub mod game;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
