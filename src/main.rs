//! Daily Wordle - CLI
//!
//! Play today's puzzle in the terminal, or inspect it with plain commands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use daily_wordle::{
    calendar::default_epoch,
    commands::{check_word, open_dictionary, open_puzzle, score_words, share_today, today_report},
    config::AppConfig,
    interactive::{App, run_tui},
    output::{
        print_check_report, print_score_report, print_share_report, print_stats,
        print_today_report,
    },
};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "A new five-letter word every day, with streaks and statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the saved session, statistics and log
    #[arg(long, global = true, env = "DAILY_WORDLE_STATE_DIR", default_value = ".daily_wordle")]
    state_dir: PathBuf,

    /// Accepted-guess word list, one word per line (default: bundled list)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Date of puzzle 0 (YYYY-MM-DD)
    #[arg(long, global = true)]
    epoch: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle (default)
    Play,

    /// Show lifetime statistics
    Stats,

    /// Show today's puzzle number and progress
    Today,

    /// Print the share grid and code for today's puzzle
    Share,

    /// Score a guess against a secret word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Check whether a word is an accepted guess
    Check {
        /// Word to look up
        word: String,
    },
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig {
            state_dir: self.state_dir.clone(),
            dictionary: self.dictionary.clone(),
            epoch: self.epoch.unwrap_or_else(default_epoch),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr for plain commands
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to a file while the TUI owns the screen
fn init_file_logging(config: &AppConfig) -> Result<()> {
    fs::create_dir_all(&config.state_dir).with_context(|| {
        format!(
            "failed to create state directory '{}'",
            config.state_dir.display()
        )
    })?;
    let log_path = config.log_path();
    let log_file = File::create(&log_path)
        .with_context(|| format!("failed to create log file '{}'", log_path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Stats => {
            init_stderr_logging();
            let puzzle = open_puzzle(&config)?;
            print_stats(&puzzle.stats());
            Ok(())
        }
        Commands::Today => {
            init_stderr_logging();
            let mut puzzle = open_puzzle(&config)?;
            let report = today_report(&mut puzzle, config.epoch)?;
            print_today_report(&report);
            Ok(())
        }
        Commands::Share => {
            init_stderr_logging();
            let mut puzzle = open_puzzle(&config)?;
            let report = share_today(&mut puzzle)?;
            print_share_report(&report);
            Ok(())
        }
        Commands::Score { guess, secret } => {
            init_stderr_logging();
            let report = score_words(&guess, &secret)?;
            print_score_report(&report);
            Ok(())
        }
        Commands::Check { word } => {
            init_stderr_logging();
            let dictionary = open_dictionary(&config)?;
            let report = check_word(&dictionary, &word)?;
            print_check_report(&report);
            Ok(())
        }
    }
}

fn run_play_command(config: &AppConfig) -> Result<()> {
    init_file_logging(config)?;
    info!(state_dir = %config.state_dir.display(), "Starting daily_wordle TUI");

    let puzzle = open_puzzle(config)?;
    let app = App::new(puzzle)?;
    run_tui(app)
}
