//! Streaks, win rate and guess distribution across puzzles

pub mod tracker;

pub use tracker::{BUCKETS, StatsError, StatsRecord, StatsSummary, StatsTracker};
