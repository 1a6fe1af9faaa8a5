//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_report, print_score_report, print_share_report, print_stats, print_today_report,
};
