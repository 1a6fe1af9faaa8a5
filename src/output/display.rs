//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_letters, statuses_to_emoji};
use crate::commands::{CheckReport, ScoreReport, ShareReport, TodayReport};
use crate::game::GameStatus;
use crate::stats::StatsSummary;
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_report(report: &ScoreReport) {
    println!(
        "\n{}  {}",
        spaced_letters(report.guess.as_str()).bright_yellow().bold(),
        statuses_to_emoji(&report.statuses)
    );
    println!(
        "Secret: {}",
        report.secret.as_str().to_uppercase().bright_black()
    );
    if report.exact {
        println!("{}", "✅ Exact match".green().bold());
    }
}

/// Print a dictionary lookup
pub fn print_check_report(report: &CheckReport) {
    let word = report.word.as_str().to_uppercase();
    if report.accepted {
        println!("{} {}", "✅".green(), format!("{word} is accepted").green());
    } else {
        println!("{} {}", "❌".red(), format!("{word} is not a valid word").red());
    }
}

/// Print today's puzzle status
pub fn print_today_report(report: &TodayReport) {
    println!("\n{}", "─".repeat(40).cyan());
    let title = match report.date {
        Some(date) => format!("Wordle #{} ({date})", report.puzzle_index),
        None => format!("Wordle #{}", report.puzzle_index),
    };
    println!(" {}", title.bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    match report.status {
        GameStatus::Playing => println!(
            "   In progress: {} used, {} left",
            report.guesses_used, report.guesses_left
        ),
        GameStatus::Won => println!(
            "   {} in {} ({})",
            "Solved".green().bold(),
            report.guesses_used,
            report.message.as_deref().unwrap_or_default()
        ),
        GameStatus::Lost => println!(
            "   {} - the word was {}",
            "Lost".red().bold(),
            report.message.as_deref().unwrap_or_default()
        ),
    }
}

/// Print the share grid, token and link
pub fn print_share_report(report: &ShareReport) {
    if report.status == GameStatus::Playing {
        println!("{}", "Puzzle not finished yet".yellow());
    }
    println!("\n{}\n", report.share.grid);
    println!("Code: {}", report.share.token.bright_yellow().bold());
    println!("Link: {}", report.share.url().underline());
}

/// Print lifetime statistics with the guess distribution
pub fn print_stats(summary: &StatsSummary) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("\n📊 {}", "Totals:".bright_cyan().bold());
    println!("   Played:          {}", summary.played);
    println!(
        "   Win %:           {}",
        summary.win_percent.to_string().bright_yellow().bold()
    );
    println!("   Current streak:  {}", summary.current_streak);
    println!("   Max streak:      {}", summary.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = summary.distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in summary.distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, max, 30);
        println!("   {guesses}: {} {count:4}", bar.green());
    }
    println!(
        "   X: {} {:4}",
        create_progress_bar(summary.distribution[0], max, 30).red(),
        summary.distribution[0]
    );
}
