//! Console output formatting and display logic for runlog

use std::path::Path;

use crate::config::Config;
use crate::core::constants::display;
use crate::migrate::MigrateSummary;
use crate::ui::color::{Colors, colorize};

/// Outcome of one update run, for display purposes
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub records: usize,
    pub months: usize,
    pub weeks: Option<usize>,
    pub changed: bool,
}

/// Display configuration information in a user-friendly format
pub fn display_config_info(config: &Config, record_count: usize) {
    println!(
        "{} {}: {}",
        display::FILE_EMOJI,
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Logs directory", Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        colorize(config.logs_dir(), Colors::BRIGHT_WHITE)
    );
    println!(
        "   {}: {}",
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Host document", Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        colorize(config.readme_file(), Colors::BRIGHT_WHITE)
    );
    println!(
        "   {}: {}",
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Dated log files", Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        colorize(&record_count.to_string(), Colors::BRIGHT_WHITE)
    );
}

/// Display the outcome of an update run
pub fn display_update_outcome(outcome: &UpdateOutcome, readme_file: &str) {
    let weeks_part = match outcome.weeks {
        Some(weeks) => format!(", {weeks} week(s)"),
        None => String::new(),
    };

    if outcome.changed {
        println!(
            "{} {} updated: {} record(s), {} month(s){}",
            display::SUCCESS_EMOJI,
            colorize(readme_file, Colors::BRIGHT_GREEN),
            outcome.records,
            outcome.months,
            weeks_part
        );
    } else {
        println!(
            "{} {} already up to date ({} record(s))",
            display::SUCCESS_EMOJI,
            colorize(readme_file, Colors::BRIGHT_GREEN),
            outcome.records
        );
    }
}

/// Display the outcome of a migration run, listing planned actions on
/// a dry run
pub fn display_migrate_summary(summary: &MigrateSummary, target: &Path) {
    if summary.dry_run {
        for action in &summary.actions {
            println!(
                "DRY-RUN: {} {} -> {}  (title='{}', date={})",
                if action.moved { "MOVE" } else { "COPY" },
                action.source.display(),
                action.dest.display(),
                action.title,
                action.date.format("%Y-%m-%d")
            );
        }
    }

    println!(
        "{} Migrated: {}  |  Skipped: {}  |  Output dir: {}",
        display::SUCCESS_EMOJI,
        summary.migrated(),
        summary.skipped,
        target.display()
    );

    if summary.dry_run {
        println!(
            "{} Dry run only. No files were written. Remove --dry-run to execute.",
            display::WARNING_EMOJI
        );
    }
}
