use crate::config::Config;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: logs_dir={}, readme={}, weekly={}, record_list={}",
        config.logs_dir(),
        config.readme_file(),
        config.weekly_summary(),
        config.record_list_style()
    );
}

/// Log scan information
pub fn log_scan_info(record_count: usize, dir: &Path) {
    info!("Found {record_count} dated log file(s) in {}", dir.display());
}

/// Log an unreadable log file that is skipped
pub fn log_skipped_file(path: &Path, err: &std::io::Error) {
    warn!("Skipping unreadable file {}: {err}", path.display());
}

/// Log a field that was present but malformed
pub fn log_invalid_field(file_name: &str, field: &str) {
    warn!("{file_name}: {field} field is present but malformed, treating as zero");
}

/// Log update completion
pub fn log_update_complete(record_count: usize, months: usize, changed: bool) {
    if changed {
        info!("Updated README regions from {record_count} record(s) across {months} month(s)");
    } else {
        info!("README already up to date ({record_count} record(s), {months} month(s))");
    }
}

/// Log migration completion
pub fn log_migrate_complete(migrated: usize, skipped: usize, dry_run: bool) {
    if dry_run {
        info!("Dry run: would migrate {migrated} file(s), skip {skipped}");
    } else {
        info!("Migrated {migrated} file(s), skipped {skipped}");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
