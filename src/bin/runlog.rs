use clap::{CommandFactory, Parser};
use runlog::aggregate::{aggregate_monthly, aggregate_weekly};
use runlog::config::Config;
use runlog::core::error::RunlogError;
use runlog::core::types::LogRecord;
use runlog::discovery::{ScanLogs, ScannedLog, Scanner};
use runlog::extract::{ExtractFields, FieldExtractor};
use runlog::logging;
use runlog::migrate::{MigrateOptions, MigrateSummary, Migrator};
use runlog::render::{
    RecordListStyle, render_monthly_summary, render_record_list, render_weekly_summary,
    splice_region,
};
use runlog::ui::output::{self, UpdateOutcome};
use runlog::ui::{Cli, Commands, cli_to_config, install_completion, print_completions};

use std::fs;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_runlog_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if one was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        Some(Commands::CompletionInstall { shell }) => match install_completion(shell) {
            Ok(message) => {
                println!("{message}");
                Some(0)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Some(1)
            }
        },
        _ => None,
    }
}

/// Main logic extracted from main() for testing
pub fn run_runlog_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    match &cli.command {
        None => run_update(&config, cli_config.quiet),
        Some(Commands::Migrate {
            sources,
            target,
            move_files,
            dry_run,
            excludes,
        }) => run_migrate(
            &config,
            sources,
            target.as_deref(),
            *move_files,
            *dry_run,
            excludes,
            cli_config.quiet,
        ),
        // Completion commands never reach this point
        Some(_) => Ok(0),
    }
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(
    cli_config: &runlog::config::CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Scan the logs directory, aggregate, and rewrite the README regions
pub fn run_update(config: &Config, quiet: bool) -> Result<i32, Box<dyn std::error::Error>> {
    let logs_dir = Path::new(config.logs_dir());
    let readme_file = config.readme_file();

    let scanner = Scanner::default();
    let scanned = scanner.scan(logs_dir)?;
    logging::log_scan_info(scanned.len(), logs_dir);

    let extractor = FieldExtractor::new(config.grammar()?);
    let records = build_records(&scanned, &extractor, config.logs_dir());

    if !quiet {
        output::display_config_info(config, records.len());
    }

    // Missing host document is fatal, unlike individual log files
    let document = fs::read_to_string(readme_file)
        .map_err(|_| RunlogError::FileNotFound(readme_file.to_string()))?;

    let updated = render_document(&document, &records, config)?;

    let changed = updated != document;
    if changed {
        fs::write(readme_file, &updated)?;
    }

    let monthly = aggregate_monthly(&records);
    let outcome = UpdateOutcome {
        records: records.len(),
        months: monthly.len(),
        weeks: config
            .weekly_summary()
            .then(|| aggregate_weekly(&records).len()),
        changed,
    };
    logging::log_update_complete(outcome.records, outcome.months, changed);
    if !quiet {
        output::display_update_outcome(&outcome, readme_file);
    }

    Ok(0)
}

/// Read and extract each scanned log, skipping unreadable files
pub fn build_records(
    scanned: &[ScannedLog],
    extractor: &FieldExtractor,
    logs_dir: &str,
) -> Vec<LogRecord> {
    let mut records = Vec::with_capacity(scanned.len());

    for log in scanned {
        let text = match fs::read_to_string(&log.path) {
            Ok(text) => text,
            Err(e) => {
                logging::log_skipped_file(&log.path, &e);
                continue;
            }
        };

        let extraction = extractor.extract(&text);
        if extraction.distance_km.is_invalid() {
            logging::log_invalid_field(&log.file_name, "distance");
        }
        if extraction.duration_secs.is_invalid() {
            logging::log_invalid_field(&log.file_name, "duration");
        }

        records.push(LogRecord {
            date: log.date,
            sequence: log.sequence,
            distance_km: extraction.distance_km_or_zero(),
            duration_secs: extraction.duration_secs_or_zero(),
            file_name: log.file_name.clone(),
            link_path: format!("{logs_dir}/{}", log.file_name),
        });
    }

    records
}

/// Splice freshly rendered fragments into every configured region
pub fn render_document(
    document: &str,
    records: &[LogRecord],
    config: &Config,
) -> Result<String, Box<dyn std::error::Error>> {
    let style: RecordListStyle = config.record_list_style().parse()?;

    let monthly = aggregate_monthly(records);
    let mut updated = splice_region(
        document,
        &config.summary_region(),
        &render_monthly_summary(&monthly),
    );

    if config.weekly_summary() {
        let weekly = aggregate_weekly(records);
        updated = splice_region(
            &updated,
            &config.weekly_region(),
            &render_weekly_summary(&weekly),
        );
    }

    updated = splice_region(
        &updated,
        &config.record_list_region(),
        &render_record_list(records, style),
    );

    Ok(updated)
}

/// Run the migration tool with CLI arguments layered over the config
#[allow(clippy::too_many_arguments)]
pub fn run_migrate(
    config: &Config,
    sources: &[String],
    target: Option<&str>,
    move_files: bool,
    dry_run: bool,
    excludes: &[String],
    quiet: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let opts = build_migrate_options(config, sources, target, move_files, dry_run, excludes);

    let migrator = Migrator::default();
    let summary: MigrateSummary = migrator.run(&opts)?;

    logging::log_migrate_complete(summary.migrated(), summary.skipped, summary.dry_run);
    if !quiet {
        output::display_migrate_summary(&summary, &opts.target);
    }

    Ok(0)
}

/// Resolve migration options: CLI arguments win over config defaults
pub fn build_migrate_options(
    config: &Config,
    sources: &[String],
    target: Option<&str>,
    move_files: bool,
    dry_run: bool,
    excludes: &[String],
) -> MigrateOptions {
    let source_names = if sources.is_empty() {
        config.migrate_sources()
    } else {
        sources.to_vec()
    };

    let mut exclude_set: rustc_hash::FxHashSet<String> =
        config.migrate_excludes().into_iter().collect();
    exclude_set.extend(excludes.iter().cloned());

    MigrateOptions {
        sources: source_names.iter().map(std::path::PathBuf::from).collect(),
        target: std::path::PathBuf::from(target.unwrap_or(config.migrate_target())),
        move_files,
        dry_run,
        excludes: exclude_set,
        fallback_date: chrono::Local::now().date_naive(),
    }
}
