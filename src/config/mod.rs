//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments. Directory names, marker tokens, and
//! field labels are never module-level constants elsewhere in the
//! crate: each component receives them through this explicit object.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{headings, labels, markers, paths, record_list_styles};
use crate::core::error::{Result, RunlogError};
use crate::extract::FieldGrammar;
use crate::render::splice::MarkerRegion;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for dated log files
    pub logs_dir: Option<String>,

    /// Host document whose marker regions are rewritten
    pub readme_file: Option<String>,

    /// Label of the distance field line
    pub distance_label: Option<String>,

    /// Label of the duration field line
    pub duration_label: Option<String>,

    /// Also generate the ISO-week summary region
    pub weekly_summary: Option<bool>,

    /// Record list style (flat, nested)
    pub record_list_style: Option<String>,

    /// Marker tokens delimiting the monthly-summary region
    pub summary_start_marker: Option<String>,
    pub summary_end_marker: Option<String>,

    /// Marker tokens delimiting the weekly-summary region
    pub weekly_start_marker: Option<String>,
    pub weekly_end_marker: Option<String>,

    /// Marker tokens delimiting the record-list region
    pub record_list_start_marker: Option<String>,
    pub record_list_end_marker: Option<String>,

    /// Default source directories of the migration tool
    pub migrate_sources: Option<Vec<String>>,

    /// Default target collection directory of the migration tool
    pub migrate_target: Option<String>,

    /// File names the migration tool always skips
    pub migrate_excludes: Option<Vec<String>>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logs_dir: Some(paths::LOGS_DIR.to_string()),
            readme_file: Some(paths::README_FILE.to_string()),
            distance_label: Some(labels::DISTANCE.to_string()),
            duration_label: Some(labels::DURATION.to_string()),
            weekly_summary: Some(false),
            record_list_style: Some(record_list_styles::DEFAULT.to_string()),
            summary_start_marker: Some(markers::SUMMARY_START.to_string()),
            summary_end_marker: Some(markers::SUMMARY_END.to_string()),
            weekly_start_marker: Some(markers::WEEKLY_START.to_string()),
            weekly_end_marker: Some(markers::WEEKLY_END.to_string()),
            record_list_start_marker: Some(markers::RECORD_LIST_START.to_string()),
            record_list_end_marker: Some(markers::RECORD_LIST_END.to_string()),
            migrate_sources: None, // Will default to the logs directory
            migrate_target: Some(paths::MIGRATE_TARGET.to_string()),
            migrate_excludes: None,
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RunlogError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            RunlogError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .runlog.toml in current directory
        if let Ok(config) = Self::load_from_file(paths::CONFIG_FILE) {
            return config;
        }

        // Check for .runlog.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}{}", "../".repeat(i), paths::CONFIG_FILE);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref logs_dir) = cli_config.logs_dir {
            self.logs_dir = Some(logs_dir.clone());
        }
        if let Some(ref readme_file) = cli_config.readme_file {
            self.readme_file = Some(readme_file.clone());
        }
        if cli_config.weekly {
            self.weekly_summary = Some(true);
        }
        if let Some(ref style) = cli_config.record_list_style {
            self.record_list_style = Some(style.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    // Accessors with documented defaults

    pub fn logs_dir(&self) -> &str {
        self.logs_dir.as_deref().unwrap_or(paths::LOGS_DIR)
    }

    pub fn readme_file(&self) -> &str {
        self.readme_file.as_deref().unwrap_or(paths::README_FILE)
    }

    pub fn weekly_summary(&self) -> bool {
        self.weekly_summary.unwrap_or(false)
    }

    pub fn record_list_style(&self) -> &str {
        self.record_list_style
            .as_deref()
            .unwrap_or(record_list_styles::DEFAULT)
    }

    pub fn migrate_target(&self) -> &str {
        self.migrate_target
            .as_deref()
            .unwrap_or(paths::MIGRATE_TARGET)
    }

    pub fn migrate_sources(&self) -> Vec<String> {
        match self.migrate_sources {
            Some(ref sources) if !sources.is_empty() => sources.clone(),
            _ => vec![self.logs_dir().to_string()],
        }
    }

    pub fn migrate_excludes(&self) -> Vec<String> {
        self.migrate_excludes.clone().unwrap_or_default()
    }

    /// Compile the field grammar from the configured labels
    pub fn grammar(&self) -> Result<FieldGrammar> {
        FieldGrammar::new(
            self.distance_label.as_deref().unwrap_or(labels::DISTANCE),
            self.duration_label.as_deref().unwrap_or(labels::DURATION),
        )
    }

    /// Marker region of the monthly summary
    pub fn summary_region(&self) -> MarkerRegion {
        MarkerRegion::new(
            self.summary_start_marker
                .as_deref()
                .unwrap_or(markers::SUMMARY_START),
            self.summary_end_marker
                .as_deref()
                .unwrap_or(markers::SUMMARY_END),
            headings::SUMMARY,
        )
    }

    /// Marker region of the weekly summary
    pub fn weekly_region(&self) -> MarkerRegion {
        MarkerRegion::new(
            self.weekly_start_marker
                .as_deref()
                .unwrap_or(markers::WEEKLY_START),
            self.weekly_end_marker
                .as_deref()
                .unwrap_or(markers::WEEKLY_END),
            headings::WEEKLY,
        )
    }

    /// Marker region of the record list
    pub fn record_list_region(&self) -> MarkerRegion {
        MarkerRegion::new(
            self.record_list_start_marker
                .as_deref()
                .unwrap_or(markers::RECORD_LIST_START),
            self.record_list_end_marker
                .as_deref()
                .unwrap_or(markers::RECORD_LIST_END),
            headings::RECORD_LIST,
        )
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate record list style
        if let Some(ref style) = self.record_list_style {
            match style.as_str() {
                s if record_list_styles::ALL.contains(&s) => {}
                _ => {
                    return Err(RunlogError::Config(format!(
                        "Invalid record list style '{style}'. Expected one of: {}.",
                        record_list_styles::ALL.join(", ")
                    )));
                }
            }
        }

        // Validate marker pairs: tokens must be non-empty and distinct
        let regions = [
            ("summary", self.summary_region()),
            ("weekly", self.weekly_region()),
            ("record list", self.record_list_region()),
        ];
        for (name, region) in regions {
            if region.start.trim().is_empty() || region.end.trim().is_empty() {
                return Err(RunlogError::Config(format!(
                    "Marker tokens of the {name} region cannot be empty."
                )));
            }
            if region.start == region.end {
                return Err(RunlogError::Config(format!(
                    "Start and end markers of the {name} region must differ."
                )));
            }
        }

        // Validate field labels by trying to compile the grammar
        self.grammar()?;

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Update operation
    pub logs_dir: Option<String>,          // positional LOGS_DIR
    pub readme_file: Option<String>,       // --readme
    pub weekly: bool,                      // --weekly
    pub record_list_style: Option<String>, // --record-list

    // Output & verbosity
    pub quiet: bool,   // --quiet
    pub verbose: bool, // --verbose

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
