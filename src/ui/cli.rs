// Command-line interface definitions and parsing for runlog

use crate::config::CliConfig;
use crate::core::constants::record_list_styles;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory of Markdown log files to aggregate
    pub logs_dir: Option<String>,

    // Core Options
    /// Host document whose marker regions are rewritten
    #[arg(long, value_name = "FILE", help_heading = "Core Options")]
    pub readme: Option<String>,

    /// Also generate the ISO-week summary region
    #[arg(short = 'w', long, help_heading = "Core Options")]
    pub weekly: bool,

    // Output & Verbosity
    /// Record list style
    #[arg(
        long,
        value_name = "STYLE",
        value_parser = record_list_styles::ALL,
        help_heading = "Output & Verbosity"
    )]
    pub record_list: Option<String>,

    /// Suppress console output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Migrate ad-hoc Markdown logs into the dated collection directory
    Migrate {
        /// Source directory to scan (repeatable)
        #[arg(short = 's', long = "source", value_name = "DIR")]
        sources: Vec<String>,

        /// Target collection directory
        #[arg(short = 't', long, value_name = "DIR")]
        target: Option<String>,

        /// Move instead of copy (default is copy)
        #[arg(long = "move")]
        move_files: bool,

        /// Show what would happen without writing files
        #[arg(long)]
        dry_run: bool,

        /// File name to exclude (repeatable)
        #[arg(short = 'x', long = "exclude", value_name = "NAME")]
        excludes: Vec<String>,
    },
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Install shell completions to standard location
    #[command(name = "completion-install", arg_required_else_help = true)]
    CompletionInstall {
        /// The shell to install completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed CLI arguments into the CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        logs_dir: cli.logs_dir.clone(),
        readme_file: cli.readme.clone(),
        weekly: cli.weekly,
        record_list_style: cli.record_list.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verifies() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bare_invocation() {
        let cli = Cli::parse_from(["runlog"]);
        assert!(cli.command.is_none());
        assert!(cli.logs_dir.is_none());
        assert!(!cli.weekly);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_update_flags() {
        let cli = Cli::parse_from([
            "runlog",
            "runs",
            "--readme",
            "INDEX.md",
            "--weekly",
            "--record-list",
            "flat",
            "-v",
        ]);

        assert_eq!(cli.logs_dir.as_deref(), Some("runs"));
        assert_eq!(cli.readme.as_deref(), Some("INDEX.md"));
        assert!(cli.weekly);
        assert_eq!(cli.record_list.as_deref(), Some("flat"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_rejects_unknown_record_list_style() {
        let result = Cli::try_parse_from(["runlog", "--record-list", "fancy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_migrate_subcommand() {
        let cli = Cli::parse_from([
            "runlog", "migrate", "-s", "old", "-s", "drafts", "-t", "_posts", "--move",
            "--dry-run", "-x", "template.md",
        ]);

        match cli.command {
            Some(Commands::Migrate {
                sources,
                target,
                move_files,
                dry_run,
                excludes,
            }) => {
                assert_eq!(sources, vec!["old".to_string(), "drafts".to_string()]);
                assert_eq!(target.as_deref(), Some("_posts"));
                assert!(move_files);
                assert!(dry_run);
                assert_eq!(excludes, vec!["template.md".to_string()]);
            }
            _ => panic!("Expected Migrate command"),
        }
    }

    #[test]
    fn test_cli_to_config() {
        let cli = Cli::parse_from(["runlog", "runs", "--weekly", "--quiet", "--no-config"]);
        let cli_config = cli_to_config(&cli);

        assert_eq!(cli_config.logs_dir.as_deref(), Some("runs"));
        assert!(cli_config.weekly);
        assert!(cli_config.quiet);
        assert!(cli_config.no_config);
        assert_eq!(cli_config.readme_file, None);
    }
}
