use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{Result, RunlogError};

/// Filename shape of a dated log: `YYYY-MM-DD.md` with an optional
/// `-NN` same-day sequence suffix.
static LOG_FILE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(?:-([0-9]{2}))?\.md$")
        .expect("Failed to compile log file name pattern")
});

/// One discovered log file, dated via its filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLog {
    pub path: PathBuf,
    pub file_name: String,
    pub date: NaiveDate,
    pub sequence: Option<u32>,
}

/// Parse `YYYY-MM-DD[-NN].md` into a calendar-validated date and
/// optional sequence. Returns `None` for any other shape, including
/// syntactically matching but impossible dates (e.g. `2025-13-40`).
pub fn parse_log_file_name(name: &str) -> Option<(NaiveDate, Option<u32>)> {
    let caps = LOG_FILE_NAME.captures(name)?;

    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let sequence = match caps.get(4) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };

    Some((date, sequence))
}

/// Discover dated log files in a directory.
pub trait ScanLogs {
    fn scan(&self, dir: &Path) -> Result<Vec<ScannedLog>>;
}

#[derive(Default, Debug)]
pub struct Scanner {}

impl ScanLogs for Scanner {
    /// Non-recursive listing of the log directory, sorted by filename.
    ///
    /// The sorted order is the iteration-order contract for downstream
    /// aggregation (first-seen wins longest-run ties). Filenames that
    /// do not carry a date token are excluded without error.
    fn scan(&self, dir: &Path) -> Result<Vec<ScannedLog>> {
        if !dir.is_dir() {
            return Err(RunlogError::FileNotFound(dir.display().to_string()));
        }

        let mut names: Vec<String> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();

        let mut scanned = Vec::with_capacity(names.len());
        for name in names {
            if !name.ends_with(".md") || name == "README.md" {
                continue;
            }
            match parse_log_file_name(&name) {
                Some((date, sequence)) => scanned.push(ScannedLog {
                    path: dir.join(&name),
                    file_name: name,
                    date,
                    sequence,
                }),
                None => {
                    debug!("Skipping undated file name: {name}");
                }
            }
        }

        Ok(scanned)
    }
}
