use chrono::{Datelike, NaiveDate};

/// One parsed log file: the date and same-day sequence taken from the
/// filename, and the distance/duration values taken from the body.
///
/// Records are immutable after creation and only live for the duration
/// of a run; the aggregation stage folds them into buckets and the
/// renderer reads them for the record listing.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Calendar date parsed from the filename
    pub date: NaiveDate,
    /// Optional same-day ordinal from a `-NN` filename suffix
    pub sequence: Option<u32>,
    /// Distance in kilometers, 0.0 when the field was absent or invalid
    pub distance_km: f64,
    /// Duration in seconds, 0 when the field was absent or invalid
    pub duration_secs: u64,
    /// File name the record was read from
    pub file_name: String,
    /// Path used when linking to the record from the host document
    pub link_path: String,
}

impl LogRecord {
    /// Sort key ordering records chronologically, same-day sequence last.
    pub fn sort_key(&self) -> (NaiveDate, u32) {
        (self.date, self.sequence.unwrap_or(0))
    }

    /// Human-readable date, e.g. `2025年07月30日`.
    pub fn display_date(&self) -> String {
        format!(
            "{}年{:02}月{:02}日",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }

    /// Display date with the same-day sequence appended when present,
    /// e.g. `2025年07月30日 (02)`.
    pub fn display_title(&self) -> String {
        match self.sequence {
            Some(seq) => format!("{} ({:02})", self.display_date(), seq),
            None => self.display_date(),
        }
    }
}
