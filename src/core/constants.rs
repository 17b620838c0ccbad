/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings and other literal values
/// used across the application, making them easier to maintain and modify.
/// Marker token constants
pub mod markers {
    /// Default start token of the monthly-summary region
    pub const SUMMARY_START: &str = "<!-- SUMMARY_START -->";
    /// Default end token of the monthly-summary region
    pub const SUMMARY_END: &str = "<!-- SUMMARY_END -->";
    /// Default start token of the weekly-summary region
    pub const WEEKLY_START: &str = "<!-- WEEKLY_SUMMARY_START -->";
    /// Default end token of the weekly-summary region
    pub const WEEKLY_END: &str = "<!-- WEEKLY_SUMMARY_END -->";
    /// Default start token of the record-list region
    pub const RECORD_LIST_START: &str = "<!-- RECORD_LIST_START -->";
    /// Default end token of the record-list region
    pub const RECORD_LIST_END: &str = "<!-- RECORD_LIST_END -->";
}

/// Section headings used when a marker pair is missing and a fresh
/// section has to be bootstrapped at the top of the host document
pub mod headings {
    pub const SUMMARY: &str = "## 📊 月間サマリー";
    pub const WEEKLY: &str = "## 🗓 週間サマリー";
    pub const RECORD_LIST: &str = "## 📅 記録一覧（リンク付き）";
}

/// Field label constants for the log line grammar
pub mod labels {
    /// Default label of the distance field (`- 距離：10.5km`)
    pub const DISTANCE: &str = "距離";
    /// Default label of the duration field (`- 時間：45:13`)
    pub const DURATION: &str = "時間";
}

/// Record list style constants
pub mod record_list_styles {
    /// Flat Markdown list, one dated link per line
    pub const FLAT: &str = "flat";
    /// Nested collapsible HTML groups per year/month
    pub const NESTED: &str = "nested";

    /// Default record list style
    pub const DEFAULT: &str = NESTED;

    /// All valid record list styles
    pub const ALL: [&str; 2] = [FLAT, NESTED];
}

/// Default file system locations
pub mod paths {
    /// Default directory scanned for dated log files
    pub const LOGS_DIR: &str = "logs";
    /// Default host document whose marker regions are rewritten
    pub const README_FILE: &str = "README.md";
    /// Default target collection directory of the migration tool
    pub const MIGRATE_TARGET: &str = "_logs";
    /// Config file name looked up in the working directory and parents
    pub const CONFIG_FILE: &str = ".runlog.toml";
}

/// Formatting constants
pub mod formatting {
    /// Sentinel rendered instead of a pace when total distance is zero
    pub const PACE_NOT_APPLICABLE: &str = "N/A";
    /// Fence token delimiting the front matter block written by migration
    pub const FRONT_MATTER_FENCE: &str = "---";
}

/// Display and formatting constants
pub mod display {
    /// Emoji for success status
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for warning status
    pub const WARNING_EMOJI: &str = "⚠️";
    /// Emoji for error status
    pub const ERROR_EMOJI: &str = "❌";
    /// Emoji for file information
    pub const FILE_EMOJI: &str = "📁";
    /// Emoji for the update flow
    pub const UPDATE_EMOJI: &str = "📝";
}
