//! Log file discovery and filename date parsing
//!
//! This module handles listing the log directory and turning dated
//! filenames into scan entries for the extraction stage.

pub mod finder;

// Re-export commonly used items
pub use finder::{ScanLogs, ScannedLog, Scanner, parse_log_file_name};
