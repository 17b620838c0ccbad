//! Rendering of aggregate buckets into Markdown/HTML fragments
//!
//! Every renderer is a pure function from aggregate data to a text
//! fragment; splicing the fragments into the host document is handled
//! by the [`splice`] submodule.

pub mod splice;

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::Datelike;

use crate::aggregate::{MonthKey, MonthlyBucket, WeekKey, WeeklyBucket};
use crate::core::constants::{formatting, record_list_styles};
use crate::core::error::RunlogError;
use crate::core::types::LogRecord;

pub use splice::{MarkerRegion, splice_region};

/// Presentation style of the record-index listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordListStyle {
    /// Flat Markdown list, newest record first
    Flat,
    /// Collapsible HTML `<details>` groups per year and month
    Nested,
}

impl FromStr for RecordListStyle {
    type Err = RunlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            record_list_styles::FLAT => Ok(Self::Flat),
            record_list_styles::NESTED => Ok(Self::Nested),
            other => Err(RunlogError::InvalidArgument(format!(
                "Invalid record list style '{other}'. Expected one of: {}.",
                record_list_styles::ALL.join(", ")
            ))),
        }
    }
}

/// Fixed one-decimal distance rendering, e.g. `10.5 km`.
pub fn format_distance_km(km: f64) -> String {
    format!("{km:.1} km")
}

/// Total duration as `H時間MM分`, truncating sub-minute remainders.
pub fn format_duration_hm(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    format!("{hours}時間{minutes:02}分")
}

/// Average pace as `M'SS/km`, or the not-applicable sentinel when the
/// total distance is zero (never divides by zero).
pub fn format_pace(total_secs: u64, total_km: f64) -> String {
    if total_km == 0.0 {
        return formatting::PACE_NOT_APPLICABLE.to_string();
    }

    let pace_sec_per_km = total_secs as f64 / total_km;
    let pace_minutes = (pace_sec_per_km / 60.0) as u64;
    let pace_seconds = (pace_sec_per_km % 60.0) as u64;

    format!("{pace_minutes}'{pace_seconds:02}/km")
}

/// Render the monthly-summary fragment, most recent month first.
pub fn render_monthly_summary(buckets: &BTreeMap<MonthKey, MonthlyBucket>) -> String {
    let lines: Vec<String> = buckets
        .iter()
        .rev()
        .map(|(key, bucket)| {
            format!(
                "- **{}**: 距離 **{}**, 時間 **{}**, 平均ペース **{}**",
                key.display(),
                format_distance_km(bucket.total_distance_km),
                format_duration_hm(bucket.total_secs),
                format_pace(bucket.total_secs, bucket.total_distance_km),
            )
        })
        .collect();

    lines.join("\n")
}

/// Render the weekly-summary fragment, most recent week first.
pub fn render_weekly_summary(buckets: &BTreeMap<WeekKey, WeeklyBucket>) -> String {
    let lines: Vec<String> = buckets
        .iter()
        .rev()
        .map(|(key, bucket)| {
            format!(
                "- **{}** ({}〜{}): 距離 **{}**, 時間 **{}**, 平均ペース **{}**, 最長 **{}**（{}）",
                key.display(),
                format_month_day(bucket.monday),
                format_month_day(bucket.sunday),
                format_distance_km(bucket.total_distance_km),
                format_duration_hm(bucket.total_secs),
                format_pace(bucket.total_secs, bucket.total_distance_km),
                format_distance_km(bucket.longest.distance_km),
                format_month_day(bucket.longest.date),
            )
        })
        .collect();

    lines.join("\n")
}

fn format_month_day(date: chrono::NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.day())
}

/// Render the record-index fragment in the requested style.
///
/// Records render in descending date order with descending same-day
/// sequence as the secondary key, so the latest attempt of a day is
/// always listed first.
pub fn render_record_list(records: &[LogRecord], style: RecordListStyle) -> String {
    let mut sorted: Vec<&LogRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

    match style {
        RecordListStyle::Flat => render_flat_list(&sorted),
        RecordListStyle::Nested => render_nested_list(&sorted),
    }
}

fn render_flat_list(sorted: &[&LogRecord]) -> String {
    let lines: Vec<String> = sorted
        .iter()
        .map(|record| format!("- [{}]({})", record.display_title(), record.link_path))
        .collect();

    lines.join("\n")
}

/// Collapsible year/month groups: years descending and expanded by
/// default, months ascending within a year, records descending within
/// a month.
fn render_nested_list(sorted: &[&LogRecord]) -> String {
    // Group while preserving the already-descending record order
    let mut by_year_month: BTreeMap<i32, BTreeMap<u32, Vec<&LogRecord>>> = BTreeMap::new();
    for &record in sorted {
        by_year_month
            .entry(record.date.year())
            .or_default()
            .entry(record.date.month())
            .or_default()
            .push(record);
    }

    let mut lines: Vec<String> = Vec::new();
    for (year, months) in by_year_month.iter().rev() {
        lines.push("<details open>".to_string());
        lines.push(format!("  <summary><h3>{year}年</h3></summary>"));
        lines.push("  <ul>".to_string());

        for (month, records) in months {
            lines.push("    <li>".to_string());
            lines.push("      <details>".to_string());
            lines.push(format!(
                "        <summary><strong>{month:02}月</strong></summary>"
            ));
            lines.push("        <ul>".to_string());

            for record in records {
                lines.push(format!(
                    "          <li><a href=\"{}\">{}</a></li>",
                    record.link_path,
                    record.display_title()
                ));
            }

            lines.push("        </ul>".to_string());
            lines.push("      </details>".to_string());
            lines.push("    </li>".to_string());
        }

        lines.push("  </ul>".to_string());
        lines.push("</details>".to_string());
    }

    lines.join("\n")
}
