//! Field extraction from log file bodies
//!
//! The label-value line format (`- 距離：10.5km`, `- 時間：45:13`) is an
//! implicit micro-format. This module treats it as a small grammar with
//! explicit rules - field label, required unit, accepted time forms - so
//! new format variants can be added without silently breaking old files.

use regex::Regex;

use crate::core::error::{Result, RunlogError};

/// Extraction outcome for a single field.
///
/// Distinguishes a field that was intentionally omitted (`Absent`) from
/// one that was present but malformed (`Invalid`). The aggregation path
/// collapses both to the zero default; the update flow warns on
/// `Invalid` so bad lines are not silently swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<T> {
    /// Field present with a well-formed value
    Valid(T),
    /// No line carried the field label
    Absent,
    /// The label line was present but the value did not parse
    Invalid,
}

impl<T: Copy> FieldValue<T> {
    /// Collapse the non-valid states to a default value.
    pub fn value_or(&self, default: T) -> T {
        match self {
            FieldValue::Valid(v) => *v,
            FieldValue::Absent | FieldValue::Invalid => default,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldValue::Invalid)
    }
}

/// Result of extracting both fields from one log body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extraction {
    pub distance_km: FieldValue<f64>,
    pub duration_secs: FieldValue<u64>,
}

impl Extraction {
    /// Distance with the documented zero default for absent/invalid fields.
    pub fn distance_km_or_zero(&self) -> f64 {
        self.distance_km.value_or(0.0)
    }

    /// Duration with the documented zero default for absent/invalid fields.
    pub fn duration_secs_or_zero(&self) -> u64 {
        self.duration_secs.value_or(0)
    }
}

/// The compiled line grammar for one pair of field labels.
///
/// Accepted forms:
/// - distance: `- {label}：<decimal>km` (spaces before `km` allowed)
/// - duration: `- {label}：H:MM:SS`, `- {label}：MM:SS`, or the
///   localized `- {label}：H時間M分`
#[derive(Debug)]
pub struct FieldGrammar {
    distance_line: Regex,
    distance_value: Regex,
    duration_line: Regex,
    duration_hms: Regex,
    duration_ms: Regex,
    duration_localized: Regex,
}

impl FieldGrammar {
    /// Compile a grammar from the two field labels.
    pub fn new(distance_label: &str, duration_label: &str) -> Result<Self> {
        if distance_label.trim().is_empty() || duration_label.trim().is_empty() {
            return Err(RunlogError::Grammar(
                "Field labels cannot be empty".to_string(),
            ));
        }

        let distance_line = Regex::new(&format!(
            r"(?m)^-\s*{}：\s*(.*)$",
            regex::escape(distance_label)
        ))?;
        let duration_line = Regex::new(&format!(
            r"(?m)^-\s*{}：\s*(.*)$",
            regex::escape(duration_label)
        ))?;

        Ok(Self {
            distance_line,
            // Deliberately lax number capture so a malformed value like
            // `10.5.3km` is classified Invalid rather than half-matched
            distance_value: Regex::new(r"^([0-9.]+)\s*km")?,
            duration_line,
            duration_hms: Regex::new(r"^([0-9]+):([0-9]+):([0-9]+)")?,
            duration_ms: Regex::new(r"^([0-9]+):([0-9]+)")?,
            duration_localized: Regex::new(r"^([0-9]+)時間([0-9]+)分")?,
        })
    }
}

/// Extract distance and duration fields from one log body.
pub trait ExtractFields {
    fn extract(&self, text: &str) -> Extraction;
}

/// Grammar-driven extractor over a log file's text.
#[derive(Debug)]
pub struct FieldExtractor {
    grammar: FieldGrammar,
}

impl FieldExtractor {
    pub fn new(grammar: FieldGrammar) -> Self {
        Self { grammar }
    }

    fn extract_distance(&self, text: &str) -> FieldValue<f64> {
        let Some(caps) = self.grammar.distance_line.captures(text) else {
            return FieldValue::Absent;
        };
        let rest = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

        match self.grammar.distance_value.captures(rest) {
            Some(value) => match value[1].parse::<f64>() {
                Ok(km) if km.is_finite() => FieldValue::Valid(km),
                _ => FieldValue::Invalid,
            },
            None => FieldValue::Invalid,
        }
    }

    fn extract_duration(&self, text: &str) -> FieldValue<u64> {
        let Some(caps) = self.grammar.duration_line.captures(text) else {
            return FieldValue::Absent;
        };
        let rest = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

        // H:MM:SS is tried before MM:SS so `1:05:52` is not read as 1m05s
        if let Some(hms) = self.grammar.duration_hms.captures(rest) {
            return duration_from_parts(&hms[1], &hms[2], Some(&hms[3]));
        }
        if let Some(ms) = self.grammar.duration_ms.captures(rest) {
            return duration_from_parts("0", &ms[1], Some(&ms[2]));
        }
        if let Some(localized) = self.grammar.duration_localized.captures(rest) {
            return duration_from_parts(&localized[1], &localized[2], None);
        }

        FieldValue::Invalid
    }
}

impl ExtractFields for FieldExtractor {
    fn extract(&self, text: &str) -> Extraction {
        Extraction {
            distance_km: self.extract_distance(text),
            duration_secs: self.extract_duration(text),
        }
    }
}

fn duration_from_parts(hours: &str, minutes: &str, seconds: Option<&str>) -> FieldValue<u64> {
    let parse = |s: &str| s.parse::<u64>().ok();

    let (Some(h), Some(m)) = (parse(hours), parse(minutes)) else {
        return FieldValue::Invalid;
    };
    let s = match seconds {
        Some(raw) => match parse(raw) {
            Some(s) => s,
            None => return FieldValue::Invalid,
        },
        None => 0,
    };

    match h
        .checked_mul(3600)
        .and_then(|hs| hs.checked_add(m.saturating_mul(60)))
        .and_then(|total| total.checked_add(s))
    {
        Some(total) => FieldValue::Valid(total),
        None => FieldValue::Invalid,
    }
}
