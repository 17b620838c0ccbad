//! Aggregation of log records into monthly and ISO-weekly buckets
//!
//! Buckets live in a `BTreeMap` so rendering order is deterministic;
//! the sums themselves are a commutative fold, so any permutation of
//! the same record set yields identical totals.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{Datelike, Days, NaiveDate};

use crate::core::types::LogRecord;

/// Year-month grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Human-readable form, e.g. `2025年07月`.
    pub fn display(&self) -> String {
        format!("{}年{:02}月", self.year, self.month)
    }
}

/// ISO year-week grouping key (Monday is the first day of the week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Human-readable form, e.g. `2025-W31`.
    pub fn display(&self) -> String {
        format!("{}-W{:02}", self.year, self.week)
    }
}

/// Accumulated totals for one calendar month.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MonthlyBucket {
    pub total_distance_km: f64,
    pub total_secs: u64,
    pub count: usize,
}

/// Accumulated totals for one ISO week, with the longest single run and
/// the Monday/Sunday calendar bounds of the week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyBucket {
    pub total_distance_km: f64,
    pub total_secs: u64,
    pub count: usize,
    pub longest: LogRecord,
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
}

impl WeeklyBucket {
    fn seeded(record: &LogRecord) -> Self {
        let (monday, sunday) = week_bounds(record.date);
        Self {
            total_distance_km: record.distance_km,
            total_secs: record.duration_secs,
            count: 1,
            longest: record.clone(),
            monday,
            sunday,
        }
    }
}

/// Monday and Sunday of the ISO week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));
    let sunday = monday + Days::new(6);
    (monday, sunday)
}

/// Fold records into per-month buckets.
pub fn aggregate_monthly(records: &[LogRecord]) -> BTreeMap<MonthKey, MonthlyBucket> {
    let mut buckets: BTreeMap<MonthKey, MonthlyBucket> = BTreeMap::new();

    for record in records {
        let bucket = buckets.entry(MonthKey::of(record.date)).or_default();
        bucket.total_distance_km += record.distance_km;
        bucket.total_secs += record.duration_secs;
        bucket.count += 1;
    }

    buckets
}

/// Fold records into per-ISO-week buckets.
///
/// The longest run uses a strict greater-than comparison, so the
/// first-seen record wins distance ties.
pub fn aggregate_weekly(records: &[LogRecord]) -> BTreeMap<WeekKey, WeeklyBucket> {
    let mut buckets: BTreeMap<WeekKey, WeeklyBucket> = BTreeMap::new();

    for record in records {
        match buckets.entry(WeekKey::of(record.date)) {
            Entry::Vacant(slot) => {
                slot.insert(WeeklyBucket::seeded(record));
            }
            Entry::Occupied(mut slot) => {
                let bucket = slot.get_mut();
                bucket.total_distance_km += record.distance_km;
                bucket.total_secs += record.duration_secs;
                bucket.count += 1;
                if record.distance_km > bucket.longest.distance_km {
                    bucket.longest = record.clone();
                }
            }
        }
    }

    buckets
}
