//! Monthly booking trend from the start date column.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use prism_core::types::collections::FxHashMap;
use prism_core::types::Job;

/// Jobs starting in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    /// `YYYY-MM`.
    pub month: String,
    pub jobs: u64,
}

/// The date renditions the export has been seen to use.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a start-date cell into its `YYYY-MM` month key.
pub fn month_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.format("%Y-%m").to_string());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d.format("%Y-%m").to_string());
        }
    }
    // Timestamps with fractional seconds or timezone suffixes: retry on the
    // leading date part alone.
    if let Some(prefix) = trimmed.get(..10) {
        if let Ok(d) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(d.format("%Y-%m").to_string());
        }
    }
    None
}

/// Count unique jobs per start month, sorted chronologically.
/// Returns the trend plus the number of jobs with unparseable dates.
pub fn monthly_jobs(jobs: &[Job]) -> (Vec<MonthCount>, u64) {
    let mut by_month: FxHashMap<String, u64> = FxHashMap::default();
    let mut unparsed = 0u64;

    for job in jobs {
        let raw = &job.first().start_date_time;
        if raw.trim().is_empty() {
            continue;
        }
        match month_key(raw) {
            Some(month) => *by_month.entry(month).or_insert(0) += 1,
            None => unparsed += 1,
        }
    }

    let mut trend: Vec<MonthCount> = by_month
        .into_iter()
        .map(|(month, jobs)| MonthCount { month, jobs })
        .collect();
    trend.sort_by(|a, b| a.month.cmp(&b.month));

    (trend, unparsed)
}
