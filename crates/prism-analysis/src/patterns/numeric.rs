//! Numeric summaries for the quantitative booking columns.

use serde::{Deserialize, Serialize};

use prism_core::types::Job;

/// Summary statistics for one numeric metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub metric: String,
    pub count: u64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// The numeric job columns we summarize, with their accessors.
pub(crate) fn metrics() -> [(&'static str, fn(&Job) -> Option<f64>); 4] {
    [
        ("copyright_months", |j| j.first().copyright_months),
        ("shoot_hours", |j| j.first().shoot_hours),
        ("price_client", |j| j.first().price_client),
        ("price_talent", |j| j.first().price_talent),
    ]
}

/// Summarize every numeric metric that has at least one value.
pub fn analyze(jobs: &[Job]) -> Vec<NumericSummary> {
    metrics()
        .into_iter()
        .filter_map(|(metric, accessor)| {
            let values: Vec<f64> = jobs
                .iter()
                .filter_map(accessor)
                .filter(|v| v.is_finite())
                .collect();
            summarize(metric, &values)
        })
        .collect()
}

/// Summarize one metric. Empty input yields None.
pub fn summarize(metric: &str, values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let sum: f64 = sorted.iter().sum();
    Some(NumericSummary {
        metric: metric.to_string(),
        count: sorted.len() as u64,
        mean: sum / sorted.len() as f64,
        median: percentile(&sorted, 50.0),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

/// Compute percentile over sorted values using linear interpolation.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_basic_stats() {
        let summary = summarize("shoot_hours", &[2.0, 4.0, 4.0, 8.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert!((summary.mean - 4.5).abs() < 1e-9);
        assert!((summary.median - 4.0).abs() < 1e-9);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 8.0);
    }

    #[test]
    fn empty_values_yield_none() {
        assert!(summarize("x", &[]).is_none());
    }

    #[test]
    fn percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&sorted, 50.0) - 2.5).abs() < 1e-9);
        assert!((percentile(&sorted, 0.0) - 1.0).abs() < 1e-9);
        assert!((percentile(&sorted, 100.0) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn single_value_percentile() {
        assert_eq!(percentile(&[7.0], 75.0), 7.0);
    }
}
