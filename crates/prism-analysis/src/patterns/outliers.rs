//! IQR outlier detection with Tukey fences.
//!
//! Resistant to extreme values that inflate stddev. Uses Q1 - k*IQR and
//! Q3 + k*IQR as fences (k = 1.5 default). Applied to the numeric booking
//! columns to surface jobs priced or scheduled far off the norm.

use serde::{Deserialize, Serialize};

use prism_core::types::Job;

use super::numeric::{metrics, percentile};

/// One value flagged by the fence test.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierResult {
    /// Index into the input slice.
    pub index: usize,
    pub value: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
}

/// An outlier job for one metric, as reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierRow {
    pub metric: String,
    pub job_id: i64,
    pub value: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
}

/// Detect outliers using IQR with Tukey fences.
///
/// `values`: the data points. `multiplier`: IQR multiplier for fences.
pub fn detect(values: &[f64], multiplier: f64) -> Vec<OutlierResult> {
    if values.len() < 4 {
        return Vec::new(); // Need at least 4 values for meaningful quartiles
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = percentile(&sorted, 25.0);
    let q3 = percentile(&sorted, 75.0);
    let iqr = q3 - q1;

    if iqr <= 0.0 || !iqr.is_finite() {
        // IQR is zero — most values are identical. Flag values off the median.
        let median = percentile(&sorted, 50.0);
        return values
            .iter()
            .enumerate()
            .filter(|(_, &v)| (v - median).abs() > f64::EPSILON)
            .map(|(index, &value)| OutlierResult {
                index,
                value,
                lower_fence: median,
                upper_fence: median,
            })
            .collect();
    }

    let lower_fence = q1 - multiplier * iqr;
    let upper_fence = q3 + multiplier * iqr;

    values
        .iter()
        .enumerate()
        .filter(|(_, &v)| v < lower_fence || v > upper_fence)
        .map(|(index, &value)| OutlierResult {
            index,
            value,
            lower_fence,
            upper_fence,
        })
        .collect()
}

/// Run the fence test over each numeric job column and report outlier jobs.
pub fn scan_jobs(jobs: &[Job], multiplier: f64) -> Vec<OutlierRow> {
    let mut rows = Vec::new();

    for (metric, accessor) in metrics() {
        let mut job_ids = Vec::new();
        let mut values = Vec::new();
        for job in jobs {
            if let Some(v) = accessor(job) {
                if v.is_finite() {
                    job_ids.push(job.job_id);
                    values.push(v);
                }
            }
        }

        for result in detect(&values, multiplier) {
            rows.push(OutlierRow {
                metric: metric.to_string(),
                job_id: job_ids[result.index],
                value: result.value,
                lower_fence: result.lower_fence,
                upper_fence: result.upper_fence,
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::types::BookingRecord;

    #[test]
    fn no_outliers_in_uniform_spread() {
        let values: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        assert!(detect(&values, 1.5).is_empty());
    }

    #[test]
    fn flags_extreme_value() {
        let mut values = vec![10.0; 20];
        values[3] = 100.0;
        let results = detect(&values, 1.5);
        assert!(results.iter().any(|r| r.index == 3));
    }

    #[test]
    fn identical_values_yield_nothing() {
        assert!(detect(&[5.0; 20], 1.5).is_empty());
    }

    #[test]
    fn too_few_values_yield_nothing() {
        assert!(detect(&[1.0, 100.0, 2.0], 1.5).is_empty());
    }

    #[test]
    fn scan_reports_job_ids() {
        let mut jobs: Vec<Job> = (0..20)
            .map(|i| Job {
                job_id: i,
                bookings: vec![BookingRecord {
                    job_id: i,
                    shoot_hours: Some(4.0),
                    ..Default::default()
                }],
            })
            .collect();
        jobs[7].bookings[0].shoot_hours = Some(48.0);

        let rows = scan_jobs(&jobs, 1.5);
        assert!(rows
            .iter()
            .any(|r| r.metric == "shoot_hours" && r.job_id == 7 && r.value == 48.0));
    }
}
