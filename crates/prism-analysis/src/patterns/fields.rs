//! Per-field frequency analysis of the multi-value booking columns.

use serde::{Deserialize, Serialize};

use prism_core::types::Job;

use crate::counts::{Counter, FreqEntry};

/// Frequency table for one multi-value field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldFrequency {
    pub field: String,
    /// Total value mentions across jobs (with multiplicity).
    pub total_mentions: u64,
    pub unique_values: u64,
    /// Every value with count and percentage of jobs, ranked.
    pub entries: Vec<FreqEntry>,
}

/// The multi-value job columns, with their accessors.
pub(crate) fn multi_value_fields() -> [(&'static str, fn(&Job) -> &[String]); 5] {
    [
        ("shoot_types", |j| &j.first().shoot_types),
        ("shoot_locations", |j| &j.first().shoot_locations),
        ("shoot_details", |j| &j.first().shoot_details),
        ("usages", |j| &j.first().usages),
        ("extra_needs", |j| &j.first().extra_needs),
    ]
}

/// Build the frequency table for every multi-value field.
/// Percentages are per job: a value mentioned by 12 of 100 jobs is 12%.
pub fn analyze(jobs: &[Job]) -> Vec<FieldFrequency> {
    let job_count = jobs.len() as u64;

    multi_value_fields()
        .into_iter()
        .map(|(field, accessor)| {
            let mut counter = Counter::new();
            for job in jobs {
                counter.extend(accessor(job).iter().cloned());
            }

            FieldFrequency {
                field: field.to_string(),
                total_mentions: counter.total(),
                unique_values: counter.unique() as u64,
                entries: counter.top_with_pct(usize::MAX, job_count),
            }
        })
        .collect()
}
