//! Combination analysis: which field values book together.

use serde::{Deserialize, Serialize};

use prism_core::types::Job;

use crate::counts::{Counter, FreqEntry};

/// Frequency table for one combination family.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComboFrequency {
    /// Family label, e.g. "shoot_type + location".
    pub kind: String,
    pub entries: Vec<FreqEntry>,
}

/// Pairwise combination families over the cross product of each job's values.
pub fn analyze(jobs: &[Job], top: usize) -> Vec<ComboFrequency> {
    let job_count = jobs.len() as u64;

    let families: [(&str, fn(&Job) -> (&[String], &[String])); 3] = [
        ("shoot_type + location", |j| {
            (&j.first().shoot_types, &j.first().shoot_locations)
        }),
        ("shoot_type + usage", |j| {
            (&j.first().shoot_types, &j.first().usages)
        }),
        ("location + usage", |j| {
            (&j.first().shoot_locations, &j.first().usages)
        }),
    ];

    families
        .into_iter()
        .map(|(kind, accessor)| {
            let mut counter = Counter::new();
            for job in jobs {
                let (left, right) = accessor(job);
                for a in left {
                    for b in right {
                        counter.add(format!("{a} + {b}"));
                    }
                }
            }
            ComboFrequency {
                kind: kind.to_string(),
                entries: counter.top_with_pct(top, job_count),
            }
        })
        .collect()
}

/// Full patterns: first type + first location + first usage per job,
/// counting only jobs that carry all three fields.
pub fn full_patterns(jobs: &[Job], top: usize) -> Vec<FreqEntry> {
    let job_count = jobs.len() as u64;
    let mut counter = Counter::new();

    for job in jobs {
        let b = job.first();
        if let (Some(t), Some(l), Some(u)) = (
            b.shoot_types.first(),
            b.shoot_locations.first(),
            b.usages.first(),
        ) {
            counter.add(format!("{t} + {l} + {u}"));
        }
    }

    counter.top_with_pct(top, job_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::types::BookingRecord;

    fn job(id: i64, types: &[&str], locations: &[&str], usages: &[&str]) -> Job {
        Job {
            job_id: id,
            bookings: vec![BookingRecord {
                job_id: id,
                shoot_types: types.iter().map(|s| s.to_string()).collect(),
                shoot_locations: locations.iter().map(|s| s.to_string()).collect(),
                usages: usages.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn cross_product_per_job() {
        let jobs = vec![
            job(1, &["photo"], &["studio", "outdoor"], &["sns"]),
            job(2, &["photo"], &["studio"], &["sns"]),
        ];

        let combos = analyze(&jobs, 10);
        let type_loc = combos.iter().find(|c| c.kind == "shoot_type + location").unwrap();
        assert_eq!(type_loc.entries[0].value, "photo + studio");
        assert_eq!(type_loc.entries[0].count, 2);
        assert!(type_loc
            .entries
            .iter()
            .any(|e| e.value == "photo + outdoor" && e.count == 1));
    }

    #[test]
    fn full_pattern_requires_all_three() {
        let jobs = vec![
            job(1, &["photo"], &["studio"], &["sns"]),
            job(2, &["photo"], &[], &["sns"]), // no location — excluded
        ];

        let patterns = full_patterns(&jobs, 10);
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].value, "photo + studio + sns");
        assert_eq!(patterns[0].count, 1);
    }

    #[test]
    fn full_pattern_uses_first_values_only() {
        let jobs = vec![job(1, &["video", "photo"], &["outdoor", "studio"], &["ad"])];
        let patterns = full_patterns(&jobs, 10);
        assert_eq!(patterns[0].value, "video + outdoor + ad");
    }
}
