//! Heuristic keyword extraction — no external AI, just the glossary,
//! structured fields, style tags, and profile attributes.

pub mod job;
pub mod models;
pub mod tags;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use prism_core::config::AnalysisConfig;
use prism_core::types::{Job, ModelProfileRecord, StyleTagRecord};

use crate::counts::{CountEntry, Counter};
use crate::glossary::Glossary;

pub use job::job_keywords;
pub use models::ModelIndex;
pub use tags::clean_tag_name;

/// Keywords extracted for one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobKeywords {
    pub job_id: i64,
    pub brand_name: String,
    pub job_name: String,
    pub job_keywords: Vec<String>,
    /// Most common keywords across the job's booked models.
    pub model_keywords: Vec<String>,
    pub num_models: u64,
}

/// Result of the keyword analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordsAnalysis {
    pub jobs: Vec<JobKeywords>,
    pub top_job_keywords: Vec<CountEntry>,
    pub top_model_keywords: Vec<CountEntry>,
}

/// Extract keywords for every job. Jobs are independent, so the per-job
/// extraction fans out over rayon.
pub fn analyze(
    jobs: &[Job],
    style_tags: &[StyleTagRecord],
    profiles: &[ModelProfileRecord],
    config: &AnalysisConfig,
) -> KeywordsAnalysis {
    let glossary = Glossary::shared();
    let index = ModelIndex::build(style_tags, profiles);
    let top_model = config.effective_top_model_keywords();

    let job_rows: Vec<JobKeywords> = jobs
        .par_iter()
        .map(|job| extract_for_job(job, glossary, &index, top_model))
        .collect();

    let mut job_counter = Counter::new();
    let mut model_counter = Counter::new();
    for row in &job_rows {
        job_counter.extend(row.job_keywords.iter().cloned());
        model_counter.extend(row.model_keywords.iter().cloned());
    }

    KeywordsAnalysis {
        jobs: job_rows,
        top_job_keywords: job_counter.top(top_model),
        top_model_keywords: model_counter.top(top_model),
    }
}

fn extract_for_job(
    job: &Job,
    glossary: &Glossary,
    index: &ModelIndex,
    top_model: usize,
) -> JobKeywords {
    let first = job.first();

    // Aggregate model keywords across every booking on the job, then keep
    // the most common ones.
    let mut model_counter = Counter::new();
    let mut num_models = 0u64;
    for booking in &job.bookings {
        if let Some(talent_id) = booking.talent_id {
            num_models += 1;
            model_counter.extend(index.model_keywords(talent_id));
        }
    }

    JobKeywords {
        job_id: job.job_id,
        brand_name: first.brand_name.clone(),
        job_name: first.job_name.clone(),
        job_keywords: job_keywords(first, glossary),
        model_keywords: model_counter
            .top(top_model)
            .into_iter()
            .map(|e| e.value)
            .collect(),
        num_models,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::types::BookingRecord;

    #[test]
    fn per_job_keywords_and_model_aggregation() {
        let job = Job {
            job_id: 1,
            bookings: vec![
                BookingRecord {
                    job_id: 1,
                    talent_id: Some(10),
                    job_name: "룩북 촬영".to_string(),
                    shoot_types: vec!["photo".to_string()],
                    ..Default::default()
                },
                BookingRecord {
                    job_id: 1,
                    talent_id: Some(11),
                    ..Default::default()
                },
            ],
        };
        let tags = vec![
            StyleTagRecord { talent_id: 10, tag_name: "Casual".into() },
            StyleTagRecord { talent_id: 11, tag_name: "Casual".into() },
            StyleTagRecord { talent_id: 11, tag_name: "Formal".into() },
        ];

        let analysis = analyze(&[job], &tags, &[], &AnalysisConfig::default());
        assert_eq!(analysis.jobs.len(), 1);

        let row = &analysis.jobs[0];
        assert_eq!(row.num_models, 2);
        assert!(row.job_keywords.contains(&"lookbook".to_string()));
        assert!(row.job_keywords.contains(&"photography".to_string()));
        // "casual" counted twice, ranks first
        assert_eq!(row.model_keywords[0], "casual");

        let top = &analysis.top_model_keywords;
        assert_eq!(top[0].value, "casual");
        assert_eq!(top[0].count, 1); // per-job aggregation counts once
    }

    #[test]
    fn bookings_without_talent_are_not_models() {
        let job = Job {
            job_id: 2,
            bookings: vec![BookingRecord {
                job_id: 2,
                talent_id: None,
                ..Default::default()
            }],
        };
        let analysis = analyze(&[job], &[], &[], &AnalysisConfig::default());
        assert_eq!(analysis.jobs[0].num_models, 0);
    }
}
