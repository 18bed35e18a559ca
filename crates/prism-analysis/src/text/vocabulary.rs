//! Vocabulary analysis over job names and inquiry texts (job level).

use serde::{Deserialize, Serialize};

use prism_core::config::AnalysisConfig;
use prism_core::types::Job;

use crate::counts::{CountEntry, Counter, GlossedCount};
use crate::glossary::Glossary;

use super::clean::clean_text;
use super::concept;
use super::phrases::extract_phrases;
use super::script::{detect_script, Script};

/// Result of the vocabulary analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyAnalysis {
    pub total_jobs: u64,
    pub unique_phrases: u64,
    /// Inquiry-language distribution (korean / english / other / unknown).
    pub language_distribution: Vec<CountEntry>,
    pub top_job_names: Vec<GlossedCount>,
    pub top_phrases: Vec<GlossedCount>,
    pub concept_mentions: Vec<CountEntry>,
}

/// Run the vocabulary analysis over deduplicated jobs.
pub fn analyze(jobs: &[Job], config: &AnalysisConfig) -> VocabularyAnalysis {
    let glossary = Glossary::shared();

    let mut languages = Counter::new();
    let mut job_names = Counter::new();
    let mut phrases = Counter::new();
    let mut english_views: Vec<String> = Vec::with_capacity(jobs.len());

    for job in jobs {
        let booking = job.first();

        let script = detect_script(&booking.inquiry_text);
        languages.add(script.name());

        let name_clean = clean_text(&booking.job_name);
        if !name_clean.is_empty() {
            job_names.add(name_clean);
        }

        let inquiry_clean = clean_text(&booking.inquiry_text);
        phrases.extend(extract_phrases(&inquiry_clean));

        // Concept words are English; for Korean inquiries the glossary
        // keywords stand in for the English side of the text.
        match script {
            Script::English => english_views.push(booking.inquiry_text.clone()),
            _ => english_views.push(glossary.keywords_in(&booking.inquiry_text).join(" ")),
        }
    }

    let top_job_names = with_gloss(job_names.top(config.effective_top_job_names()), glossary);
    let top_phrases = with_gloss(phrases.top(config.effective_top_phrases()), glossary);
    let concept_mentions = concept::scan(english_views.iter().map(String::as_str));

    VocabularyAnalysis {
        total_jobs: jobs.len() as u64,
        unique_phrases: phrases.unique() as u64,
        language_distribution: languages.ranked(),
        top_job_names,
        top_phrases,
        concept_mentions,
    }
}

fn with_gloss(entries: Vec<CountEntry>, glossary: &Glossary) -> Vec<GlossedCount> {
    entries
        .into_iter()
        .map(|e| GlossedCount {
            gloss: glossary.gloss(&e.value),
            value: e.value,
            count: e.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::types::BookingRecord;

    fn job(id: i64, name: &str, inquiry: &str) -> Job {
        Job {
            job_id: id,
            bookings: vec![BookingRecord {
                job_id: id,
                job_name: name.to_string(),
                inquiry_text: inquiry.to_string(),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn counts_job_names_and_languages() {
        let jobs = vec![
            job(1, "봄 룩북", "미니멀 룩북 촬영 문의드립니다"),
            job(2, "봄 룩북", "Minimal concept lookbook shoot"),
            job(3, "Campaign", "campaign video for spring launch"),
        ];

        let analysis = analyze(&jobs, &AnalysisConfig::default());
        assert_eq!(analysis.total_jobs, 3);

        let korean = analysis
            .language_distribution
            .iter()
            .find(|e| e.value == "korean")
            .unwrap();
        assert_eq!(korean.count, 1);

        assert_eq!(analysis.top_job_names[0].value, "봄 룩북");
        assert_eq!(analysis.top_job_names[0].count, 2);
        assert_eq!(
            analysis.top_job_names[0].gloss.as_deref(),
            Some("spring, lookbook")
        );
    }

    #[test]
    fn concept_scan_uses_glossary_for_korean_inquiries() {
        let jobs = vec![job(1, "룩북", "미니멀 컨셉 룩북 촬영")];
        let analysis = analyze(&jobs, &AnalysisConfig::default());

        let minimal = analysis
            .concept_mentions
            .iter()
            .find(|e| e.value == "minimal");
        assert!(minimal.is_some());
    }

    #[test]
    fn empty_jobs_produce_empty_analysis() {
        let analysis = analyze(&[], &AnalysisConfig::default());
        assert_eq!(analysis.total_jobs, 0);
        assert!(analysis.top_phrases.is_empty());
    }
}
