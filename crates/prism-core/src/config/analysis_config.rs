//! Analyzer tuning knobs.

use serde::{Deserialize, Serialize};

/// Top-N limits and thresholds for the analyzers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many inquiry phrases to keep in the vocabulary report.
    pub top_phrases: Option<usize>,
    /// How many job names to keep.
    pub top_job_names: Option<usize>,
    /// How many entries per combination family (type+location etc.).
    pub top_combinations: Option<usize>,
    /// How many full type+location+usage patterns.
    pub top_full_patterns: Option<usize>,
    /// How many model keywords to aggregate per job.
    pub top_model_keywords: Option<usize>,
    /// How many phrases per VOC language.
    pub top_voc_phrases: Option<usize>,
    /// Minimum token length for keyword extraction.
    pub min_token_len: Option<usize>,
    /// Tukey fence multiplier for outlier scans.
    pub outlier_multiplier: Option<f64>,
    /// Representative sentences kept per VOC theme.
    pub representative_sentences: Option<usize>,
}

impl AnalysisConfig {
    pub fn effective_top_phrases(&self) -> usize {
        self.top_phrases.unwrap_or(30)
    }

    pub fn effective_top_job_names(&self) -> usize {
        self.top_job_names.unwrap_or(20)
    }

    pub fn effective_top_combinations(&self) -> usize {
        self.top_combinations.unwrap_or(15)
    }

    pub fn effective_top_full_patterns(&self) -> usize {
        self.top_full_patterns.unwrap_or(20)
    }

    pub fn effective_top_model_keywords(&self) -> usize {
        self.top_model_keywords.unwrap_or(10)
    }

    pub fn effective_top_voc_phrases(&self) -> usize {
        self.top_voc_phrases.unwrap_or(100)
    }

    pub fn effective_min_token_len(&self) -> usize {
        self.min_token_len.unwrap_or(2)
    }

    pub fn effective_outlier_multiplier(&self) -> f64 {
        self.outlier_multiplier.unwrap_or(1.5)
    }

    pub fn effective_representative_sentences(&self) -> usize {
        self.representative_sentences.unwrap_or(5)
    }
}
