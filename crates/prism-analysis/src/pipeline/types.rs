//! The analysis bundle — everything a run produces, ready for persistence
//! and rendering.

use serde::{Deserialize, Serialize};

use prism_core::types::collections::FxHashSet;
use prism_core::types::Job;

use crate::counts::{CountEntry, Counter};
use crate::ingest::Dataset;
use crate::keywords::KeywordsAnalysis;
use crate::patterns::PatternsAnalysis;
use crate::text::VocabularyAnalysis;
use crate::voc::VocAnalysis;

/// Headline dataset metrics for the executive summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_bookings: u64,
    pub unique_jobs: u64,
    pub unique_models: u64,
    pub unique_clients: u64,
    pub unique_brands: u64,
    pub top_regions: Vec<CountEntry>,
    pub top_nationalities: Vec<CountEntry>,
    pub avg_price_client: Option<f64>,
    pub avg_price_talent: Option<f64>,
    pub avg_shoot_hours: Option<f64>,
}

impl DatasetSummary {
    /// Compute the headline metrics. Regions count jobs; nationalities count
    /// bookings, matching how each is read operationally.
    pub fn compute(dataset: &Dataset) -> Self {
        let mut models: FxHashSet<i64> = FxHashSet::default();
        let mut clients: FxHashSet<i64> = FxHashSet::default();
        let mut brands: FxHashSet<&str> = FxHashSet::default();
        let mut nationalities = Counter::new();

        for booking in &dataset.bookings {
            if let Some(id) = booking.talent_id {
                models.insert(id);
            }
            if let Some(id) = booking.client_id {
                clients.insert(id);
            }
            if !booking.brand_name.is_empty() {
                brands.insert(booking.brand_name.as_str());
            }
            if !booking.talent_nationality.is_empty() {
                nationalities.add(booking.talent_nationality.clone());
            }
        }

        let mut regions = Counter::new();
        for job in &dataset.jobs {
            if !job.first().region.is_empty() {
                regions.add(job.first().region.clone());
            }
        }

        DatasetSummary {
            total_bookings: dataset.bookings.len() as u64,
            unique_jobs: dataset.jobs.len() as u64,
            unique_models: models.len() as u64,
            unique_clients: clients.len() as u64,
            unique_brands: brands.len() as u64,
            top_regions: regions.top(10),
            top_nationalities: nationalities.top(10),
            avg_price_client: mean(dataset.jobs.iter().filter_map(|j| j.first().price_client)),
            avg_price_talent: mean(dataset.jobs.iter().filter_map(|j| j.first().price_talent)),
            avg_shoot_hours: mean(dataset.jobs.iter().filter_map(|j| j.first().shoot_hours)),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let values: Vec<f64> = values.filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Everything one pipeline run produces.
///
/// `voc` and `keywords` are None when their input datasets were absent —
/// the corresponding report sections are then skipped, never fabricated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisBundle {
    /// RFC 3339 timestamp of the run.
    pub generated_at: String,
    pub summary: DatasetSummary,
    pub vocabulary: VocabularyAnalysis,
    pub patterns: PatternsAnalysis,
    pub voc: Option<VocAnalysis>,
    pub keywords: Option<KeywordsAnalysis>,
    /// Jobs carried along for the visual dashboard page.
    pub jobs: Vec<Job>,
}
