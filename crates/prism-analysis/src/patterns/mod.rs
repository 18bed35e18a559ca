//! Structured-field pattern analysis at job level.

pub mod combos;
pub mod fields;
pub mod matrix;
pub mod numeric;
pub mod outliers;
pub mod trend;

use serde::{Deserialize, Serialize};

use prism_core::config::AnalysisConfig;
use prism_core::types::Job;

pub use combos::ComboFrequency;
pub use fields::FieldFrequency;
pub use matrix::CooccurrenceMatrix;
pub use numeric::NumericSummary;
pub use outliers::OutlierRow;
pub use trend::MonthCount;

use crate::counts::FreqEntry;

/// Result of the structured-pattern analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternsAnalysis {
    pub fields: Vec<FieldFrequency>,
    pub numeric: Vec<NumericSummary>,
    pub outliers: Vec<OutlierRow>,
    pub combos: Vec<ComboFrequency>,
    pub full_patterns: Vec<FreqEntry>,
    pub heatmap: CooccurrenceMatrix,
    pub monthly: Vec<MonthCount>,
    /// Rows whose start date none of the accepted formats could parse.
    pub unparsed_dates: u64,
}

/// Run all structured-field analyses over deduplicated jobs.
pub fn analyze(jobs: &[Job], config: &AnalysisConfig) -> PatternsAnalysis {
    let top = config.effective_top_combinations();

    let (monthly, unparsed_dates) = trend::monthly_jobs(jobs);

    PatternsAnalysis {
        fields: fields::analyze(jobs),
        numeric: numeric::analyze(jobs),
        outliers: outliers::scan_jobs(jobs, config.effective_outlier_multiplier()),
        combos: combos::analyze(jobs, top),
        full_patterns: combos::full_patterns(jobs, config.effective_top_full_patterns()),
        heatmap: matrix::type_location_matrix(jobs),
        monthly,
        unparsed_dates,
    }
}
