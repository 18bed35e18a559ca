//! Pipeline orchestration: ingest the datasets, run every analyzer,
//! accumulate non-fatal errors, emit progress events.

pub mod runner;
pub mod types;

pub use runner::Pipeline;
pub use types::{AnalysisBundle, DatasetSummary};
