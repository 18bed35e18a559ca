//! Pipeline errors and non-fatal error collection.

use super::{AnalysisError, ConfigError, IngestError, ReportError, StorageError};

/// Errors that can occur during pipeline execution.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result of a pipeline run that accumulates non-fatal errors.
/// Allows partial results to be returned even when some rows or sections fail.
#[derive(Debug, Default)]
pub struct PipelineReport<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineReport<T> {
    /// Create a new report wrapping the given data.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the report.
    pub fn add_error(&mut self, error: impl Into<PipelineError>) {
        self.errors.push(error.into());
    }

    /// Absorb the errors of another report, keeping our own data.
    pub fn absorb<U: Default>(&mut self, other: PipelineReport<U>) -> U {
        self.errors.extend(other.errors);
        other.data
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_accumulates_errors() {
        let mut report: PipelineReport<u32> = PipelineReport::new(7);
        assert!(report.is_clean());

        report.add_error(IngestError::Row {
            path: "a.csv".into(),
            line: 3,
            message: "ragged row".into(),
        });
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.data, 7);
    }

    #[test]
    fn absorb_merges_errors_and_returns_data() {
        let mut outer: PipelineReport<()> = PipelineReport::default();
        let mut inner: PipelineReport<Vec<u8>> = PipelineReport::new(vec![1, 2]);
        inner.add_error(AnalysisError::EmptyDataset { name: "voc".into() });

        let data = outer.absorb(inner);
        assert_eq!(data, vec![1, 2]);
        assert_eq!(outer.error_count(), 1);
    }
}
