//! Error handling for Prism.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod ingest_error;
pub mod pipeline_error;
pub mod report_error;
pub mod storage_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use ingest_error::IngestError;
pub use pipeline_error::{PipelineError, PipelineReport};
pub use report_error::ReportError;
pub use storage_error::StorageError;
