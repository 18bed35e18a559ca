//! Layered configuration for Prism.

pub mod analysis_config;
pub mod ingest_config;
pub mod prism_config;
pub mod report_config;
pub mod storage_config;

pub use analysis_config::AnalysisConfig;
pub use ingest_config::IngestConfig;
pub use prism_config::{CliOverrides, PrismConfig};
pub use report_config::ReportConfig;
pub use storage_config::StorageConfig;
