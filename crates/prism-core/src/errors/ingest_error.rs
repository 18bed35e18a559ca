//! Errors raised while loading and shaping the CSV datasets.

/// Errors that can occur during dataset ingest.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Dataset file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("CSV error in {path}: {message}")]
    Csv { path: String, message: String },

    /// A single malformed row. Non-fatal: the row is skipped and the
    /// error is accumulated on the load result.
    #[error("Bad row {line} in {path}: {message}")]
    Row {
        path: String,
        line: u64,
        message: String,
    },

    #[error("Dataset {name} is missing required column {column}")]
    MissingColumn { name: String, column: String },
}
