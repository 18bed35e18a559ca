//! Report rendering and site assembly errors.

/// Errors that can occur while rendering reports or assembling the site.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to render {format} report: {message}")]
    Render { format: String, message: String },

    #[error("Unknown report format: {format}")]
    UnknownFormat { format: String },

    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },
}
