//! Errors raised by the analyzers.

/// Errors that can occur while running an analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Dataset {name} is empty; nothing to analyze")]
    EmptyDataset { name: String },

    /// A date cell that none of the accepted formats could parse.
    /// Non-fatal: the row is skipped in the monthly trend.
    #[error("Unparseable date value: {value}")]
    DateParse { value: String },

    #[error("Analysis section {section} failed: {message}")]
    Section { section: String, message: String },
}
