//! Error types for gifcolors-report

use thiserror::Error;

/// Errors that can occur while writing reports
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing a report or reading report metadata failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An index page was requested for zero reports
    #[error("index page has no entries")]
    NoEntries,
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;
