//! Error types for the test support crate

use thiserror::Error;

/// Errors that can occur while preparing or checking a regression test
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to encode a fixture image
    #[error("failed to encode fixture '{name}': {message}")]
    FixtureEncode { name: String, message: String },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {message}")]
    DirectoryCreate { path: String, message: String },

    /// Fixture dimensions or pixel data are inconsistent
    #[error("invalid fixture '{name}': {message}")]
    InvalidFixture { name: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
