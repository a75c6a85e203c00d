//! I/O error types
//!
//! Provides a unified error type for reading images. The GIF module
//! maps `gif` crate errors into `IoError` variants so that callers
//! only need to handle one error type.

use thiserror::Error;

/// Error type for image input.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not an indexed-color GIF, or GIF support is not
    /// enabled via features
    #[error("unsupported image format: {0}")]
    UnsupportedImageFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The GIF decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An error from the core library (e.g. palette or dimension checks)
    #[error("core error: {0}")]
    Core(#[from] gifcolors_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
