//! Error types for gifcolors-core
//!
//! Provides a unified error type for decoding, counting and report
//! assembly. Every variant describes a per-image failure: a batch run
//! skips the offending file and carries on with the rest.

use thiserror::Error;

/// gifcolors error type
#[derive(Error, Debug)]
pub enum Error {
    /// The image is not an indexed-color image backed by a plain byte buffer
    #[error("unsupported image format: {0}")]
    UnsupportedImageFormat(String),

    /// Bits per pixel other than 4 or 8
    #[error("unsupported bit depth: {0} bpp (only 4 and 8 bpp are counted)")]
    UnsupportedFormat(u32),

    /// Packed buffer is shorter than the declared dimensions require
    #[error("truncated pixel data: need {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    /// Decoding produced no pixels, so there is nothing to report
    #[error("no colors decoded")]
    NoColorsDecoded,

    /// A decoded index has no entry in the palette
    #[error("palette index out of range: {index} >= {len}")]
    PaletteIndexOutOfRange { index: u8, len: usize },

    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid pixel depth
    #[error("invalid pixel depth: {0} bpp")]
    InvalidDepth(u32),

    /// Palette already holds `2^depth` colors
    #[error("palette is full ({max} colors)")]
    PaletteFull { max: usize },
}

/// Result type alias for gifcolors operations
pub type Result<T> = std::result::Result<T, Error>;
