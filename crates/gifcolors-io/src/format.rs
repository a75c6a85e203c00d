//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.
//! Only GIF is read; the other signatures are recognized so that the
//! error for a mislabeled file names what it actually is.

use crate::{IoError, IoResult};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// GIF87a
    pub const GIF87A: &[u8] = b"GIF87a";

    /// GIF89a
    pub const GIF89A: &[u8] = b"GIF89a";

    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// TIFF little-endian: II 2A 00
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];

    /// TIFF big-endian: MM 00 2A
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];

    /// WebP: RIFF....WEBP
    pub const RIFF: &[u8] = b"RIFF";
    pub const WEBP: &[u8] = b"WEBP";
}

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Gif,
    Bmp,
    Png,
    Jpeg,
    Tiff,
    WebP,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageFormat::Gif => "GIF",
            ImageFormat::Bmp => "BMP",
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Tiff => "TIFF",
            ImageFormat::WebP => "WebP",
        })
    }
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 12];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::UnsupportedImageFormat(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::GIF87A) || data.starts_with(magic::GIF89A) {
        return Ok(ImageFormat::Gif);
    }
    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }
    if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
        return Ok(ImageFormat::Tiff);
    }
    if data.len() >= 12 && data.starts_with(magic::RIFF) && &data[8..12] == magic::WEBP {
        return Ok(ImageFormat::WebP);
    }
    if data.starts_with(magic::BMP) {
        return Ok(ImageFormat::Bmp);
    }

    Err(IoError::UnsupportedImageFormat(
        "unknown image format".to_string(),
    ))
}
