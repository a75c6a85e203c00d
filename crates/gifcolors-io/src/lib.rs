//! gifcolors-io - Indexed image input
//!
//! Reads GIF files into [`IndexedImage`]s for counting. Any other
//! format, and any GIF without a color table, is rejected with
//! [`IoError::UnsupportedImageFormat`].
//!
//! # Features
//!
//! - `gif-format` (default): GIF decoding via the `gif` crate

mod error;
pub mod format;
#[cfg(feature = "gif-format")]
pub mod gif;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
#[cfg(feature = "gif-format")]
pub use crate::gif::{read_gif, read_gif_file};

use gifcolors_core::IndexedImage;
use std::path::Path;

/// Read an indexed image from a file path.
///
/// The format is sniffed from the file header, not the extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<IndexedImage> {
    let path = path.as_ref();
    match detect_format(path)? {
        #[cfg(feature = "gif-format")]
        ImageFormat::Gif => read_gif_file(path),
        other => Err(IoError::UnsupportedImageFormat(format!(
            "{} images are not supported",
            other
        ))),
    }
}
