//! gifcolors core - palette index decoding and color counting
//!
//! This crate provides the data structures and the counting pass
//! behind gifcolors reports:
//!
//! - [`IndexedImage`] - packed indexed pixels with their [`Palette`]
//! - [`PixelIndexDecoder`] - packed buffer to palette indices
//! - [`ColorHistogram`] - occurrence count per palette index
//! - [`ReportModel`] - per-color rows handed to the renderer
//!
//! # Example
//!
//! ```
//! use gifcolors_core::{ColorHistogram, Palette, ReportModel, pix::decode::decode};
//!
//! let palette = Palette::from_rgb_bytes(8, &[0, 0, 0, 255, 255, 255, 255, 0, 0]).unwrap();
//! let indices = decode(&[0x00, 0x01, 0x01, 0x02], 2, 2, 8).unwrap();
//! let hist = ColorHistogram::accumulate(indices);
//! let stats = hist.to_sorted_report(&palette).unwrap();
//! let report = ReportModel::new("tiny.gif", 2, 2, &stats);
//! assert_eq!(report.color_count(), 3);
//! assert_eq!(report.rows[1].percentage_text, "50.000");
//! ```

pub mod colormap;
pub mod error;
pub mod pix;
pub mod report;

pub use colormap::{Palette, Rgb};
pub use error::{Error, Result};
pub use pix::{
    ColorHistogram, ColorStat, IndexedImage, PixelDepth, PixelIndexDecoder, PixelIndices, RowScan,
};
pub use report::{ReportModel, ReportRow};

/// Count the colors of `image` and assemble its report.
///
/// Runs the decoder, the histogram and the report assembly in one go.
pub fn count_colors(image: &IndexedImage, name: &str, scan: RowScan) -> Result<ReportModel> {
    let hist = ColorHistogram::accumulate(image.indices(scan)?);
    tracing::debug!(
        colors = hist.color_count(),
        total_pixels = hist.total_pixels(),
        "counted palette indices"
    );
    let stats = hist.to_sorted_report(image.palette())?;
    Ok(ReportModel::new(name, image.width(), image.height(), &stats))
}
