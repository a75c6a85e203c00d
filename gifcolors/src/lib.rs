//! gifcolors - palette color counts for indexed GIF images
//!
//! Reads indexed GIFs, counts how many pixels use each palette color
//! and writes an HTML report next to each image, plus an index page
//! when a batch produced several reports.
//!
//! # Example
//!
//! ```
//! use gifcolors::{ColorHistogram, Palette, ReportModel};
//! use gifcolors::pix::decode::decode;
//!
//! let palette = Palette::from_rgb_bytes(4, &[0, 0, 0, 255, 255, 255]).unwrap();
//! let hist = ColorHistogram::accumulate(decode(&[0x01, 0x10], 4, 1, 4).unwrap());
//! assert_eq!(hist.count(0), 2);
//! assert_eq!(hist.count(1), 2);
//!
//! let report = ReportModel::new("bw.gif", 4, 1, &hist.to_sorted_report(&palette).unwrap());
//! assert_eq!(report.rows[0].hex, "000000");
//! ```

pub mod batch;

// Re-export core types (primary data structures used everywhere)
pub use gifcolors_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use gifcolors_io as io;
pub use gifcolors_report as report;

pub use batch::{
    BatchConfig, BatchError, BatchResult, BatchSummary, collect_inputs, process_image, run_batch,
};
