//! Batch processing of GIF files
//!
//! Each file is read, counted and reported on its own. A file that
//! fails is logged and skipped; the batch fails only when no report
//! at all could be written.

use gifcolors_core::{RowScan, count_colors};
use gifcolors_io::{IoError, read_image};
use gifcolors_report::{
    IndexEntry, IndexPage, ReportError, render_image_report, report_path_for, write_report,
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors of a batch run or of a single file within it
#[derive(Debug, Error)]
pub enum BatchError {
    /// Listing the input directory failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading the image failed
    #[error(transparent)]
    Read(#[from] IoError),

    /// Decoding or counting failed
    #[error(transparent)]
    Core(#[from] gifcolors_core::Error),

    /// Writing a report failed
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Every file of the batch failed
    #[error("no files generated")]
    NothingGenerated,
}

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;

/// Settings of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Row scan mode used for every image
    pub row_scan: RowScan,
    /// Write `index.html` when more than one report was generated
    pub write_index: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            row_scan: RowScan::Truncated,
            write_index: true,
        }
    }
}

/// Outcome of [`run_batch`]
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Reports written, in input order
    pub generated: Vec<PathBuf>,
    /// Inputs that were skipped, with the reason
    pub skipped: Vec<(PathBuf, BatchError)>,
    /// Index page, if one was written
    pub index: Option<PathBuf>,
}

/// Check for a case-insensitive `gif` name ending.
pub fn has_gif_extension(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase().ends_with("gif"))
        .unwrap_or(false)
}

/// Resolve the command-line path into the files to process.
///
/// A directory yields its GIF entries sorted by name; a file yields
/// itself if it has a GIF name, and nothing otherwise.
pub fn collect_inputs(path: &Path) -> BatchResult<Vec<PathBuf>> {
    if path.is_dir() {
        let mut files = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry_path = entry?.path();
            if entry_path.is_file() && has_gif_extension(&entry_path) {
                files.push(entry_path);
            }
        }
        files.sort();
        Ok(files)
    } else if has_gif_extension(path) {
        Ok(vec![path.to_path_buf()])
    } else {
        Ok(Vec::new())
    }
}

/// Count the colors of one GIF and write its report, returning the
/// report path.
pub fn process_image(path: &Path, config: &BatchConfig) -> BatchResult<PathBuf> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::info!(file = %name, "processing");

    let image = read_image(path)?;
    let model = count_colors(&image, &name, config.row_scan)?;
    tracing::debug!(
        file = %name,
        colors = model.color_count(),
        total_pixels = model.total_pixels(),
        "counted colors"
    );

    let out = report_path_for(path);
    write_report(&out, &render_image_report(&model))?;
    Ok(out)
}

/// Process every input, skipping the ones that fail.
///
/// # Errors
///
/// [`BatchError::NothingGenerated`] if no report was written. A failure
/// to write the index page is logged and leaves `index` unset.
pub fn run_batch(inputs: &[PathBuf], config: &BatchConfig) -> BatchResult<BatchSummary> {
    let mut summary = BatchSummary::default();

    for path in inputs {
        match process_image(path, config) {
            Ok(out) => {
                // two inputs may differ only in case and share a report
                if !summary.generated.contains(&out) {
                    summary.generated.push(out);
                }
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping file");
                summary.skipped.push((path.clone(), e));
            }
        }
    }

    if summary.generated.is_empty() {
        return Err(BatchError::NothingGenerated);
    }

    if config.write_index && summary.generated.len() > 1 {
        match write_index(&summary.generated) {
            Ok(path) => summary.index = Some(path),
            Err(e) => tracing::error!(error = %e, "could not write index page"),
        }
    }

    Ok(summary)
}

fn write_index(reports: &[PathBuf]) -> Result<PathBuf, ReportError> {
    let mut index = IndexPage::new();
    for report in reports {
        index.append(IndexEntry::from_path(report)?);
    }
    index.write()
}
