//! gifcolors-report - HTML color reports
//!
//! Renders a [`ReportModel`](gifcolors_core::ReportModel) as a
//! self-contained HTML page written next to its GIF, and builds the
//! index page that links the reports of a batch.

mod error;
pub mod html;
pub mod index;

pub use error::{ReportError, ReportResult};
pub use html::{escape, render_image_report};
pub use index::{INDEX_FILE_NAME, IndexEntry, IndexPage};

use std::fs;
use std::path::{Path, PathBuf};

/// Path of the report for `gif_path`.
///
/// Same directory, file name lowercased with `.gif` replaced by
/// `.html`. A name without `.gif` gets `.html` appended so the report
/// never overwrites its image.
pub fn report_path_for<P: AsRef<Path>>(gif_path: P) -> PathBuf {
    let gif_path = gif_path.as_ref();
    let name = gif_path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let mut report_name = name.replace(".gif", ".html");
    if report_name == name {
        report_name.push_str(".html");
    }
    gif_path.with_file_name(report_name)
}

/// Write a rendered page to `path` as UTF-8.
pub fn write_report<P: AsRef<Path>>(path: P, html: &str) -> ReportResult<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), bytes = html.len(), "writing report");
    fs::write(path, html)?;
    Ok(())
}
