//! Index page linking the reports of one batch

use crate::error::{ReportError, ReportResult};
use crate::html::{PAGE_END, escape, page_start};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp layout of the index lines, e.g. `Tue Mar 05 14:07:09 +01:00 2024`
const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// File name of the index page
pub const INDEX_FILE_NAME: &str = "index.html";

/// One generated report listed on the index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Path of the report file
    pub path: PathBuf,
    /// Report size in bytes
    pub size_bytes: u64,
    /// Last modification time of the report
    pub modified: DateTime<Local>,
}

impl IndexEntry {
    /// Describe the report at `path` from its file metadata
    pub fn from_path<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            size_bytes: meta.len(),
            modified: DateTime::<Local>::from(meta.modified()?),
        })
    }

    /// File name used as link target and link text
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Index page collecting links to the per-image reports
#[derive(Debug, Clone, Default)]
pub struct IndexPage {
    entries: Vec<IndexEntry>,
}

impl IndexPage {
    /// Create an empty index page
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a report link
    pub fn append(&mut self, entry: IndexEntry) {
        self.entries.push(entry);
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where the page is written: `index.html` in the directory of
    /// the first entry.
    pub fn output_path(&self) -> ReportResult<PathBuf> {
        let first = self.entries.first().ok_or(ReportError::NoEntries)?;
        let dir = first.path.parent().unwrap_or_else(|| Path::new(""));
        Ok(dir.join(INDEX_FILE_NAME))
    }

    /// Render the page: one line per report with its size in whole kB
    /// and its modification time, zone included.
    pub fn render(&self) -> String {
        let mut html = page_start("gifcolors index");
        for entry in &self.entries {
            let name = escape(&entry.file_name());
            html.push_str(&format!(
                "<a href='{name}'>{name}</a> {} kB {}<br>",
                entry.size_bytes / 1024,
                entry.modified.format(TIMESTAMP_FORMAT)
            ));
        }
        html.push_str(PAGE_END);
        html
    }

    /// Render and write the page, returning its path.
    pub fn write(&self) -> ReportResult<PathBuf> {
        let path = self.output_path()?;
        crate::write_report(&path, &self.render())?;
        Ok(path)
    }
}
