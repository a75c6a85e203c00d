//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use std::fs;
use std::path::PathBuf;

/// Regression test parameters
///
/// Tracks the test name, the index of the current check and the
/// failures recorded so far. Each check increments the index, so a
/// failure message points at the check that produced it.
pub struct RegParams {
    /// Name of the test (e.g., "gifread")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Fresh output directory for this test, `tests/regout/<test_name>`.
    ///
    /// Anything left over from an earlier run is removed first.
    pub fn output_dir(&self) -> TestResult<PathBuf> {
        let dir = PathBuf::from(regout_dir()).join(&self.test_name);
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(dir)
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two strings for exact equality
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name, self.index, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Check that `haystack` contains `needle`
    pub fn check_contains(&mut self, haystack: &str, needle: &str) -> bool {
        self.index += 1;

        if !haystack.contains(needle) {
            let msg = format!(
                "Failure in {}_reg: missing text for index {}: {:?}",
                self.test_name, self.index, needle
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Finish the test, printing a summary.
    ///
    /// Returns `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
