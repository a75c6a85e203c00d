//! Palette index histogram
//!
//! Counts how often each palette index occurs and turns the counts
//! into per-color statistics sorted by index.

use crate::colormap::{Palette, Rgb};
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Occurrence count per palette index
///
/// Only indices that actually occur are stored. Iteration is in
/// ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistogram {
    counts: BTreeMap<u8, u64>,
    total: u64,
}

/// Statistics for one palette color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStat {
    /// Palette index
    pub index: u8,
    /// Palette color at `index`
    pub rgb: Rgb,
    /// Number of pixels using the color
    pub count: u64,
    /// `100 * count / total_pixels`
    pub percentage: f64,
}

impl ColorHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every index yielded by `indices`.
    ///
    /// # Example
    ///
    /// ```
    /// use gifcolors_core::ColorHistogram;
    ///
    /// let hist = ColorHistogram::accumulate([0u8, 1, 1, 2]);
    /// assert_eq!(hist.count(1), 2);
    /// assert_eq!(hist.total_pixels(), 4);
    /// ```
    pub fn accumulate<I: IntoIterator<Item = u8>>(indices: I) -> Self {
        let mut hist = Self::new();
        hist.extend(indices);
        hist
    }

    /// Count one pixel of palette index `index`
    #[inline]
    pub fn add(&mut self, index: u8) {
        *self.counts.entry(index).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of pixels counted for `index` (0 if it never occurred)
    pub fn count(&self, index: u8) -> u64 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total_pixels(&self) -> u64 {
        self.total
    }

    /// Number of distinct indices seen
    pub fn color_count(&self) -> usize {
        self.counts.len()
    }

    /// Check if no pixel was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(index, count)` pairs in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&index, &count)| (index, count))
    }

    /// Build per-color statistics, ascending by palette index.
    ///
    /// # Errors
    ///
    /// - [`Error::NoColorsDecoded`] if the histogram is empty
    /// - [`Error::PaletteIndexOutOfRange`] if a counted index has no
    ///   palette entry
    pub fn to_sorted_report(&self, palette: &Palette) -> Result<Vec<ColorStat>> {
        if self.is_empty() {
            return Err(Error::NoColorsDecoded);
        }
        let total = self.total as f64;

        self.iter()
            .map(|(index, count)| -> Result<ColorStat> {
                let rgb = palette
                    .get(index)
                    .ok_or(Error::PaletteIndexOutOfRange {
                        index,
                        len: palette.len(),
                    })?;
                Ok(ColorStat {
                    index,
                    rgb,
                    count,
                    percentage: 100.0 * count as f64 / total,
                })
            })
            .collect()
    }
}

impl Extend<u8> for ColorHistogram {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for index in iter {
            self.add(index);
        }
    }
}

impl FromIterator<u8> for ColorHistogram {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::accumulate(iter)
    }
}
