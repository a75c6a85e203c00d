//! Report model handed to the HTML renderer
//!
//! Plain data, no behavior: image metadata plus one row per counted
//! color, already formatted the way the report prints it.

use crate::colormap::Rgb;
use crate::pix::ColorStat;

/// One color row of a report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Position in the report, starting at 0
    pub display_index: usize,
    /// Palette index of the color
    pub palette_index: u8,
    /// Palette color
    pub rgb: Rgb,
    /// `rrggbb`, lowercase
    pub hex: String,
    /// Number of pixels using the color
    pub count: u64,
    /// Share of all counted pixels, in percent
    pub percentage: f64,
    /// `percentage` with three decimals
    pub percentage_text: String,
}

/// Color statistics of one image
#[derive(Debug, Clone, PartialEq)]
pub struct ReportModel {
    /// Display name, usually the GIF file name
    pub name: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Rows ascending by palette index
    pub rows: Vec<ReportRow>,
}

impl ReportModel {
    /// Assemble a report from sorted color statistics
    pub fn new(name: impl Into<String>, width: u32, height: u32, stats: &[ColorStat]) -> Self {
        let rows = stats
            .iter()
            .enumerate()
            .map(|(display_index, stat)| ReportRow {
                display_index,
                palette_index: stat.index,
                rgb: stat.rgb,
                hex: stat.rgb.hex(),
                count: stat.count,
                percentage: stat.percentage,
                percentage_text: format_percentage(stat.percentage),
            })
            .collect();

        Self {
            name: name.into(),
            width,
            height,
            rows,
        }
    }

    /// Number of distinct colors in the report
    pub fn color_count(&self) -> usize {
        self.rows.len()
    }

    /// Sum of the pixel counts over all rows
    pub fn total_pixels(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }
}

/// Format a percentage as `0.000`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.3}", percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_numbered_from_zero() {
        let stats = [
            ColorStat {
                index: 3,
                rgb: Rgb::new(1, 2, 3),
                count: 1,
                percentage: 100.0 / 3.0,
            },
            ColorStat {
                index: 9,
                rgb: Rgb::new(255, 255, 0),
                count: 2,
                percentage: 200.0 / 3.0,
            },
        ];
        let model = ReportModel::new("a.gif", 3, 1, &stats);
        assert_eq!(model.color_count(), 2);
        assert_eq!(model.total_pixels(), 3);
        assert_eq!(model.rows[0].display_index, 0);
        assert_eq!(model.rows[0].palette_index, 3);
        assert_eq!(model.rows[0].hex, "010203");
        assert_eq!(model.rows[0].percentage_text, "33.333");
        assert_eq!(model.rows[1].display_index, 1);
        assert_eq!(model.rows[1].hex, "ffff00");
        assert_eq!(model.rows[1].percentage_text, "66.667");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(25.0), "25.000");
        assert_eq!(format_percentage(100.0), "100.000");
        assert_eq!(format_percentage(0.0004), "0.000");
    }
}
