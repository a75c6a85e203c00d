//! gifcolors-test - Regression test support for gifcolors
//!
//! Provides [`RegParams`], which numbers each check of a regression
//! test and collects failures, and helpers that encode small GIF
//! fixtures with known palettes and pixels.
//!
//! # Usage
//!
//! ```ignore
//! use gifcolors_test::{RegParams, gray_palette, write_gif_fixture};
//!
//! let mut rp = RegParams::new("gifread");
//! let dir = rp.output_dir().unwrap();
//! let path = write_gif_fixture(&dir, "ramp.gif", 4, 1, &gray_palette(16), &[0, 1, 2, 3]).unwrap();
//! rp.compare_values(4.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use gif::{Encoder, Frame};
use gifcolors_core::Rgb;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // gifcolors-test is at crates/gifcolors-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// `n` evenly spaced grays from black to white
pub fn gray_palette(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let value = if n <= 1 { 0 } else { (i * 255 / (n - 1)) as u8 };
            Rgb::gray(value)
        })
        .collect()
}

/// Flatten a palette into a GIF color table, padded with black up to
/// a power-of-two entry count.
fn color_table(palette: &[Rgb]) -> Vec<u8> {
    let size = palette.len().next_power_of_two().max(2);
    let mut table = Vec::with_capacity(size * 3);
    for i in 0..size {
        let c = palette.get(i).copied().unwrap_or_default();
        table.extend_from_slice(&[c.red, c.green, c.blue]);
    }
    table
}

/// Encode a GIF whose frames all use the global palette.
///
/// Each frame is `width * height` palette indices, row-major.
pub fn encode_gif_frames(
    width: u16,
    height: u16,
    palette: &[Rgb],
    frames: &[&[u8]],
) -> TestResult<Vec<u8>> {
    let npixels = width as usize * height as usize;
    let fixture_err = |message: String| TestError::InvalidFixture {
        name: format!("{}x{}", width, height),
        message,
    };
    if frames.is_empty() {
        return Err(fixture_err("no frames".to_string()));
    }

    let mut buffer = Vec::new();
    {
        let table = color_table(palette);
        let mut encoder = Encoder::new(&mut buffer, width, height, &table).map_err(|e| {
            TestError::FixtureEncode {
                name: format!("{}x{}", width, height),
                message: e.to_string(),
            }
        })?;
        for pixels in frames {
            if pixels.len() != npixels {
                return Err(fixture_err(format!(
                    "expected {} indices, got {}",
                    npixels,
                    pixels.len()
                )));
            }
            let frame = Frame::from_indexed_pixels(width, height, pixels.to_vec(), None);
            encoder
                .write_frame(&frame)
                .map_err(|e| TestError::FixtureEncode {
                    name: format!("{}x{}", width, height),
                    message: e.to_string(),
                })?;
        }
    }
    Ok(buffer)
}

/// Encode a single-frame GIF
pub fn encode_gif(width: u16, height: u16, palette: &[Rgb], pixels: &[u8]) -> TestResult<Vec<u8>> {
    encode_gif_frames(width, height, palette, &[pixels])
}

/// Encode a single-frame GIF and write it to `dir/name`.
pub fn write_gif_fixture(
    dir: &Path,
    name: &str,
    width: u16,
    height: u16,
    palette: &[Rgb],
    pixels: &[u8],
) -> TestResult<PathBuf> {
    let bytes = encode_gif(width, height, palette, pixels)?;
    let path = dir.join(name);
    fs::write(&path, bytes)?;
    Ok(path)
}
