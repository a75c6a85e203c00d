//! Palette - color table of an indexed image
//!
//! A palette maps the palette index stored for each pixel to a
//! concrete RGB color. It holds at most `2^depth` entries and is not
//! modified once the image has been read.

use crate::error::{Error, Result};
use std::fmt;

/// RGB color entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl Rgb {
    /// Create a new RGB color
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a grayscale color
    pub fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Lowercase `rrggbb` form, two zero-padded digits per channel.
    pub fn hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Color table for indexed images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    depth: u32,
}

impl Palette {
    /// Create an empty palette for the given depth
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] unless `depth` is 1, 2, 4 or 8.
    pub fn new(depth: u32) -> Result<Self> {
        if !matches!(depth, 1 | 2 | 4 | 8) {
            return Err(Error::InvalidDepth(depth));
        }
        Ok(Self {
            colors: Vec::with_capacity(1 << depth),
            depth,
        })
    }

    /// Create a palette from packed `r, g, b, r, g, b, ...` bytes, the
    /// layout GIF color tables use.
    ///
    /// A trailing partial triple is ignored.
    pub fn from_rgb_bytes(depth: u32, bytes: &[u8]) -> Result<Self> {
        let mut palette = Self::new(depth)?;
        for chunk in bytes.chunks_exact(3) {
            palette.add_rgb(chunk[0], chunk[1], chunk[2])?;
        }
        Ok(palette)
    }

    /// Get the depth
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Get the number of colors
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get maximum number of entries
    #[inline]
    pub fn max_entries(&self) -> usize {
        1 << self.depth
    }

    /// Get a color by palette index
    pub fn get(&self, index: u8) -> Option<Rgb> {
        self.colors.get(index as usize).copied()
    }

    /// Add a color, returning its index
    pub fn add_color(&mut self, color: Rgb) -> Result<u8> {
        if self.colors.len() >= self.max_entries() {
            return Err(Error::PaletteFull {
                max: self.max_entries(),
            });
        }
        self.colors.push(color);
        Ok((self.colors.len() - 1) as u8)
    }

    /// Add an RGB color
    pub fn add_rgb(&mut self, r: u8, g: u8, b: u8) -> Result<u8> {
        self.add_color(Rgb::new(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_zero_padded() {
        assert_eq!(Rgb::new(0, 10, 255).hex(), "000aff");
        assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn test_new_rejects_depth() {
        assert!(matches!(Palette::new(3), Err(Error::InvalidDepth(3))));
        assert!(matches!(Palette::new(16), Err(Error::InvalidDepth(16))));
    }

    #[test]
    fn test_from_rgb_bytes() {
        let palette = Palette::from_rgb_bytes(4, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(1), Some(Rgb::new(4, 5, 6)));
        assert_eq!(palette.get(2), None);
    }

    #[test]
    fn test_palette_full() {
        let mut palette = Palette::new(1).unwrap();
        assert_eq!(palette.add_rgb(0, 0, 0).unwrap(), 0);
        assert_eq!(palette.add_rgb(255, 255, 255).unwrap(), 1);
        assert!(matches!(
            palette.add_rgb(1, 1, 1),
            Err(Error::PaletteFull { max: 2 })
        ));
    }
}
