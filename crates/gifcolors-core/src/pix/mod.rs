//! Indexed image container
//!
//! [`IndexedImage`] is what the image reader hands to the counting
//! code: the pixel dimensions, the palette, and the raw packed pixel
//! buffer at a given bit depth.
//!
//! # Packed layout
//!
//! Each byte holds `8 / bits` palette indices, most significant bits
//! first. Rows start on a byte boundary, so a row occupies
//! `ceil(width / pixels_per_byte)` bytes.

pub mod decode;
pub mod histogram;

pub use decode::{PixelIndexDecoder, PixelIndices, RowScan};
pub use histogram::{ColorHistogram, ColorStat};

use crate::colormap::Palette;
use crate::error::{Error, Result};

/// Bits used to store one palette index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 2-color palette
    Bit1 = 1,
    /// 4-color palette
    Bit2 = 2,
    /// 16-color palette
    Bit4 = 4,
    /// 256-color palette
    Bit8 = 8,
}

impl PixelDepth {
    /// Create `PixelDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 1, 2, 4 or 8.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            1 => Ok(PixelDepth::Bit1),
            2 => Ok(PixelDepth::Bit2),
            4 => Ok(PixelDepth::Bit4),
            8 => Ok(PixelDepth::Bit8),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Smallest depth whose palette holds `ncolors` entries.
    pub fn for_palette_len(ncolors: usize) -> Self {
        if ncolors <= 2 {
            PixelDepth::Bit1
        } else if ncolors <= 4 {
            PixelDepth::Bit2
        } else if ncolors <= 16 {
            PixelDepth::Bit4
        } else {
            PixelDepth::Bit8
        }
    }

    /// Get the number of bits per pixel.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Number of palette indices packed into one byte.
    pub fn pixels_per_byte(self) -> u32 {
        8 / self.bits()
    }

    /// Get the largest palette index representable at this depth.
    pub fn max_value(self) -> u8 {
        ((1u32 << self.bits()) - 1) as u8
    }
}

/// An indexed-color image with a packed pixel buffer
#[derive(Debug, Clone)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    depth: PixelDepth,
    palette: Palette,
    data: Vec<u8>,
}

impl IndexedImage {
    /// Wrap an already packed pixel buffer.
    ///
    /// The buffer length is not checked here; decoding reports
    /// [`Error::TruncatedData`] when it is too short.
    pub fn new(
        width: u32,
        height: u32,
        depth: PixelDepth,
        palette: Palette,
        data: Vec<u8>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            depth,
            palette,
            data,
        })
    }

    /// Pack one palette index per pixel (row-major, `width * height`
    /// entries) into a buffer at `depth`.
    pub fn from_indices(
        width: u32,
        height: u32,
        depth: PixelDepth,
        palette: Palette,
        indices: &[u8],
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let npixels = width as usize * height as usize;
        if indices.len() < npixels {
            return Err(Error::TruncatedData {
                expected: npixels,
                actual: indices.len(),
            });
        }

        let bits = depth.bits();
        let ppb = depth.pixels_per_byte() as usize;
        let stride = (width as usize).div_ceil(ppb);
        let max = depth.max_value();
        let mut data = vec![0u8; stride * height as usize];

        for (row, line) in indices[..npixels].chunks_exact(width as usize).enumerate() {
            let packed = &mut data[row * stride..(row + 1) * stride];
            for (x, &index) in line.iter().enumerate() {
                if index > max {
                    return Err(Error::PaletteIndexOutOfRange {
                        index,
                        len: max as usize + 1,
                    });
                }
                let shift = 8 - bits * (x % ppb) as u32 - bits;
                packed[x / ppb] |= index << shift;
            }
        }

        Self::new(width, height, depth, palette, data)
    }

    /// Get the width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel depth
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.depth
    }

    /// Get the palette
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Get the packed pixel buffer
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes per raster row.
    pub fn stride(&self) -> usize {
        (self.width as usize).div_ceil(self.depth.pixels_per_byte() as usize)
    }

    /// Read the palette index at `(x, y)` straight from the raster.
    pub fn get_index(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bits = self.depth.bits();
        let ppb = self.depth.pixels_per_byte();
        let byte = *self
            .data
            .get(y as usize * self.stride() + (x / ppb) as usize)?;
        let shift = 8 - bits * (x % ppb) - bits;
        Some((byte >> shift) & self.depth.max_value())
    }

    /// Decode every pixel of the image into palette indices.
    pub fn indices(&self, scan: RowScan) -> Result<PixelIndices<'_>> {
        PixelIndexDecoder::new(scan).decode(&self.data, self.width, self.height, self.depth.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_for_palette_len() {
        assert_eq!(PixelDepth::for_palette_len(2), PixelDepth::Bit1);
        assert_eq!(PixelDepth::for_palette_len(4), PixelDepth::Bit2);
        assert_eq!(PixelDepth::for_palette_len(8), PixelDepth::Bit4);
        assert_eq!(PixelDepth::for_palette_len(16), PixelDepth::Bit4);
        assert_eq!(PixelDepth::for_palette_len(17), PixelDepth::Bit8);
        assert_eq!(PixelDepth::for_palette_len(256), PixelDepth::Bit8);
    }

    fn gray(depth: u32) -> Palette {
        let entries = 1u32 << depth;
        let bytes: Vec<u8> = (0..entries).flat_map(|i| [i as u8; 3]).collect();
        Palette::from_rgb_bytes(depth, &bytes).unwrap()
    }

    #[test]
    fn test_pixels_per_byte() {
        assert_eq!(PixelDepth::Bit1.pixels_per_byte(), 8);
        assert_eq!(PixelDepth::Bit4.pixels_per_byte(), 2);
        assert_eq!(PixelDepth::Bit8.pixels_per_byte(), 1);
        assert!(PixelDepth::from_bits(16).is_err());
    }

    #[test]
    fn test_from_indices_packs_msb_first() {
        let palette = gray(4);
        let image =
            IndexedImage::from_indices(3, 2, PixelDepth::Bit4, palette, &[1, 2, 3, 4, 5, 6])
                .unwrap();
        assert_eq!(image.stride(), 2);
        assert_eq!(image.data(), &[0x12, 0x30, 0x45, 0x60]);
        assert_eq!(image.get_index(2, 0), Some(3));
        assert_eq!(image.get_index(0, 1), Some(4));
        assert_eq!(image.get_index(3, 0), None);
    }

    #[test]
    fn test_from_indices_rejects_large_index() {
        let palette = gray(4);
        let err = IndexedImage::from_indices(2, 1, PixelDepth::Bit4, palette, &[1, 16]);
        assert!(matches!(
            err,
            Err(Error::PaletteIndexOutOfRange { index: 16, len: 16 })
        ));
    }

    #[test]
    fn test_zero_dimension() {
        let palette = gray(8);
        let err = IndexedImage::new(0, 4, PixelDepth::Bit8, palette, vec![]);
        assert!(matches!(err, Err(Error::InvalidDimension { .. })));
    }
}
