//! Palette index decoding from packed pixel buffers
//!
//! Turns a packed buffer (one or two pixels per byte) into the
//! sequence of palette indices, one per pixel, in row-major order.
//! Indices come out as `u8`, so a byte such as `0xFF` is index 255
//! and never a negative key.
//!
//! # Row scanning
//!
//! [`RowScan::Truncated`] walks `floor(width / pixels_per_byte)` bytes
//! per row and uses that same count as the row stride. When the width
//! is not a multiple of the pixels per byte, the trailing pixels of a
//! row are never visited and each row yields
//! `floor(width / pixels_per_byte) * pixels_per_byte` indices. Counts
//! produced this way match the reports the tool has always written.
//!
//! [`RowScan::Exact`] uses the real raster stride,
//! `ceil(width / pixels_per_byte)`, and yields exactly `width` indices
//! per row, reading only the used high bits of a partial last byte.

use crate::error::{Error, Result};
use std::iter::FusedIterator;

/// How rows of a packed buffer are walked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowScan {
    /// Stride and scan length are `floor(width / pixels_per_byte)` bytes
    #[default]
    Truncated,
    /// Stride is `ceil(width / pixels_per_byte)` bytes, `width` pixels per row
    Exact,
}

/// Decoder for 4 and 8 bpp packed buffers
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelIndexDecoder {
    scan: RowScan,
}

impl PixelIndexDecoder {
    /// Create a decoder using the given row scan mode
    pub fn new(scan: RowScan) -> Self {
        Self { scan }
    }

    /// Decode `buffer` into palette indices.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] if `bits_per_pixel` is not 4 or 8
    /// - [`Error::TruncatedData`] if `buffer` is shorter than
    ///   `stride * height`
    pub fn decode<'a>(
        &self,
        buffer: &'a [u8],
        width: u32,
        height: u32,
        bits_per_pixel: u32,
    ) -> Result<PixelIndices<'a>> {
        if !matches!(bits_per_pixel, 4 | 8) {
            return Err(Error::UnsupportedFormat(bits_per_pixel));
        }
        let ppb = (8 / bits_per_pixel) as usize;
        let width = width as usize;
        let height = height as usize;

        let (stride, row_pixels) = match self.scan {
            RowScan::Truncated => {
                let line_length = width / ppb;
                (line_length, line_length * ppb)
            }
            RowScan::Exact => (width.div_ceil(ppb), width),
        };

        tracing::debug!(
            bits_per_pixel,
            bytes_per_row = stride,
            data_len = buffer.len(),
            width,
            height,
            "decoding packed pixels"
        );

        let expected = stride * height;
        if buffer.len() < expected {
            return Err(Error::TruncatedData {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(PixelIndices {
            buffer,
            bits: bits_per_pixel,
            ppb,
            stride,
            row_pixels,
            pos: 0,
            end: row_pixels * height,
        })
    }
}

/// Decode with the default [`RowScan::Truncated`] mode.
pub fn decode(
    buffer: &[u8],
    width: u32,
    height: u32,
    bits_per_pixel: u32,
) -> Result<PixelIndices<'_>> {
    PixelIndexDecoder::default().decode(buffer, width, height, bits_per_pixel)
}

/// Lazy iterator over decoded palette indices.
///
/// A clone keeps its own position over the shared buffer, so cloning
/// before iterating walks the same pixels again.
#[derive(Debug, Clone)]
pub struct PixelIndices<'a> {
    buffer: &'a [u8],
    bits: u32,
    ppb: usize,
    stride: usize,
    row_pixels: usize,
    pos: usize,
    end: usize,
}

impl PixelIndices<'_> {
    /// Pixels yielded per row
    pub fn row_pixels(&self) -> usize {
        self.row_pixels
    }

    /// Bytes between the starts of consecutive rows
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    fn index_at(&self, pos: usize) -> u8 {
        let row = pos / self.row_pixels;
        let col = pos % self.row_pixels;
        let byte = self.buffer[row * self.stride + col / self.ppb];
        if self.bits == 8 {
            return byte;
        }
        // high nibble is the left pixel
        if col % 2 == 0 {
            (byte >> 4) & 0x0f
        } else {
            byte & 0x0f
        }
    }
}

impl Iterator for PixelIndices<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos >= self.end {
            return None;
        }
        let index = self.index_at(self.pos);
        self.pos += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PixelIndices<'_> {}

impl FusedIterator for PixelIndices<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_8bpp_reads_unsigned() {
        let data = [0x00, 0x7f, 0x80, 0xff];
        let indices: Vec<u8> = decode(&data, 2, 2, 8).unwrap().collect();
        assert_eq!(indices, vec![0, 127, 128, 255]);
    }

    #[test]
    fn test_decode_4bpp_high_nibble_first() {
        let indices: Vec<u8> = decode(&[0x12, 0x34], 4, 1, 4).unwrap().collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_decode_4bpp_zero_byte() {
        let indices: Vec<u8> = decode(&[0x00, 0xf0], 4, 1, 4).unwrap().collect();
        assert_eq!(indices, vec![0, 0, 15, 0]);
    }

    #[test]
    fn test_unsupported_depths() {
        for bits in [1, 2, 3, 16, 32] {
            assert!(matches!(
                decode(&[0u8; 64], 4, 4, bits),
                Err(Error::UnsupportedFormat(b)) if b == bits
            ));
        }
    }

    #[test]
    fn test_truncated_buffer() {
        let err = decode(&[0u8; 5], 3, 2, 8).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedData {
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_truncated_scan_drops_odd_pixel() {
        // width 3 at 4 bpp: line length floor(3 / 2) = 1 byte per row
        let iter = decode(&[0x12, 0x34], 3, 2, 4).unwrap();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.stride(), 1);
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_exact_scan_keeps_odd_pixel() {
        let decoder = PixelIndexDecoder::new(RowScan::Exact);
        let iter = decoder.decode(&[0x12, 0x30, 0x45, 0x60], 3, 2, 4).unwrap();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_exact_scan_requires_full_stride() {
        let decoder = PixelIndexDecoder::new(RowScan::Exact);
        assert!(matches!(
            decoder.decode(&[0x12, 0x30, 0x45], 3, 2, 4),
            Err(Error::TruncatedData {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_restartable() {
        let data = [3u8, 1, 4, 1, 5, 9];
        let iter = decode(&data, 3, 2, 8).unwrap();
        let first: Vec<u8> = iter.clone().collect();
        let second: Vec<u8> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_width_below_pixels_per_byte() {
        // nothing to scan in truncated mode
        let iter = decode(&[0xab], 1, 1, 4).unwrap();
        assert_eq!(iter.len(), 0);
    }
}
