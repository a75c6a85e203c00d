//! GIF image format support
//!
//! Reads the first frame of a GIF into an [`IndexedImage`]. The pixel
//! depth follows the palette size (2 colors: 1 bpp, 4 colors: 2 bpp,
//! up to 16 colors: 4 bpp, otherwise 8 bpp) and the indices are
//! packed into rows of `ceil(width / pixels_per_byte)` bytes.

use crate::{IoError, IoResult};
use gif::{ColorOutput, DecodeOptions};
use gifcolors_core::{IndexedImage, Palette, PixelDepth};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a GIF image
///
/// Only the first frame is decoded; later frames of an animated GIF
/// are ignored.
///
/// # Errors
///
/// - [`IoError::UnsupportedImageFormat`] if the GIF has neither a
///   local nor a global color table
/// - [`IoError::DecodeError`] for malformed GIF streams
pub fn read_gif<R: Read>(reader: R) -> IoResult<IndexedImage> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::Indexed);

    let mut decoder = options
        .read_info(reader)
        .map_err(|e| IoError::DecodeError(format!("GIF decode error: {}", e)))?;

    // Read the first frame
    let (width, height, pixels, local_palette) = {
        let frame = decoder
            .read_next_frame()
            .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
            .ok_or_else(|| IoError::InvalidData("no frames in GIF".to_string()))?;
        (
            frame.width as u32,
            frame.height as u32,
            frame.buffer.to_vec(),
            frame.palette.clone(),
        )
    };

    // Get palette - prefer local, fall back to global
    let palette: Vec<u8> = match local_palette {
        Some(local) => local,
        None => decoder
            .global_palette()
            .map(<[u8]>::to_vec)
            .ok_or_else(|| {
                IoError::UnsupportedImageFormat("GIF has no color table".to_string())
            })?,
    };

    let ncolors = palette.len() / 3;
    if ncolors == 0 || ncolors > 256 {
        return Err(IoError::InvalidData(format!(
            "invalid palette size: {}",
            ncolors
        )));
    }

    let depth = PixelDepth::for_palette_len(ncolors);
    tracing::debug!(
        width,
        height,
        ncolors,
        bits_per_pixel = depth.bits(),
        "read GIF frame"
    );

    if matches!(decoder.next_frame_info(), Ok(Some(_))) {
        tracing::debug!("GIF has more than one frame, counting the first only");
    }

    let cmap = Palette::from_rgb_bytes(depth.bits(), &palette)?;
    let image = IndexedImage::from_indices(width, height, depth, cmap, &pixels)?;
    Ok(image)
}

/// Read a GIF image from a file
pub fn read_gif_file<P: AsRef<Path>>(path: P) -> IoResult<IndexedImage> {
    let file = File::open(path.as_ref()).map_err(IoError::Io)?;
    read_gif(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gifcolors_core::{Error, Rgb};
    use gifcolors_test::{encode_gif, encode_gif_frames, gray_palette};
    use std::io::Cursor;

    #[test]
    fn test_read_8bpp() {
        let palette = gray_palette(256);
        let pixels: Vec<u8> = (0..12).map(|i| (i * 20) as u8).collect();
        let bytes = encode_gif(4, 3, &palette, &pixels).unwrap();

        let image = read_gif(Cursor::new(bytes)).unwrap();
        assert_eq!(image.depth(), PixelDepth::Bit8);
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert_eq!(image.palette().len(), 256);
        assert_eq!(image.data(), pixels.as_slice());
    }

    #[test]
    fn test_read_4bpp_is_packed() {
        let palette = gray_palette(16);
        let bytes = encode_gif(4, 1, &palette, &[1, 2, 3, 4]).unwrap();

        let image = read_gif(Cursor::new(bytes)).unwrap();
        assert_eq!(image.depth(), PixelDepth::Bit4);
        assert_eq!(image.data(), &[0x12, 0x34]);
        assert_eq!(image.palette().get(15), Some(Rgb::gray(255)));
    }

    #[test]
    fn test_read_8_color_palette_uses_4bpp() {
        let bytes = encode_gif(2, 1, &gray_palette(8), &[7, 0]).unwrap();
        let image = read_gif(Cursor::new(bytes)).unwrap();
        assert_eq!(image.depth(), PixelDepth::Bit4);
        assert_eq!(image.data(), &[0x70]);
    }

    #[test]
    fn test_read_2bpp() {
        let bytes = encode_gif(4, 1, &gray_palette(4), &[0, 1, 2, 3]).unwrap();
        let image = read_gif(Cursor::new(bytes)).unwrap();
        assert_eq!(image.depth(), PixelDepth::Bit2);
        assert!(matches!(
            image.indices(Default::default()),
            Err(Error::UnsupportedFormat(2))
        ));
    }

    #[test]
    fn test_read_first_frame_only() {
        let palette = gray_palette(16);
        let bytes = encode_gif_frames(2, 1, &palette, &[&[1, 1], &[2, 2]]).unwrap();
        let image = read_gif(Cursor::new(bytes)).unwrap();
        assert_eq!(image.data(), &[0x11]);
    }

    #[test]
    fn test_read_garbage() {
        let result = read_gif(Cursor::new(b"GIF89a garbage".to_vec()));
        assert!(result.is_err());
    }
}
