//! Color count regression test
//!
//! - Part 1: 8 bpp 2x2 image, counts and percentages
//! - Part 2: 4 bpp nibble order and odd-width row truncation
//! - Part 3: sums and ordering over a larger pseudo-random image
//! - Part 4: rejected inputs

use gifcolors_core::pix::decode::decode;
use gifcolors_core::{
    ColorHistogram, Error, IndexedImage, Palette, PixelDepth, RowScan, count_colors,
};
use gifcolors_test::{RegParams, gray_palette};

fn palette_from(colors: &[gifcolors_core::Rgb], depth: u32) -> Palette {
    let mut palette = Palette::new(depth).unwrap();
    for c in colors {
        palette.add_color(*c).unwrap();
    }
    palette
}

#[test]
fn colorcount_reg() {
    let mut rp = RegParams::new("colorcount");

    // Part 1: 8 bpp scenario
    eprintln!("\n=== Part 1: 8 bpp 2x2 ===");
    let hist = ColorHistogram::accumulate(decode(&[0x00, 0x01, 0x01, 0x02], 2, 2, 8).unwrap());
    rp.compare_values(1.0, hist.count(0) as f64, 0.0);
    rp.compare_values(2.0, hist.count(1) as f64, 0.0);
    rp.compare_values(1.0, hist.count(2) as f64, 0.0);
    rp.compare_values(4.0, hist.total_pixels() as f64, 0.0);

    let palette = palette_from(&gray_palette(256), 8);
    let stats = hist.to_sorted_report(&palette).unwrap();
    rp.compare_values(25.0, stats[0].percentage, 1e-12);
    rp.compare_values(50.0, stats[1].percentage, 1e-12);
    rp.compare_values(25.0, stats[2].percentage, 1e-12);

    // Part 2: 4 bpp
    eprintln!("\n=== Part 2: 4 bpp ===");
    let indices: Vec<u8> = decode(&[0x12, 0x34], 4, 1, 4).unwrap().collect();
    rp.compare_strings("[1, 2, 3, 4]", &format!("{:?}", indices));

    let image = IndexedImage::from_indices(
        3,
        1,
        PixelDepth::Bit4,
        palette_from(&gray_palette(16), 4),
        &[5, 6, 7],
    )
    .unwrap();
    let truncated = image.indices(RowScan::Truncated).unwrap();
    rp.compare_values(2.0, truncated.len() as f64, 0.0);
    let exact = image.indices(RowScan::Exact).unwrap();
    rp.compare_values(3.0, exact.len() as f64, 0.0);
    let model = count_colors(&image, "odd.gif", RowScan::Truncated).unwrap();
    rp.compare_values(2.0, model.color_count() as f64, 0.0);
    rp.compare_strings("50.000", &model.rows[0].percentage_text);

    // Part 3: invariants on a larger image
    eprintln!("\n=== Part 3: sums and ordering ===");
    let (w, h) = (37u32, 23u32);
    let mut seed = 12345u32;
    let pixels: Vec<u8> = (0..w * h)
        .map(|_| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
            (seed >> 16) as u8
        })
        .collect();
    let image = IndexedImage::from_indices(
        w,
        h,
        PixelDepth::Bit8,
        palette_from(&gray_palette(256), 8),
        &pixels,
    )
    .unwrap();
    let decoded: Vec<u8> = image.indices(RowScan::Truncated).unwrap().collect();
    rp.compare_values(1.0, if decoded == pixels { 1.0 } else { 0.0 }, 0.0);

    let hist = ColorHistogram::accumulate(decoded);
    let sum: u64 = hist.iter().map(|(_, c)| c).sum();
    rp.compare_values((w * h) as f64, sum as f64, 0.0);

    let stats = hist.to_sorted_report(image.palette()).unwrap();
    let ascending = stats.windows(2).all(|p| p[0].index < p[1].index);
    rp.compare_values(1.0, if ascending { 1.0 } else { 0.0 }, 0.0);
    let total: f64 = stats.iter().map(|s| s.percentage).sum();
    rp.compare_values(100.0, total, 1e-9);

    // Part 4: rejected inputs
    eprintln!("\n=== Part 4: errors ===");
    let bad_depth = matches!(decode(&[0u8; 4], 4, 1, 2), Err(Error::UnsupportedFormat(2)));
    rp.compare_values(1.0, if bad_depth { 1.0 } else { 0.0 }, 0.0);
    let short = matches!(decode(&[0u8; 3], 2, 2, 8), Err(Error::TruncatedData { .. }));
    rp.compare_values(1.0, if short { 1.0 } else { 0.0 }, 0.0);

    let narrow = IndexedImage::from_indices(
        1,
        2,
        PixelDepth::Bit4,
        palette_from(&gray_palette(16), 4),
        &[3, 4],
    )
    .unwrap();
    let empty = matches!(
        count_colors(&narrow, "narrow.gif", RowScan::Truncated),
        Err(Error::NoColorsDecoded)
    );
    rp.compare_values(1.0, if empty { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "colorcount regression test failed");
}
