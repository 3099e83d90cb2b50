//! Host-side previews of a strip buffer.
//!
//! The strip stores pixels in wiring order; these helpers walk it back into
//! rows and columns with [`locate`] so a frame can be checked on a terminal
//! or saved as an image without any LEDs attached.

use crate::addressing::{address, locate};
use crate::{Color, PackedColor, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Render a strip buffer as text, one line per matrix row.
///
/// Lit pixels print as `#`, dark ones as `.`. Pixels missing from a short
/// buffer print as dark.
pub fn render_ascii(pixels: &[PackedColor], width: usize, height: usize) -> String {
    let mut out = String::with_capacity((width + 1) * height);
    for y in 0..height {
        for x in 0..width {
            let lit = pixels
                .get(address(x, y, height))
                .is_some_and(|p| !p.is_off());
            out.push(if lit { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// Paint a strip buffer into an image, one `cell` x `cell` square per LED
/// with a one-pixel dark gap, colors scaled by `brightness`.
pub fn render_image(
    pixels: &[PackedColor],
    width: usize,
    height: usize,
    brightness: u8,
    cell: u32,
) -> RgbImage {
    let cell = cell.max(2);
    let mut img = RgbImage::new(width as u32 * cell, height as u32 * cell);

    for (index, &packed) in pixels.iter().enumerate().take(width * height) {
        let (x, y) = locate(index, height);
        let c = Color::from(packed).scale(brightness);
        let (left, top) = (x as u32 * cell, y as u32 * cell);
        for dy in 0..cell - 1 {
            for dx in 0..cell - 1 {
                img.put_pixel(left + dx, top + dy, Rgb([c.r, c.g, c.b]));
            }
        }
    }
    img
}

/// Write a strip buffer to a PNG file. See [`render_image`].
pub fn write_png(
    pixels: &[PackedColor],
    width: usize,
    height: usize,
    brightness: u8,
    cell: u32,
    path: &Path,
) -> Result<()> {
    render_image(pixels, width, height, brightness, cell).save(path)?;
    tracing::info!("Wrote {}x{} preview to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack_color;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn strip_with(lit: &[(usize, usize)], width: usize, height: usize) -> Vec<PackedColor> {
        let mut pixels = vec![PackedColor::OFF; width * height];
        for &(x, y) in lit {
            pixels[address(x, y, height)] = pack_color(255, 128, 0);
        }
        pixels
    }

    #[test]
    fn ascii_follows_the_wiring() {
        let pixels = strip_with(&[(0, 0), (1, 0), (3, 2)], 4, 3);
        assert_eq!(render_ascii(&pixels, 4, 3), "##..\n....\n...#\n");
    }

    #[test]
    fn ascii_treats_missing_pixels_as_dark() {
        assert_eq!(render_ascii(&[], 2, 2), "..\n..\n");
    }

    #[test]
    fn image_has_one_cell_per_led() {
        let pixels = strip_with(&[(1, 0)], 2, 2);
        let img = render_image(&pixels, 2, 2, 255, 4);
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(img.get_pixel(4, 0), &Rgb([255, 128, 0]));
        assert_eq!(img.get_pixel(7, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn image_applies_brightness() {
        let pixels = strip_with(&[(0, 0)], 1, 1);
        let img = render_image(&pixels, 1, 1, 128, 2);
        assert_eq!(img.get_pixel(0, 0), &Rgb([127, 64, 0]));
    }

    #[test]
    fn writes_png_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("frame.png");
        let pixels = strip_with(&[(0, 0), (2, 1)], 3, 2);

        write_png(&pixels, 3, 2, 255, 5, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (15, 10));
        assert_eq!(decoded.get_pixel(10, 5), &Rgb([255, 128, 0]));
    }
}
