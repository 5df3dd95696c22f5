//! Bitmap icons for the sidebar touch targets.
//!
//! The two button icons are 24-bit BMP assets loaded by path at startup and
//! decoded once into owned pixel buffers; painting is a plain blit. A missing
//! or undecodable asset degrades to "no icon": the button area stays on the
//! background fill and its touch target keeps working. That path is logged at
//! warn level but never surfaces an error.
//!
//! The display has no alpha channel, so the settings icon's 65% opacity is
//! applied at load time by blending every pixel toward the sidebar background
//! (see [`crate::colors::blend_over`]).

use std::fs;
use std::path::Path;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use tinybmp::Bmp;
use tracing::warn;

use crate::colors::blend_over;

/// A decoded icon: fixed size plus a row-major pixel buffer.
#[derive(Clone, Debug)]
pub struct Icon {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl Icon {
    /// Load and decode a BMP asset. Returns `None` (with a warning logged)
    /// when the file is unreadable or not a decodable BMP.
    pub fn load(path: &Path) -> Option<Self> {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                warn!(path = %path.display(), %err, "icon asset unreadable, drawing without it");
                return None;
            }
        };
        let icon = Self::from_bmp_bytes(&data);
        if icon.is_none() {
            warn!(path = %path.display(), "icon asset is not a decodable BMP, drawing without it");
        }
        icon
    }

    /// Decode BMP bytes into an owned pixel buffer.
    pub fn from_bmp_bytes(data: &[u8]) -> Option<Self> {
        let bmp = Bmp::<Rgb888>::from_slice(data).ok()?;
        let size = bmp.size();
        let mut pixels = vec![Rgb888::BLACK; (size.width as usize) * (size.height as usize)];
        for Pixel(point, color) in bmp.pixels() {
            let idx = point.y as usize * size.width as usize + point.x as usize;
            if let Some(slot) = pixels.get_mut(idx) {
                *slot = color;
            }
        }
        Some(Self { size, pixels })
    }

    /// Nearest-neighbor rescale to `target`, ignoring aspect ratio. Assets
    /// are authored at their button size, so this is usually a no-op clone.
    pub fn scaled_to(&self, target: Size) -> Self {
        if target == self.size || self.size.width == 0 || self.size.height == 0 {
            return self.clone();
        }
        let mut pixels = Vec::with_capacity((target.width as usize) * (target.height as usize));
        for y in 0..target.height {
            let src_y = y * self.size.height / target.height;
            for x in 0..target.width {
                let src_x = x * self.size.width / target.width;
                pixels.push(self.pixels[(src_y * self.size.width + src_x) as usize]);
            }
        }
        Self { size: target, pixels }
    }

    /// Pre-blend every pixel toward `bg` at `alpha` (255 keeps the icon as
    /// authored). Valid as long as the icon is drawn over a `bg` fill.
    pub fn blended_over(&self, bg: Rgb888, alpha: u8) -> Self {
        Self {
            size: self.size,
            pixels: self.pixels.iter().map(|&px| blend_over(px, bg, alpha)).collect(),
        }
    }

    /// Blit the icon with its top-left corner at `top_left`.
    pub fn draw<D>(&self, display: &mut D, top_left: Point)
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let area = Rectangle::new(top_left, self.size);
        display.fill_contiguous(&area, self.pixels.iter().copied()).ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestDisplay;

    /// Build an in-memory 24-bit BMP (bottom-up rows, BGR, 4-byte padding)
    /// from top-down row-major RGB triples.
    fn bmp_bytes(width: u32, height: u32, rgb_top_down: &[(u8, u8, u8)]) -> Vec<u8> {
        assert_eq!(rgb_top_down.len() as u32, width * height);
        let row_size = (width * 3).div_ceil(4) * 4;
        let data_size = row_size * height;
        let file_size = 54 + data_size;

        let mut out = Vec::with_capacity(file_size as usize);
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&file_size.to_le_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
        out.extend_from_slice(&40u32.to_le_bytes()); // BITMAPINFOHEADER
        out.extend_from_slice(&(width as i32).to_le_bytes());
        out.extend_from_slice(&(height as i32).to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // planes
        out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
        out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
        out.extend_from_slice(&data_size.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&2835i32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());

        for y in (0..height).rev() {
            for x in 0..width {
                let (r, g, b) = rgb_top_down[(y * width + x) as usize];
                out.extend_from_slice(&[b, g, r]);
            }
            for _ in (width * 3)..row_size {
                out.push(0);
            }
        }
        out
    }

    const RED: (u8, u8, u8) = (255, 0, 0);
    const GREEN: (u8, u8, u8) = (0, 255, 0);
    const BLUE: (u8, u8, u8) = (0, 0, 255);
    const GRAY: (u8, u8, u8) = (57, 57, 57);

    #[test]
    fn test_decode_preserves_pixel_order() {
        let data = bmp_bytes(2, 2, &[RED, GREEN, BLUE, GRAY]);
        let icon = Icon::from_bmp_bytes(&data).expect("valid BMP should decode");

        assert_eq!(icon.size, Size::new(2, 2));
        assert_eq!(icon.pixels[0], Rgb888::new(255, 0, 0), "top-left");
        assert_eq!(icon.pixels[1], Rgb888::new(0, 255, 0), "top-right");
        assert_eq!(icon.pixels[2], Rgb888::new(0, 0, 255), "bottom-left");
        assert_eq!(icon.pixels[3], Rgb888::new(57, 57, 57), "bottom-right");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(Icon::from_bmp_bytes(b"not a bitmap").is_none());
        assert!(Icon::from_bmp_bytes(&[]).is_none());
    }

    #[test]
    fn test_load_missing_file_degrades_to_none() {
        assert!(Icon::load(Path::new("assets/does_not_exist.bmp")).is_none());
    }

    #[test]
    fn test_scale_up_replicates_pixels() {
        let data = bmp_bytes(1, 1, &[RED]);
        let icon = Icon::from_bmp_bytes(&data).unwrap();

        let scaled = icon.scaled_to(Size::new(4, 4));
        assert_eq!(scaled.size, Size::new(4, 4));
        assert!(scaled.pixels.iter().all(|&px| px == Rgb888::new(255, 0, 0)));
    }

    #[test]
    fn test_scale_down_samples_nearest() {
        let data = bmp_bytes(2, 2, &[RED, GREEN, BLUE, GRAY]);
        let icon = Icon::from_bmp_bytes(&data).unwrap();

        let scaled = icon.scaled_to(Size::new(1, 1));
        assert_eq!(scaled.size, Size::new(1, 1));
        assert_eq!(scaled.pixels[0], Rgb888::new(255, 0, 0), "nearest sample is top-left");
    }

    #[test]
    fn test_scale_to_same_size_is_identity() {
        let data = bmp_bytes(2, 2, &[RED, GREEN, BLUE, GRAY]);
        let icon = Icon::from_bmp_bytes(&data).unwrap();
        let scaled = icon.scaled_to(Size::new(2, 2));
        assert_eq!(scaled.pixels, icon.pixels);
    }

    #[test]
    fn test_blend_endpoints() {
        let data = bmp_bytes(1, 1, &[(255, 255, 255)]);
        let icon = Icon::from_bmp_bytes(&data).unwrap();
        let bg = Rgb888::new(57, 57, 57);

        assert_eq!(icon.blended_over(bg, 255).pixels[0], Rgb888::new(255, 255, 255));
        assert_eq!(icon.blended_over(bg, 0).pixels[0], bg);
    }

    #[test]
    fn test_draw_blits_at_position() {
        let data = bmp_bytes(2, 2, &[RED, GREEN, BLUE, GRAY]);
        let icon = Icon::from_bmp_bytes(&data).unwrap();

        let mut display = TestDisplay::new(Size::new(8, 8));
        icon.draw(&mut display, Point::new(3, 4));

        assert_eq!(display.pixel(Point::new(3, 4)), Rgb888::new(255, 0, 0));
        assert_eq!(display.pixel(Point::new(4, 4)), Rgb888::new(0, 255, 0));
        assert_eq!(display.pixel(Point::new(3, 5)), Rgb888::new(0, 0, 255));
        assert_eq!(display.pixel(Point::new(4, 5)), Rgb888::new(57, 57, 57));
    }
}
