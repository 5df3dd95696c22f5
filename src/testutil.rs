//! Test-only draw target that records pixels for inspection.

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// In-memory framebuffer. Out-of-bounds pixels are dropped, matching how the
/// real display clips.
pub struct TestDisplay {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl TestDisplay {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb888::BLACK; (size.width as usize) * (size.height as usize)],
        }
    }

    /// Read back one pixel. Panics when `point` is outside the framebuffer.
    pub fn pixel(&self, point: Point) -> Rgb888 {
        assert!(
            point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.size.width
                && (point.y as u32) < self.size.height,
            "probe {point:?} outside {:?}",
            self.size
        );
        self.pixels[point.y as usize * self.size.width as usize + point.x as usize]
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.size.width
                && (point.y as u32) < self.size.height
            {
                self.pixels[point.y as usize * self.size.width as usize + point.x as usize] = color;
            }
        }
        Ok(())
    }
}
