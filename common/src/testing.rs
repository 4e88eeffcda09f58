//! Host-side test helpers.

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Point, Size};

use crate::colors::BLACK;

/// In-memory Rgb565 framebuffer. Out-of-bounds pixels are dropped, like a
/// real panel driver would.
pub struct Framebuffer {
    size: Size,
    pixels: Vec<Rgb565>,
    /// Number of pixels written, including dropped ones.
    pub writes: usize,
}

impl Framebuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![BLACK; (size.width * size.height) as usize],
            writes: 0,
        }
    }

    /// Fill every pixel with `color` without counting writes.
    pub fn fill(
        &mut self,
        color: Rgb565,
    ) {
        self.pixels.iter_mut().for_each(|p| *p = color);
    }

    pub fn get(
        &self,
        p: Point,
    ) -> Option<Rgb565> {
        if p.x < 0 || p.y < 0 || p.x as u32 >= self.size.width || p.y as u32 >= self.size.height {
            return None;
        }
        Some(self.pixels[p.y as usize * self.size.width as usize + p.x as usize])
    }

    pub fn pixels(&self) -> &[Rgb565] { &self.pixels }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            self.writes += 1;
            if p.x < 0 || p.y < 0 || p.x as u32 >= self.size.width || p.y as u32 >= self.size.height {
                continue;
            }
            let idx = p.y as usize * self.size.width as usize + p.x as usize;
            self.pixels[idx] = color;
        }
        Ok(())
    }
}
