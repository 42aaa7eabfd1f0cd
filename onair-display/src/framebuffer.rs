//! Off-screen frame buffer
//!
//! Scenes are drawn here first and handed to the panel driver as a whole,
//! so the panel never scans a half-drawn picture.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// RGB frame buffer, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    pixels: [[Rgb888; W]; H],
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Create an all-black frame
    pub const fn new() -> Self {
        Self {
            pixels: [[Rgb888::BLACK; W]; H],
        }
    }

    /// Color at (x, y), or None outside the frame
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb888> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// One row of pixels
    ///
    /// # Panics
    /// If `y >= H`.
    pub fn row(&self, y: usize) -> &[Rgb888; W] {
        &self.pixels[y]
    }

    /// Iterate over all pixels with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Rgb888)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, c)| (x, y, *c)))
    }
}

impl<const W: usize, const H: usize> OriginDimensions for FrameBuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for FrameBuffer<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Clip anything outside the panel
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                if x < W && y < H {
                    self.pixels[y][x] = color;
                }
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for row in self.pixels.iter_mut() {
            row.fill(color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_new_is_black() {
        let fb: FrameBuffer<4, 2> = FrameBuffer::new();
        assert!(fb.iter().all(|(_, _, c)| c == Rgb888::BLACK));
        assert_eq!(fb.iter().count(), 8);
        assert_eq!(fb.size(), Size::new(4, 2));
    }

    #[test]
    fn test_draw_clips_to_bounds() {
        let mut fb: FrameBuffer<4, 4> = FrameBuffer::new();
        Rectangle::new(Point::new(-2, 2), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.pixel(0, 1), Some(Rgb888::BLACK));
        assert_eq!(fb.pixel(0, 2), Some(Rgb888::RED));
        assert_eq!(fb.pixel(3, 3), Some(Rgb888::RED));
        assert_eq!(fb.pixel(4, 3), None);
        assert_eq!(fb.row(2), &[Rgb888::RED; 4]);
    }

    #[test]
    fn test_clear() {
        let mut fb: FrameBuffer<3, 3> = FrameBuffer::new();
        fb.clear(Rgb888::GREEN).unwrap();
        assert!(fb.iter().all(|(_, _, c)| c == Rgb888::GREEN));
    }
}
