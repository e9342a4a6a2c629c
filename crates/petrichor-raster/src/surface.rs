//! Owned pixel surfaces.
//!
//! A [`Surface`] is a `width x height` buffer of packed `0xAARRGGBB`
//! pixels in row-major order, suitable for handing directly to a
//! presentation backend. All pixel access is bounds-checked; writes
//! outside the surface are silently dropped so drawing code never has
//! to clip by hand.

use crate::color::Color;

/// A CPU-side framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Surface {
    /// Create a surface filled with transparent black.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw pixel buffer, row-major, packed `0xAARRGGBB`.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Fill the whole surface with one color.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.into());
    }

    /// Write one pixel. Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color.into();
        }
    }

    /// Read one pixel, or `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|index| self.pixels[index].into())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}
