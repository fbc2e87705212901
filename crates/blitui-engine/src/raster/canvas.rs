use crate::coords::{PixelRect, Vec2};

use super::{line, triangle};

/// Borrowed, row-major pixel buffer with its dimensions.
///
/// Invariant: `pixels.len() >= width * height`.
pub struct Canvas<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Wraps `pixels` as a `width × height` target.
    ///
    /// Returns `None` if the buffer is too small for the given dimensions.
    pub fn new(pixels: &'a mut [u32], width: u32, height: u32) -> Option<Self> {
        let needed = width as usize * height as usize;
        if pixels.len() < needed {
            return None;
        }
        Some(Self { pixels, width, height })
    }

    /// Caller guarantees `pixels.len() >= width * height`.
    pub(crate) fn from_exact(pixels: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert!(pixels.len() >= width as usize * height as usize);
        Self { pixels, width, height }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whole-canvas bounds.
    #[inline]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::from_size(self.width, self.height)
    }

    /// Fills the whole canvas with `color`.
    pub fn clear(&mut self, color: u32) {
        let n = self.width as usize * self.height as usize;
        self.pixels[..n].fill(color);
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Writes one pixel; out-of-bounds writes are dropped.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: u32) {
        if self.bounds().contains(x, y) {
            self.pixels[y as usize * self.width as usize + x as usize] = color;
        }
    }

    /// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        line::draw_line(self, x0, y0, x1, y1, color);
    }

    /// Flat-shaded triangle fill clipped to the canvas.
    ///
    /// Only `c0` is used; `c1` and `c2` are accepted so callers can pass vertex
    /// colors straight through.
    pub fn fill_triangle(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, c0: u32, c1: u32, c2: u32) {
        let bounds = self.bounds();
        self.fill_triangle_clipped(p0, p1, p2, [c0, c1, c2], bounds);
    }

    /// Like [`fill_triangle`](Self::fill_triangle) but never writes outside `clip`.
    ///
    /// Returns the number of pixels written.
    pub fn fill_triangle_clipped(
        &mut self,
        p0: Vec2,
        p1: Vec2,
        p2: Vec2,
        colors: [u32; 3],
        clip: PixelRect,
    ) -> usize {
        triangle::fill_triangle(self, [p0, p1, p2], colors, clip)
    }

    #[inline]
    pub(super) fn row_mut(&mut self, y: i32) -> &mut [u32] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.pixels[start..start + w]
    }
}
