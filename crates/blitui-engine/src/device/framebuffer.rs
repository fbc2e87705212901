use crate::raster::Canvas;

/// Owned CPU-side back buffer, `width * height` native pixels, row-major.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Framebuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Allocates a zeroed buffer, returning `None` if the allocation fails.
    pub fn try_new(width: u32, height: u32) -> Option<Self> {
        let len = (width as usize).checked_mul(height as usize)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).ok()?;
        pixels.resize(len, 0);
        Some(Self { pixels, width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Framebuffer as raw bytes (B, G, R, A per pixel on little-endian).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Drawing view over the whole buffer.
    pub fn canvas(&mut self) -> Canvas<'_> {
        let (w, h) = (self.width, self.height);
        Canvas::from_exact(&mut self.pixels, w, h)
    }
}
