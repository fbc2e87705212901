use std::fmt;

use crate::paint::rgba_to_native;

use super::TextureError;

/// Slot count used when a backend does not configure one.
pub const DEFAULT_TEXTURE_CAPACITY: usize = 256;

/// Handle into a [`TextureTable`].
///
/// `TextureId::NONE` (0) never refers to a texture.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const NONE: TextureId = TextureId(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An uploaded image in native pixel order.
///
/// Invariant: `pixels.len() == width * height`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Texture {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Texture {
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

    /// Pixel at `(x, y)`, `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }
}

/// Fixed-capacity texture registry.
///
/// Slot 0 is reserved. `create` takes the lowest free slot so handles stay small,
/// and a handle remains valid until it is deleted.
pub struct TextureTable {
    slots: Vec<Option<Texture>>,
    used: usize,
}

impl TextureTable {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TEXTURE_CAPACITY)
    }

    /// Creates a table with `capacity` slots (including the reserved slot 0).
    ///
    /// Capacities below 2 are raised to 2 so at least one texture fits.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, used: 0 }
    }

    /// Total slot count, including the reserved slot 0.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live textures.
    #[inline]
    pub fn len(&self) -> usize {
        self.used
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Slots still available to `create`.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.capacity() - 1 - self.used
    }

    /// Uploads an RGBA32 image (4 bytes per pixel, row-major) and returns its handle.
    ///
    /// Source bytes past `width * height * 4` are ignored.
    pub fn create(&mut self, rgba: &[u8], width: u32, height: u32) -> Result<TextureId, TextureError> {
        let oom = TextureError::OutOfMemory { width, height };
        let count = (width as usize).checked_mul(height as usize).ok_or(oom.clone())?;
        let expected = count.checked_mul(4).ok_or(oom)?;
        if rgba.len() < expected {
            return Err(TextureError::SourceTooShort { expected, actual: rgba.len() });
        }

        let index = self
            .slots
            .iter()
            .skip(1)
            .position(Option::is_none)
            .map(|i| i + 1)
            .ok_or(TextureError::TableFull { capacity: self.capacity() })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| TextureError::OutOfMemory { width, height })?;

        let src: &[[u8; 4]] = bytemuck::cast_slice(&rgba[..expected]);
        pixels.extend(src.iter().map(|&[r, g, b, a]| rgba_to_native(r, g, b, a)));

        self.slots[index] = Some(Texture { pixels, width, height });
        self.used += 1;

        let id = TextureId(index as u32);
        log::trace!("texture {id} created ({width}x{height})");
        Ok(id)
    }

    /// Releases a texture. Unknown or already-deleted handles are ignored.
    pub fn delete(&mut self, id: TextureId) {
        if id.is_none() {
            return;
        }
        if let Some(slot) = self.slots.get_mut(id.index()) {
            if slot.take().is_some() {
                self.used -= 1;
                log::trace!("texture {id} deleted");
            }
        }
    }

    /// Looks up a live texture.
    pub fn get(&self, id: TextureId) -> Option<&Texture> {
        if id.is_none() {
            return None;
        }
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Whether `id` refers to a live texture.
    #[inline]
    pub fn contains(&self, id: TextureId) -> bool {
        self.get(id).is_some()
    }

    /// Releases every texture.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.used = 0;
    }
}

impl Default for TextureTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextureTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureTable")
            .field("capacity", &self.capacity())
            .field("used", &self.used)
            .finish()
    }
}
