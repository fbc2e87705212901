use crate::input::DEFAULT_POINTER_DIVISOR;
use crate::texture::DEFAULT_TEXTURE_CAPACITY;

/// Backend configuration.
///
/// Defaults match a firmware pointer reporting in thousandths of a pixel and a
/// 256-slot texture table.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Name registered with the GUI library.
    pub name: &'static str,

    /// Device motion units per screen pixel.
    pub pointer_divisor: i32,

    /// Texture table slots, including the reserved slot 0.
    pub texture_capacity: usize,

    /// Native pixel the framebuffer is cleared to before each frame.
    pub clear_color: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            name: "blitui",
            pointer_divisor: DEFAULT_POINTER_DIVISOR,
            texture_capacity: DEFAULT_TEXTURE_CAPACITY,
            clear_color: 0,
        }
    }
}
