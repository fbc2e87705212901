use super::DeviceError;

/// Current display mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
}

impl DisplayMode {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Linear-framebuffer display (e.g. a firmware graphics output protocol).
pub trait DisplayDevice {
    /// Mode the display is currently set to.
    fn mode(&self) -> DisplayMode;

    /// Copies a `width × height` row-major buffer of native pixels to the screen
    /// with its top-left corner at `(x, y)`. Atomic from the caller's view.
    fn blit(&mut self, pixels: &[u32], x: u32, y: u32, width: u32, height: u32) -> Result<(), DeviceError>;
}

/// A single keystroke as reported by a text-input device.
///
/// `scan_code` is non-zero for special keys; `unicode_char` is non-zero for
/// characters. Either or both may be set.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct KeyStroke {
    pub scan_code: u16,
    pub unicode_char: u16,
}

impl KeyStroke {
    #[inline]
    pub const fn scan(scan_code: u16) -> Self {
        Self { scan_code, unicode_char: 0 }
    }

    #[inline]
    pub const fn char(c: char) -> Self {
        Self { scan_code: 0, unicode_char: c as u16 }
    }
}

/// Keystroke source. Reports discrete strokes, not held state.
pub trait KeyboardDevice {
    /// Returns the next pending keystroke, or `Ok(None)` when none is queued.
    /// Never blocks.
    fn read_key_stroke(&mut self) -> Result<Option<KeyStroke>, DeviceError>;
}

/// Relative pointer report in device units.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PointerState {
    pub relative_x: i32,
    pub relative_y: i32,
    pub relative_z: i32,
    pub left_button: bool,
    pub right_button: bool,
}

/// Relative-motion pointer.
pub trait PointerDevice {
    /// Returns motion accumulated since the last read plus current buttons, or
    /// `Ok(None)` when nothing changed. Never blocks.
    fn read_state(&mut self) -> Result<Option<PointerState>, DeviceError>;
}
