use crate::input::InputSink;
use crate::texture::TextureId;

/// Backend registration record kept by the GUI library.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BackendInfo {
    pub name: &'static str,
    /// The renderer accepts texture handles in draw commands.
    pub renderer_has_textures: bool,
}

/// Font atlas pixels in RGBA32 (4 bytes per pixel, row-major).
#[derive(Debug, Copy, Clone)]
pub struct FontAtlas<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
}

/// The slice of a GUI library's IO state that a platform/renderer backend touches.
///
/// The input queue half is [`InputSink`].
pub trait GuiIo: InputSink {
    /// Currently registered renderer backend, if any.
    fn backend(&self) -> Option<BackendInfo>;

    fn set_backend(&mut self, backend: Option<BackendInfo>);

    /// Display size in pixels.
    fn set_display_size(&mut self, width: f32, height: f32);

    /// Seconds elapsed since the previous frame.
    fn set_delta_time(&mut self, dt: f32);

    /// Builds (if needed) and returns the font atlas.
    fn font_atlas(&mut self) -> FontAtlas<'_>;

    /// Records the texture handle draw commands should carry for atlas geometry.
    fn set_font_texture(&mut self, id: TextureId);
}
