use crate::input::{InputEvent, InputFrame, InputSink, InputState};
use crate::texture::TextureId;

use super::{BackendInfo, FontAtlas, GuiIo};

/// Self-contained [`GuiIo`] for tests and hosts without a GUI library.
///
/// Records everything the backend publishes and feeds input events through an
/// [`InputState`] into a per-frame [`InputFrame`].
#[derive(Debug, Default)]
pub struct HeadlessIo {
    backend: Option<BackendInfo>,
    display_size: (f32, f32),
    delta_time: f32,

    atlas_pixels: Vec<u8>,
    atlas_width: u32,
    atlas_height: u32,
    font_texture: TextureId,

    input: InputState,
    frame: InputFrame,
}

impl HeadlessIo {
    /// Uses `pixels` (RGBA32, `width * height * 4` bytes) as the font atlas.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            atlas_pixels: pixels,
            atlas_width: width,
            atlas_height: height,
            ..Self::default()
        }
    }

    /// Opaque white atlas of the given size.
    pub fn with_blank_atlas(width: u32, height: u32) -> Self {
        Self::new(vec![0xFF; width as usize * height as usize * 4], width, height)
    }

    /// Replaces the atlas, e.g. after the GUI rebuilt its fonts.
    pub fn set_atlas(&mut self, pixels: Vec<u8>, width: u32, height: u32) {
        self.atlas_pixels = pixels;
        self.atlas_width = width;
        self.atlas_height = height;
    }

    pub fn display_size(&self) -> (f32, f32) {
        self.display_size
    }

    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    pub fn font_texture(&self) -> TextureId {
        self.font_texture
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Events and transitions received since the last [`begin_frame`](Self::begin_frame).
    pub fn input_frame(&self) -> &InputFrame {
        &self.frame
    }

    /// Starts a new GUI frame: drops last frame's input deltas.
    pub fn begin_frame(&mut self) {
        self.frame.clear();
    }
}

impl InputSink for HeadlessIo {
    fn push_event(&mut self, ev: InputEvent) {
        self.input.apply_event(&mut self.frame, ev);
    }
}

impl GuiIo for HeadlessIo {
    fn backend(&self) -> Option<BackendInfo> {
        self.backend
    }

    fn set_backend(&mut self, backend: Option<BackendInfo>) {
        self.backend = backend;
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.display_size = (width, height);
    }

    fn set_delta_time(&mut self, dt: f32) {
        self.delta_time = dt;
    }

    fn font_atlas(&mut self) -> FontAtlas<'_> {
        FontAtlas {
            pixels: &self.atlas_pixels,
            width: self.atlas_width,
            height: self.atlas_height,
        }
    }

    fn set_font_texture(&mut self, id: TextureId) {
        self.font_texture = id;
    }
}
