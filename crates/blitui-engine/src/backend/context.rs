use crate::device::{DisplayDevice, DisplayMode, Framebuffer, KeyboardDevice, PointerDevice};
use crate::draw::DrawData;
use crate::gui::{BackendInfo, GuiIo};
use crate::input::InputPipeline;
use crate::render::{self, RenderStats};
use crate::texture::{TextureError, TextureId, TextureTable};
use crate::time::FrameClock;

use super::{BackendConfig, BackendError, Devices};

/// An initialized software renderer and input backend.
///
/// Owns the CPU framebuffer, the texture table and the devices. Everything is
/// released when the value is dropped; [`shutdown`](Self::shutdown) additionally
/// detaches the backend from the GUI session.
pub struct Backend {
    config: BackendConfig,

    display: Box<dyn DisplayDevice>,
    keyboard: Option<Box<dyn KeyboardDevice>>,
    pointer: Option<Box<dyn PointerDevice>>,

    /// Screen geometry captured at init.
    screen: DisplayMode,
    framebuffer: Framebuffer,

    textures: TextureTable,
    /// Texture built from the GUI font atlas; `NONE` until (re)built.
    font_texture: TextureId,

    input: InputPipeline,
    clock: FrameClock,
    last_stats: RenderStats,
}

impl Backend {
    /// Attaches a backend to the GUI session behind `io`.
    ///
    /// Fails if a renderer backend is already registered, if the display mode has
    /// no pixels, or if the framebuffer or font texture cannot be allocated. On
    /// failure nothing is registered with the GUI and every partial allocation is
    /// dropped.
    pub fn init(io: &mut dyn GuiIo, devices: Devices, config: BackendConfig) -> Result<Self, BackendError> {
        if let Some(existing) = io.backend() {
            log::error!("renderer backend '{}' is already initialized", existing.name);
            return Err(BackendError::AlreadyInitialized { name: existing.name });
        }

        let screen = devices.display.mode();
        if screen.width == 0 || screen.height == 0 {
            return Err(BackendError::InvalidDisplayMode { width: screen.width, height: screen.height });
        }

        let framebuffer = Framebuffer::try_new(screen.width, screen.height)
            .ok_or(BackendError::FramebufferAlloc { width: screen.width, height: screen.height })?;

        let mut backend = Self {
            input: InputPipeline::new(screen.width, screen.height, config.pointer_divisor),
            textures: TextureTable::with_capacity(config.texture_capacity),
            display: devices.display,
            keyboard: devices.keyboard,
            pointer: devices.pointer,
            screen,
            framebuffer,
            font_texture: TextureId::NONE,
            clock: FrameClock::new(),
            last_stats: RenderStats::default(),
            config,
        };
        backend.framebuffer.clear(backend.config.clear_color);
        backend.create_device_objects(io)?;

        io.set_display_size(screen.width as f32, screen.height as f32);
        io.set_backend(Some(BackendInfo {
            name: backend.config.name,
            renderer_has_textures: true,
        }));

        log::debug!(
            "backend '{}' initialized: {}x{} screen, keyboard={}, pointer={}",
            backend.config.name,
            screen.width,
            screen.height,
            backend.keyboard.is_some(),
            backend.pointer.is_some(),
        );
        Ok(backend)
    }

    /// Detaches from the GUI session and releases every resource.
    pub fn shutdown(mut self, io: &mut dyn GuiIo) {
        self.destroy_device_objects(io);
        self.textures.clear();
        io.set_backend(None);
        log::debug!("backend '{}' shut down", self.config.name);
    }

    /// Builds the font texture from the GUI atlas and hands its id to the GUI.
    ///
    /// An existing font texture is released first, so this doubles as "reload fonts".
    pub fn create_device_objects(&mut self, io: &mut dyn GuiIo) -> Result<(), TextureError> {
        self.destroy_device_objects(io);

        let atlas = io.font_atlas();
        let (width, height) = (atlas.width, atlas.height);
        let id = self.textures.create(atlas.pixels, width, height)?;

        self.font_texture = id;
        io.set_font_texture(id);
        log::debug!("font texture {id} created ({width}x{height})");
        Ok(())
    }

    /// Releases the font texture and clears the GUI's font texture id.
    pub fn destroy_device_objects(&mut self, io: &mut dyn GuiIo) {
        if self.font_texture.is_none() {
            return;
        }
        self.textures.delete(self.font_texture);
        self.font_texture = TextureId::NONE;
        io.set_font_texture(TextureId::NONE);
    }

    /// Prepares the GUI for a new frame: font texture, delta time, input.
    pub fn new_frame(&mut self, io: &mut dyn GuiIo) {
        if self.font_texture.is_none() {
            if let Err(e) = self.create_device_objects(io) {
                log::warn!("font texture rebuild failed: {e}");
            }
        }

        let dt = self.clock.tick();
        io.set_delta_time(dt);
        log::trace!("frame {} dt={dt:.4}s", self.clock.frame_index());

        self.input.poll(self.keyboard.as_deref_mut(), self.pointer.as_deref_mut(), io);
    }

    /// Rasterizes `draw_data` into the framebuffer and blits it to the display.
    ///
    /// A failed blit is logged; the frame is simply lost.
    pub fn render_draw_data(&mut self, draw_data: &DrawData) -> RenderStats {
        self.framebuffer.clear(self.config.clear_color);
        if draw_data.is_empty() {
            log::trace!("empty frame");
        } else {
            log::trace!(
                "frame: {} lists, {} vertices, {} indices",
                draw_data.cmd_lists.len(),
                draw_data.total_vtx_count(),
                draw_data.total_idx_count(),
            );
        }

        let stats = {
            let mut canvas = self.framebuffer.canvas();
            render::render_draw_data(&mut canvas, draw_data, self.font_texture)
        };

        let (w, h) = (self.framebuffer.width(), self.framebuffer.height());
        if let Err(e) = self.display.blit(self.framebuffer.pixels(), 0, 0, w, h) {
            log::warn!("framebuffer blit failed: {e}");
        }

        log::trace!(
            "rendered {} commands, {} triangles, {} pixels",
            stats.commands_drawn,
            stats.triangles_drawn(),
            stats.pixels_written,
        );
        self.last_stats = stats;
        stats
    }

    /// Stores an RGBA32 image in the texture table.
    pub fn create_texture(&mut self, rgba: &[u8], width: u32, height: u32) -> Result<TextureId, BackendError> {
        Ok(self.textures.create(rgba, width, height)?)
    }

    /// Frees a texture. Unknown ids are ignored.
    ///
    /// Deleting the font texture makes the next [`new_frame`](Self::new_frame)
    /// rebuild it.
    pub fn delete_texture(&mut self, id: TextureId) {
        self.textures.delete(id);
        if !id.is_none() && id == self.font_texture {
            self.font_texture = TextureId::NONE;
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Screen size captured at init.
    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen.width, self.screen.height)
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn textures(&self) -> &TextureTable {
        &self.textures
    }

    pub fn font_texture(&self) -> TextureId {
        self.font_texture
    }

    /// Pointer position in screen pixels.
    pub fn pointer_position(&self) -> (i32, i32) {
        self.input.pointer_position()
    }

    /// Statistics from the most recent [`render_draw_data`](Self::render_draw_data).
    pub fn last_stats(&self) -> RenderStats {
        self.last_stats
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("name", &self.config.name)
            .field("screen", &self.screen)
            .field("textures", &self.textures)
            .field("font_texture", &self.font_texture)
            .field("keyboard", &self.keyboard.is_some())
            .field("pointer", &self.pointer.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::device::memory::{MemoryDisplay, ScriptedKeyboard, ScriptedPointer};
    use crate::device::{DeviceError, KeyStroke, PointerState};
    use crate::draw::{ClipRect, DrawCmd, DrawList, DrawVert};
    use crate::gui::HeadlessIo;
    use crate::input::{scan, InputEvent, Key, KeyState, MouseButton};

    fn io() -> HeadlessIo {
        HeadlessIo::with_blank_atlas(8, 8)
    }

    fn init_with(io: &mut HeadlessIo, display: MemoryDisplay) -> Backend {
        Backend::init(io, Devices::new(display), BackendConfig::default()).unwrap()
    }

    fn white_triangle_frame(w: f32, h: f32) -> DrawData {
        let mut list = DrawList::new(ClipRect::new(0.0, 0.0, w, h));
        list.add_triangle(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(0.0, 3.0), 0xFFFF_FFFF);
        DrawData::new(vec![list])
    }

    // ── init ──────────────────────────────────────────────────────────────

    #[test]
    fn init_registers_backend_and_font() {
        let mut io = io();
        let backend = init_with(&mut io, MemoryDisplay::new(16, 12));

        let info = io.backend().unwrap();
        assert_eq!(info.name, "blitui");
        assert!(info.renderer_has_textures);
        assert_eq!(io.display_size(), (16.0, 12.0));
        assert_eq!(backend.screen_size(), (16, 12));

        let font = backend.font_texture();
        assert!(!font.is_none());
        assert_eq!(io.font_texture(), font);
        assert_eq!(backend.textures().get(font).unwrap().width(), 8);
    }

    #[test]
    fn init_twice_fails() {
        let mut io = io();
        let _first = init_with(&mut io, MemoryDisplay::new(4, 4));
        let err = Backend::init(&mut io, Devices::new(MemoryDisplay::new(4, 4)), BackendConfig::default())
            .unwrap_err();
        assert_eq!(err, BackendError::AlreadyInitialized { name: "blitui" });
    }

    #[test]
    fn zero_sized_mode_is_rejected() {
        let mut io = io();
        let err = Backend::init(&mut io, Devices::new(MemoryDisplay::new(0, 4)), BackendConfig::default())
            .unwrap_err();
        assert_eq!(err, BackendError::InvalidDisplayMode { width: 0, height: 4 });
        assert!(io.backend().is_none());
    }

    struct HugeDisplay;

    impl DisplayDevice for HugeDisplay {
        fn mode(&self) -> DisplayMode {
            DisplayMode::new(u32::MAX, u32::MAX)
        }

        fn blit(&mut self, _: &[u32], _: u32, _: u32, _: u32, _: u32) -> Result<(), DeviceError> {
            Ok(())
        }
    }

    #[test]
    fn framebuffer_allocation_failure_is_reported() {
        let mut io = io();
        let err = Backend::init(&mut io, Devices::new(HugeDisplay), BackendConfig::default()).unwrap_err();
        assert_eq!(err, BackendError::FramebufferAlloc { width: u32::MAX, height: u32::MAX });
        assert!(io.backend().is_none());
    }

    #[test]
    fn short_atlas_fails_init_without_registering() {
        let mut io = HeadlessIo::new(vec![0xFF; 12], 2, 2);
        let err = Backend::init(&mut io, Devices::new(MemoryDisplay::new(4, 4)), BackendConfig::default())
            .unwrap_err();
        assert!(matches!(err, BackendError::Texture(TextureError::SourceTooShort { .. })));
        assert!(io.backend().is_none());
        assert!(io.font_texture().is_none());
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn four_by_four_triangle_reaches_display() {
        let mut io = io();
        let display = MemoryDisplay::new(4, 4);
        let mut backend = init_with(&mut io, display.clone());

        let stats = backend.render_draw_data(&white_triangle_frame(4.0, 4.0));

        assert_eq!(display.blit_count(), 1);
        assert_ne!(display.pixel(0, 0), Some(0));
        assert_ne!(display.pixel(1, 0), Some(0));
        assert_ne!(display.pixel(0, 1), Some(0));
        assert_eq!(display.pixel(3, 3), Some(0));
        assert_eq!(stats.solid_triangles, 1);
        assert_eq!(backend.last_stats(), stats);
    }

    #[test]
    fn each_frame_starts_from_clear_color() {
        let mut io = io();
        let display = MemoryDisplay::new(4, 4);
        let config = BackendConfig { clear_color: 0xFF10_2030, ..BackendConfig::default() };
        let mut backend = Backend::init(&mut io, Devices::new(display.clone()), config).unwrap();

        backend.render_draw_data(&white_triangle_frame(4.0, 4.0));
        backend.render_draw_data(&DrawData::default());

        assert!(display.snapshot().iter().all(|&p| p == 0xFF10_2030));
    }

    #[test]
    fn blit_failure_is_tolerated() {
        let mut io = io();
        let display = MemoryDisplay::new(4, 4);
        let mut backend = init_with(&mut io, display.clone());

        display.fail_next_blit(DeviceError::Fault("gop gone".into()));
        let stats = backend.render_draw_data(&white_triangle_frame(4.0, 4.0));
        assert_eq!(stats.solid_triangles, 1);
        assert_eq!(display.blit_count(), 0);

        backend.render_draw_data(&white_triangle_frame(4.0, 4.0));
        assert_eq!(display.blit_count(), 1);
    }

    // ── textures ──────────────────────────────────────────────────────────

    #[test]
    fn user_textures_share_the_table() {
        let mut io = io();
        let mut backend = init_with(&mut io, MemoryDisplay::new(4, 4));
        let before = backend.textures().free_slots();

        let id = backend.create_texture(&[0u8; 16], 2, 2).unwrap();
        assert_ne!(id, backend.font_texture());
        assert_eq!(backend.textures().free_slots(), before - 1);

        backend.delete_texture(id);
        backend.delete_texture(id);
        assert_eq!(backend.textures().free_slots(), before);
    }

    #[test]
    fn replaced_atlas_is_picked_up_after_destroy() {
        let mut io = io();
        let mut backend = init_with(&mut io, MemoryDisplay::new(4, 4));

        io.set_atlas(vec![0xFF; 32 * 16 * 4], 32, 16);
        backend.destroy_device_objects(&mut io);
        backend.new_frame(&mut io);

        let font = backend.font_texture();
        let tex = backend.textures().get(font).unwrap();
        assert_eq!((tex.width(), tex.height()), (32, 16));
        assert_eq!(io.font_texture(), font);
    }

    #[test]
    fn deleting_font_texture_rebuilds_on_next_frame() {
        let mut io = io();
        let mut backend = init_with(&mut io, MemoryDisplay::new(4, 4));

        let font = backend.font_texture();
        backend.delete_texture(font);
        assert!(backend.font_texture().is_none());

        backend.new_frame(&mut io);
        assert!(!backend.font_texture().is_none());
        assert_eq!(io.font_texture(), backend.font_texture());
    }

    #[test]
    fn recreating_device_objects_reuses_slot() {
        let mut io = io();
        let mut backend = init_with(&mut io, MemoryDisplay::new(4, 4));
        let used = backend.textures().len();

        backend.create_device_objects(&mut io).unwrap();
        assert_eq!(backend.textures().len(), used);

        backend.destroy_device_objects(&mut io);
        assert!(io.font_texture().is_none());
        assert_eq!(backend.textures().len(), used - 1);
    }

    #[test]
    fn full_table_fails_create_texture() {
        let mut io = io();
        let config = BackendConfig { texture_capacity: 3, ..BackendConfig::default() };
        let mut backend = Backend::init(&mut io, Devices::new(MemoryDisplay::new(4, 4)), config).unwrap();

        backend.create_texture(&[0u8; 4], 1, 1).unwrap();
        let err = backend.create_texture(&[0u8; 4], 1, 1).unwrap_err();
        assert_eq!(err, BackendError::Texture(TextureError::TableFull { capacity: 3 }));
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn new_frame_publishes_delta_time() {
        let mut io = io();
        let mut backend = init_with(&mut io, MemoryDisplay::new(4, 4));
        backend.new_frame(&mut io);
        assert!(io.delta_time() > 0.0);
    }

    #[test]
    fn new_frame_feeds_input_to_gui() {
        let mut io = io();
        let keyboard = ScriptedKeyboard::new();
        let pointer = ScriptedPointer::new();
        let devices = Devices::new(MemoryDisplay::new(100, 50))
            .with_keyboard(keyboard.clone())
            .with_pointer(pointer.clone());
        let mut backend = Backend::init(&mut io, devices, BackendConfig::default()).unwrap();

        keyboard.push(KeyStroke::scan(scan::ESC));
        pointer.push(PointerState { relative_x: 10_000, relative_y: 5_000, left_button: true, ..PointerState::default() });

        backend.new_frame(&mut io);

        assert_eq!(backend.pointer_position(), (10, 5));
        assert_eq!(io.input().pointer_pos, Some((10.0, 5.0)));
        assert!(io.input().button_down(MouseButton::Left));
        // Firmware keyboards report no release: the press is paired immediately.
        assert!(!io.input().key_down(Key::Escape));
        assert!(io.input_frame().events.contains(&InputEvent::Key { key: Key::Escape, state: KeyState::Pressed }));
        assert!(io.input_frame().events.contains(&InputEvent::Key { key: Key::Escape, state: KeyState::Released }));
    }

    #[test]
    fn missing_devices_leave_input_idle() {
        let mut io = io();
        let mut backend = init_with(&mut io, MemoryDisplay::new(4, 4));
        backend.new_frame(&mut io);
        assert!(io.input_frame().events.is_empty());
    }

    #[test]
    fn textured_vertices_render_flat() {
        let mut io = io();
        let display = MemoryDisplay::new(4, 4);
        let mut backend = init_with(&mut io, display.clone());

        let mut list = DrawList::default();
        list.vtx_buffer.extend([
            DrawVert::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0), 0xFF00_00FF),
            DrawVert::new(Vec2::new(4.0, 0.0), Vec2::new(1.0, 0.0), 0xFF00_00FF),
            DrawVert::new(Vec2::new(0.0, 4.0), Vec2::new(0.0, 1.0), 0xFF00_00FF),
        ]);
        list.idx_buffer.extend([0, 1, 2]);
        list.cmd_buffer.push(DrawCmd::new(
            ClipRect::new(0.0, 0.0, 4.0, 4.0),
            backend.font_texture(),
            3,
        ));

        let stats = backend.render_draw_data(&DrawData::new(vec![list]));
        assert_eq!(stats.glyph_triangles, 1);
        assert_eq!(display.pixel(0, 0), Some(0xFFFF_0000));
    }
}
