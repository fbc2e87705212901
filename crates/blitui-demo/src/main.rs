use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use blitui_engine::coords::Vec2;
use blitui_engine::device::memory::{MemoryDisplay, ScriptedKeyboard, ScriptedPointer};
use blitui_engine::device::{KeyStroke, PointerState};
use blitui_engine::draw::{ClipRect, DrawData, DrawList, DrawVert};
use blitui_engine::gui::HeadlessIo;
use blitui_engine::input::{scan, Key, MouseButton};
use blitui_engine::logging::{init_logging, LoggingConfig};
use blitui_engine::paint::{gui_color, native_to_rgba};
use blitui_engine::{BackendConfig, BackendSlot, Devices, TextureId};

const SCREEN_W: u32 = 320;
const SCREEN_H: u32 = 200;
const ATLAS_SIZE: u32 = 16;
const FRAMES: usize = 4;

/// Scripted session state the "UI" reacts to.
#[derive(Debug, Default)]
struct DemoState {
    panel_open: bool,
    clicks: u32,
    typed: String,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("blitui-frame.png"));

    let display = MemoryDisplay::new(SCREEN_W, SCREEN_H);
    let keyboard = ScriptedKeyboard::new();
    let pointer = ScriptedPointer::new();
    script_input(&keyboard, &pointer);

    let mut io = HeadlessIo::new(checker_atlas(ATLAS_SIZE), ATLAS_SIZE, ATLAS_SIZE);
    let devices = Devices::new(display.clone())
        .with_keyboard(keyboard.clone())
        .with_pointer(pointer.clone());

    let mut slot = BackendSlot::new();
    slot.init(&mut io, devices, BackendConfig { clear_color: 0xFF10_1418, ..BackendConfig::default() })
        .context("failed to initialize the framebuffer backend")?;

    let mut state = DemoState::default();
    for frame in 0..FRAMES {
        io.begin_frame();
        slot.new_frame(&mut io);
        update(&mut state, &io);

        let draw_data = build_ui(&state, &io);
        if let Some(stats) = slot.render_draw_data(Some(&draw_data)) {
            log::info!(
                "frame {frame}: {} commands, {} triangles ({} glyph), {} pixels",
                stats.commands_drawn,
                stats.triangles_drawn(),
                stats.glyph_triangles,
                stats.pixels_written,
            );
        }
    }
    log::info!("typed {:?}, {} clicks", state.typed, state.clicks);

    slot.shutdown(&mut io);

    save_png(&display, &out).with_context(|| format!("failed to write {}", out.display()))?;
    log::info!("wrote {}", out.display());
    Ok(())
}

fn script_input(keyboard: &ScriptedKeyboard, pointer: &ScriptedPointer) {
    for c in "hi".chars() {
        keyboard.push(KeyStroke::char(c));
    }
    keyboard.push(KeyStroke::scan(scan::F1));

    // Motion arrives in device units, 1000 per pixel.
    pointer.push_motion(120_000, 80_000);
    pointer.push(PointerState { relative_x: 40_000, left_button: true, ..PointerState::default() });
    pointer.push(PointerState { relative_y: 20_000, ..PointerState::default() });
}

fn update(state: &mut DemoState, io: &HeadlessIo) {
    let frame = io.input_frame();
    if frame.key_pressed(Key::F1) {
        state.panel_open = !state.panel_open;
    }
    if frame.button_pressed(MouseButton::Left) {
        state.clicks += 1;
    }
    state.typed.push_str(&frame.text);
}

fn build_ui(state: &DemoState, io: &HeadlessIo) -> DrawData {
    let (w, h) = io.display_size();
    let mut list = DrawList::new(ClipRect::new(0.0, 0.0, w, h));

    // Title bar.
    list.add_rect_filled(Vec2::new(0.0, 0.0), Vec2::new(w, 18.0), gui_color(0x30, 0x50, 0x90, 0xFF));
    for i in 0..state.typed.chars().count() {
        glyph_quad(&mut list, io.font_texture(), Vec2::new(4.0 + i as f32 * 10.0, 2.0), 8.0);
    }

    // Side panel, its contents clipped to the panel body.
    if state.panel_open {
        list.add_rect_filled(Vec2::new(8.0, 26.0), Vec2::new(120.0, 190.0), gui_color(0x28, 0x2C, 0x34, 0xFF));
        list.push_clip_rect(ClipRect::new(12.0, 30.0, 116.0, 186.0));
        for row in 0..8 {
            let y = 34.0 + row as f32 * 20.0;
            let col = if row as u32 == state.clicks { gui_color(0xE0, 0xA0, 0x30, 0xFF) } else { gui_color(0x60, 0x68, 0x70, 0xFF) };
            list.add_rect_filled(Vec2::new(14.0, y), Vec2::new(200.0, y + 14.0), col);
        }
        list.pop_clip_rect();
    }

    // Plot.
    let plot: [(f32, f32); 5] = [(140.0, 170.0), (170.0, 120.0), (200.0, 140.0), (240.0, 60.0), (300.0, 90.0)];
    for pair in plot.windows(2) {
        list.add_line(Vec2::from(pair[0]), Vec2::from(pair[1]), gui_color(0x40, 0xD0, 0x80, 0xFF), 2.0);
    }

    // Pointer.
    if let Some((x, y)) = io.input().pointer_pos {
        list.add_triangle(
            Vec2::new(x, y),
            Vec2::new(x, y + 12.0),
            Vec2::new(x + 8.0, y + 9.0),
            gui_color(0xFF, 0xFF, 0xFF, 0xFF),
        );
    }

    DrawData::new(vec![list])
}

/// Emits one atlas-textured square, the way a text layout would per glyph.
fn glyph_quad(list: &mut DrawList, font: TextureId, min: Vec2, size: f32) {
    let col = gui_color(0xF0, 0xF0, 0xF0, 0xFF);
    let max = min + Vec2::new(size, size);
    list.push_texture(font);
    list.add_geometry(
        &[
            DrawVert::new(min, Vec2::new(0.0, 0.0), col),
            DrawVert::new(Vec2::new(max.x, min.y), Vec2::new(1.0, 0.0), col),
            DrawVert::new(max, Vec2::new(1.0, 1.0), col),
            DrawVert::new(Vec2::new(min.x, max.y), Vec2::new(0.0, 1.0), col),
        ],
        &[0, 1, 2, 0, 2, 3],
    );
    list.pop_texture();
}

/// RGBA32 checkerboard standing in for a rasterized font atlas.
fn checker_atlas(size: u32) -> Vec<u8> {
    (0..size * size)
        .flat_map(|i| {
            let (x, y) = (i % size, i / size);
            let v = if (x / 4 + y / 4) % 2 == 0 { 0xFF } else { 0x00 };
            [0xFF, 0xFF, 0xFF, v]
        })
        .collect()
}

fn save_png(display: &MemoryDisplay, path: &Path) -> Result<()> {
    let bytes: Vec<u8> = display.snapshot().into_iter().flat_map(native_to_rgba).collect();
    let image = image::RgbaImage::from_raw(SCREEN_W, SCREEN_H, bytes).context("screen size does not match its pixel count")?;
    image.save(path)?;
    Ok(())
}
