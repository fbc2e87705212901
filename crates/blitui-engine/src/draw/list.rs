use crate::coords::Vec2;
use crate::texture::TextureId;

use super::{ClipRect, DrawCallback, DrawCmd, DrawIdx, DrawVert};

/// One command list: vertices, indices, and the commands that consume them.
///
/// GUI libraries fill the three buffers directly. The builder methods below cover
/// hosts and tests that need to produce geometry without one:
///
/// ```
/// # use blitui_engine::draw::{ClipRect, DrawList};
/// # use blitui_engine::coords::Vec2;
/// let mut list = DrawList::new(ClipRect::new(0.0, 0.0, 640.0, 480.0));
/// list.push_clip_rect(ClipRect::new(10.0, 10.0, 200.0, 100.0));
/// list.add_rect_filled(Vec2::new(0.0, 0.0), Vec2::new(50.0, 20.0), 0xFF00_00FF);
/// list.pop_clip_rect();
/// ```
///
/// Consecutive geometry under the same clip rect and texture is merged into one
/// command.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vtx_buffer: Vec<DrawVert>,
    pub idx_buffer: Vec<DrawIdx>,
    pub cmd_buffer: Vec<DrawCmd>,

    /// Clip used when the clip stack is empty.
    base_clip: ClipRect,
    /// Effective clips, each already intersected with its parent.
    clip_stack: Vec<ClipRect>,
    texture_stack: Vec<TextureId>,
}

impl DrawList {
    /// Creates an empty list whose geometry is clipped to `base_clip` by default.
    pub fn new(base_clip: ClipRect) -> Self {
        Self { base_clip, ..Self::default() }
    }

    /// Clears buffers and stacks. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.vtx_buffer.clear();
        self.idx_buffer.clear();
        self.cmd_buffer.clear();
        self.clip_stack.clear();
        self.texture_stack.clear();
    }

    #[inline]
    pub fn current_clip_rect(&self) -> ClipRect {
        self.clip_stack.last().copied().unwrap_or(self.base_clip)
    }

    #[inline]
    pub fn current_texture(&self) -> TextureId {
        self.texture_stack.last().copied().unwrap_or(TextureId::NONE)
    }

    /// Begins a clip region, intersected with the current one.
    ///
    /// Calls must be balanced with [`pop_clip_rect`](Self::pop_clip_rect).
    pub fn push_clip_rect(&mut self, rect: ClipRect) {
        let effective = self.current_clip_rect().intersect(rect);
        self.clip_stack.push(effective);
    }

    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip_rect`.
    pub fn pop_clip_rect(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip_rect called without matching push_clip_rect");
        self.clip_stack.pop();
    }

    /// Tags following geometry with `texture` (e.g. the font atlas for glyph quads).
    pub fn push_texture(&mut self, texture: TextureId) {
        self.texture_stack.push(texture);
    }

    /// # Panics
    /// Panics (debug only) if called without a matching `push_texture`.
    pub fn pop_texture(&mut self) {
        debug_assert!(!self.texture_stack.is_empty(), "pop_texture called without matching push_texture");
        self.texture_stack.pop();
    }

    /// Appends a callback command. Geometry added afterwards starts a new command.
    pub fn add_callback(&mut self, callback: DrawCallback) {
        self.cmd_buffer.push(DrawCmd {
            clip_rect: self.current_clip_rect(),
            texture: self.current_texture(),
            elem_count: 0,
            callback: Some(callback),
        });
    }

    /// Appends one triangle with a single color for all three vertices.
    pub fn add_triangle(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, col: u32) {
        self.add_triangle_colored([p0, p1, p2], [col; 3]);
    }

    /// Appends one triangle with per-vertex colors.
    pub fn add_triangle_colored(&mut self, pos: [Vec2; 3], col: [u32; 3]) {
        let verts = [
            DrawVert::new(pos[0], Vec2::zero(), col[0]),
            DrawVert::new(pos[1], Vec2::zero(), col[1]),
            DrawVert::new(pos[2], Vec2::zero(), col[2]),
        ];
        self.add_geometry(&verts, &[0, 1, 2]);
    }

    /// Appends an axis-aligned filled rectangle as two triangles.
    pub fn add_rect_filled(&mut self, min: Vec2, max: Vec2, col: u32) {
        let verts = [
            DrawVert::new(min, Vec2::new(0.0, 0.0), col),
            DrawVert::new(Vec2::new(max.x, min.y), Vec2::new(1.0, 0.0), col),
            DrawVert::new(max, Vec2::new(1.0, 1.0), col),
            DrawVert::new(Vec2::new(min.x, max.y), Vec2::new(0.0, 1.0), col),
        ];
        self.add_geometry(&verts, &[0, 1, 2, 0, 2, 3]);
    }

    /// Appends a line as a quad of the given thickness.
    ///
    /// Zero-length lines produce no geometry.
    pub fn add_line(&mut self, p0: Vec2, p1: Vec2, col: u32, thickness: f32) {
        let d = p1 - p0;
        let len = (d.x * d.x + d.y * d.y).sqrt();
        if len <= f32::EPSILON {
            return;
        }
        let half = thickness.max(1.0) * 0.5;
        let n = Vec2::new(-d.y / len * half, d.x / len * half);
        let verts = [
            DrawVert::new(p0 + n, Vec2::zero(), col),
            DrawVert::new(p1 + n, Vec2::zero(), col),
            DrawVert::new(p1 - n, Vec2::zero(), col),
            DrawVert::new(p0 - n, Vec2::zero(), col),
        ];
        self.add_geometry(&verts, &[0, 1, 2, 0, 2, 3]);
    }

    /// Appends raw geometry; `indices` are relative to the first vertex in `verts`.
    ///
    /// Geometry that would overflow the 16-bit index range is dropped with a warning.
    pub fn add_geometry(&mut self, verts: &[DrawVert], indices: &[DrawIdx]) {
        let base = self.vtx_buffer.len();
        if base + verts.len() > DrawIdx::MAX as usize + 1 {
            log::warn!("draw list vertex buffer full; dropping {} vertices", verts.len());
            return;
        }

        let cmd = self.geometry_cmd();
        cmd.elem_count += indices.len() as u32;

        self.vtx_buffer.extend_from_slice(verts);
        self.idx_buffer.extend(indices.iter().map(|&i| i + base as DrawIdx));
    }

    /// Returns the command new geometry should extend, starting one if the current
    /// clip/texture differs from the last command or the last command is a callback.
    fn geometry_cmd(&mut self) -> &mut DrawCmd {
        let clip_rect = self.current_clip_rect();
        let texture = self.current_texture();

        let reusable = matches!(
            self.cmd_buffer.last(),
            Some(last) if last.callback.is_none() && last.clip_rect == clip_rect && last.texture == texture
        );
        if !reusable {
            self.cmd_buffer.push(DrawCmd::new(clip_rect, texture, 0));
        }

        let last = self.cmd_buffer.len() - 1;
        &mut self.cmd_buffer[last]
    }
}
