use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// Index into a command list's vertex buffer.
pub type DrawIdx = u16;

/// One vertex: position in screen pixels, atlas UV, and a `0xAABBGGRR` color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct DrawVert {
    pub pos: Vec2,
    pub uv: Vec2,
    pub col: u32,
}

impl DrawVert {
    #[inline]
    pub const fn new(pos: Vec2, uv: Vec2, col: u32) -> Self {
        Self { pos, uv, col }
    }

    /// Untextured vertex (UV at the origin).
    #[inline]
    pub const fn colored(x: f32, y: f32, col: u32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::zero(), col)
    }
}
