use std::fmt;
use std::rc::Rc;

use crate::coords::{PixelRect, Vec2};
use crate::texture::TextureId;

use super::DrawList;

/// Clip rectangle in screen pixels, as `min`/`max` corners.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ClipRect {
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { min: Vec2::new(x0, y0), max: Vec2::new(x1, y1) }
    }

    /// Snaps to integer pixel bounds (truncating toward zero).
    ///
    /// The result may be empty or inverted; callers intersect it with the screen.
    #[inline]
    pub fn to_pixels(self) -> PixelRect {
        PixelRect::new(self.min.x as i32, self.min.y as i32, self.max.x as i32, self.max.y as i32)
    }

    /// Overlap of two clip rects; an empty rect (not `None`) when disjoint so
    /// commands recorded under it are culled by the renderer.
    pub fn intersect(self, other: ClipRect) -> ClipRect {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max).max(min);
        ClipRect { min, max }
    }
}

/// Custom render callback attached to a command in place of geometry.
#[derive(Clone)]
pub enum DrawCallback {
    /// Asks the renderer to restore its default state. Nothing to do for a
    /// software renderer.
    ResetRenderState,
    /// User callback invoked with the owning list and the command.
    User(Rc<dyn Fn(&DrawList, &DrawCmd)>),
}

impl DrawCallback {
    /// Wraps a closure as a user callback.
    pub fn user(f: impl Fn(&DrawList, &DrawCmd) + 'static) -> Self {
        Self::User(Rc::new(f))
    }
}

impl fmt::Debug for DrawCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResetRenderState => f.write_str("ResetRenderState"),
            Self::User(_) => f.write_str("User(..)"),
        }
    }
}

/// One draw command: `elem_count` indices rendered under `clip_rect` with `texture`.
#[derive(Debug, Clone, Default)]
pub struct DrawCmd {
    pub clip_rect: ClipRect,
    pub texture: TextureId,
    pub elem_count: u32,
    /// When set, the renderer runs the callback and ignores geometry.
    pub callback: Option<DrawCallback>,
}

impl DrawCmd {
    #[inline]
    pub fn new(clip_rect: ClipRect, texture: TextureId, elem_count: u32) -> Self {
        Self { clip_rect, texture, elem_count, callback: None }
    }
}
