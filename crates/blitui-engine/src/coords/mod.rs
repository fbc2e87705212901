//! Coordinate and geometry types shared by the rasterizer, the draw data and input.
//!
//! Screen space:
//! - Physical pixels (the framebuffer has no DPI scaling)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::PixelRect;
pub use vec2::Vec2;
