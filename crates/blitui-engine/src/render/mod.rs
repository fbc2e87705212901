//! Draw command interpreter.
//!
//! Walks a frame's command lists and rasterizes their triangles into a
//! [`Canvas`](crate::raster::Canvas), honoring clip rects and running callbacks.

mod interpreter;
mod stats;

pub use interpreter::render_draw_data;
pub use stats::RenderStats;
