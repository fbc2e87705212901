//! Software rasterizer.
//!
//! Pure drawing routines over a borrowed `u32` pixel buffer. Every routine clips
//! against the buffer bounds, so callers can pass arbitrary (even off-screen)
//! geometry.
//!
//! Triangles are flat-shaded with the first vertex's color. There is no per-vertex
//! color interpolation and no texture sampling; text and gradients render as
//! solid blocks. This is the intended fidelity of this backend.

mod canvas;
mod line;
mod triangle;

pub use canvas::Canvas;
