//! Pixel formats.
//!
//! The framebuffer and texture table store one `u32` per pixel in the display's
//! native packed order (`0xAARRGGBB`, i.e. B, G, R, A bytes in memory on little-endian).
//! GUI libraries hand out vertex colors as `0xAABBGGRR` (R in the low byte).
//! Conversions between the two live here.

mod color;

pub use color::{gui_color, gui_color_to_native, native_to_rgba, rgba_to_native};
