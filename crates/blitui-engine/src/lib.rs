//! Blitui engine crate.
//!
//! Software renderer and polled-input backend for an immediate-mode GUI running
//! on a bare framebuffer: GUI draw lists are rasterized into a CPU buffer and
//! blitted to the display each frame, while keyboard and pointer devices are
//! polled into GUI input events.

pub mod backend;
pub mod device;
pub mod gui;
pub mod input;
pub mod time;

pub mod logging;
pub mod coords;
pub mod draw;
pub mod paint;
pub mod raster;
pub mod render;
pub mod texture;

pub use backend::{Backend, BackendConfig, BackendError, BackendSlot, BackendState, Devices};
pub use draw::{DrawData, DrawList};
pub use gui::{GuiIo, HeadlessIo};
pub use texture::TextureId;
