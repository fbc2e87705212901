//! Device boundary.
//!
//! The backend talks to three devices, each reduced to the one operation it needs:
//! - display: report the current mode, blit a full pixel buffer
//! - keyboard: read one pending keystroke without blocking
//! - pointer: read relative motion and button state without blocking
//!
//! Firmware protocol wrappers implement these traits; `memory` provides in-process
//! implementations for tests and headless hosts.

mod error;
mod framebuffer;
pub mod memory;
mod traits;

pub use error::DeviceError;
pub use framebuffer::Framebuffer;
pub use traits::{DisplayDevice, DisplayMode, KeyStroke, KeyboardDevice, PointerDevice, PointerState};
