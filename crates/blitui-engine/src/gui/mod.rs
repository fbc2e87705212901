//! Boundary to the immediate-mode GUI library.
//!
//! The backend never owns GUI state. It reaches the library through [`GuiIo`]:
//! backend registration, display metrics, the font atlas, and the input queue.

mod headless;
mod io;

pub use headless::HeadlessIo;
pub use io::{BackendInfo, FontAtlas, GuiIo};
