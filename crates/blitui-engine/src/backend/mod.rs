//! Backend context and lifecycle.
//!
//! [`Backend`] is an initialized session: it owns the framebuffer, the texture
//! table, the devices and the input pipeline. [`BackendSlot`] is the per-GUI-session
//! holder that enforces the init/shutdown contract around it.
//!
//! Per frame, the host calls:
//!
//! ```text
//! slot.new_frame(&mut io)              // poll input, publish delta time
//! // … GUI library builds widgets and finishes its frame …
//! slot.render_draw_data(Some(&data))   // clear, rasterize, blit
//! ```

mod config;
mod context;
mod devices;
mod error;
mod slot;

pub use config::BackendConfig;
pub use context::Backend;
pub use devices::Devices;
pub use error::BackendError;
pub use slot::{BackendSlot, BackendState};
