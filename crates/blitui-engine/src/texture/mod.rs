//! Texture resources.
//!
//! A fixed-capacity arena of pixel buffers addressed by small integer handles.
//! Handle `0` is reserved as "no texture" and is never handed out.

mod error;
mod table;

pub use error::TextureError;
pub use table::{Texture, TextureId, TextureTable, DEFAULT_TEXTURE_CAPACITY};
