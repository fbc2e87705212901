use thiserror::Error;

use crate::texture::TextureError;

/// Backend lifecycle and resource errors.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum BackendError {
    /// A renderer backend is already registered for this GUI session.
    #[error("renderer backend '{name}' is already initialized for this GUI session")]
    AlreadyInitialized { name: &'static str },

    /// Operation requires an initialized backend.
    #[error("renderer backend is not initialized")]
    NotInitialized,

    /// The display reports a mode with no pixels.
    #[error("display mode {width}x{height} has no pixels")]
    InvalidDisplayMode { width: u32, height: u32 },

    /// The framebuffer could not be allocated.
    #[error("out of memory allocating the {width}x{height} framebuffer")]
    FramebufferAlloc { width: u32, height: u32 },

    #[error("texture creation failed: {0}")]
    Texture(#[from] TextureError),
}
