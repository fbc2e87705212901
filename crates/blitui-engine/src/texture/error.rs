use thiserror::Error;

/// Failure to create a texture.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TextureError {
    /// Every slot except the reserved slot 0 is in use.
    #[error("texture table is full ({capacity} slots)")]
    TableFull { capacity: usize },

    /// The pixel buffer could not be allocated.
    #[error("out of memory allocating a {width}x{height} texture")]
    OutOfMemory { width: u32, height: u32 },

    /// The RGBA source is shorter than `width * height * 4` bytes.
    #[error("texture source too short: expected {expected} bytes, got {actual}")]
    SourceTooShort { expected: usize, actual: usize },
}
