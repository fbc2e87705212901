//! Per-frame draw data, as produced by an immediate-mode GUI library.
//!
//! Layout mirrors what such libraries emit: a frame holds command lists; each list
//! owns a vertex buffer, an index buffer, and commands that each consume
//! `elem_count` consecutive indices under one clip rect and texture.
//!
//! The backend only borrows a [`DrawData`] for the duration of one render call.

mod cmd;
mod data;
mod list;
mod vert;

pub use cmd::{ClipRect, DrawCallback, DrawCmd};
pub use data::DrawData;
pub use list::DrawList;
pub use vert::{DrawIdx, DrawVert};
