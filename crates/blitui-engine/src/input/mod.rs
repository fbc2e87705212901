//! Input subsystem.
//!
//! The [`InputPipeline`] polls the keyboard and pointer once per frame and turns
//! device reports into platform-agnostic [`InputEvent`]s, which it pushes into an
//! [`InputSink`] (normally the GUI library's input queue).
//!
//! [`InputState`] and [`InputFrame`] are the receiving side: held state and
//! per-frame transitions, for sinks that want them.

mod frame;
mod keymap;
mod pipeline;
mod state;
mod types;

pub use frame::InputFrame;
pub use keymap::{key_for_control_char, key_for_scan_code, scan};
pub use pipeline::{InputPipeline, DEFAULT_POINTER_DIVISOR};
pub use state::InputState;
pub use types::{
    InputEvent,
    InputSink,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
