/// Keyboard key identifier.
///
/// Only keys a keystroke device can report are represented: navigation and
/// editing keys, Escape, and function keys. Letters and digits arrive as text.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

impl KeyState {
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == KeyState::Pressed
    }
}

/// Tracked mouse buttons. The middle button and extras are not reported.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    /// Button index in GUI-library convention (0 = left, 1 = right).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

impl MouseButtonState {
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == MouseButtonState::Pressed
    }

    #[inline]
    pub fn from_down(down: bool) -> Self {
        if down { Self::Pressed } else { Self::Released }
    }
}

/// Absolute pointer position in screen pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
}

/// Platform-agnostic input events emitted by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key { key: Key, state: KeyState },

    /// One committed character.
    Text(char),

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),
}

/// Receiver of input events (the GUI library's input queue).
pub trait InputSink {
    fn push_event(&mut self, ev: InputEvent);
}

impl InputSink for Vec<InputEvent> {
    fn push_event(&mut self, ev: InputEvent) {
        self.push(ev);
    }
}
