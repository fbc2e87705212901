use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, InputSink, Key, KeyState, MouseButton, PointerButtonEvent, PointerMoveEvent};

/// Held input as seen by the GUI side: pointer position, keys and buttons down.
///
/// Transitions are written to an [`InputFrame`] as events are applied.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in screen pixels; `None` until the first position event.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,

    /// Indexed by [`MouseButton::index`].
    pub buttons_down: [bool; 2],
}

impl InputState {
    /// Applies `ev` and records it, with any transition it causes, in `frame`.
    ///
    /// Repeated presses of a held key or button are not transitions.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => self.pointer_pos = Some((x, y)),

            InputEvent::Key { key, state } => {
                let changed = match state {
                    KeyState::Pressed => self.keys_down.insert(key),
                    KeyState::Released => self.keys_down.remove(&key),
                };
                if changed {
                    frame.record_key(key, state);
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state }) => {
                let held = &mut self.buttons_down[button.index()];
                if *held != state.is_pressed() {
                    *held = state.is_pressed();
                    frame.record_button(button, state);
                }
            }

            InputEvent::Text(c) => frame.text.push(c),
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down[button.index()]
    }
}

/// State paired with the frame it feeds; the simplest complete input queue.
impl InputSink for (InputState, InputFrame) {
    fn push_event(&mut self, ev: InputEvent) {
        let (state, frame) = self;
        state.apply_event(frame, ev);
    }
}
