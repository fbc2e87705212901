use super::types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};

/// Input that arrived during one GUI frame.
///
/// Firmware keyboards deliver a press and its release in the same poll, so a
/// key usually shows up in both [`keys_pressed`](Self::keys_pressed) and
/// [`keys_released`](Self::keys_released). Keys are kept in arrival order.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Characters typed this frame.
    pub text: String,

    keys_pressed: Vec<Key>,
    keys_released: Vec<Key>,

    /// Press and release counts, indexed by [`MouseButton::index`].
    button_presses: [u32; 2],
    button_releases: [u32; 2],
}

impl InputFrame {
    /// Forgets this frame's input. Keeps allocations.
    pub fn clear(&mut self) {
        self.events.clear();
        self.text.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.button_presses = [0; 2];
        self.button_releases = [0; 2];
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub(super) fn record_key(&mut self, key: Key, state: KeyState) {
        match state {
            KeyState::Pressed => self.keys_pressed.push(key),
            KeyState::Released => self.keys_released.push(key),
        }
    }

    pub(super) fn record_button(&mut self, button: MouseButton, state: MouseButtonState) {
        match state {
            MouseButtonState::Pressed => self.button_presses[button.index()] += 1,
            MouseButtonState::Released => self.button_releases[button.index()] += 1,
        }
    }

    pub fn keys_pressed(&self) -> &[Key] {
        &self.keys_pressed
    }

    pub fn keys_released(&self) -> &[Key] {
        &self.keys_released
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn key_released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.button_presses[button.index()] > 0
    }

    pub fn button_released(&self, button: MouseButton) -> bool {
        self.button_releases[button.index()] > 0
    }

    /// Button transitions (pressed or released) recorded this frame.
    pub fn button_transitions(&self) -> u32 {
        self.button_presses.iter().chain(&self.button_releases).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
