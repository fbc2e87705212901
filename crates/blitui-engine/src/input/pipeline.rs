use crate::device::{KeyStroke, KeyboardDevice, PointerDevice, PointerState};

use super::keymap::{key_for_control_char, key_for_scan_code, scan};
use super::types::{
    InputEvent, InputSink, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

/// Device motion units per screen pixel used when no divisor is configured.
pub const DEFAULT_POINTER_DIVISOR: i32 = 1000;

/// Per-frame input poller.
///
/// Owns the pointer's accumulated position and last reported button states; the
/// devices themselves are passed in on every poll.
///
/// Keystroke devices report discrete strokes, so every key is emitted as a press
/// immediately followed by a release. Held-key duration cannot be observed.
#[derive(Debug, Clone)]
pub struct InputPipeline {
    max_x: i32,
    max_y: i32,
    divisor: i32,

    pointer_x: i32,
    pointer_y: i32,
    /// Indexed by `MouseButton::index`.
    buttons_down: [bool; 2],
}

impl InputPipeline {
    /// Creates a pipeline for a `width × height` screen with the pointer at the origin.
    ///
    /// `divisor` converts device motion units to pixels; values below 1 are raised to 1.
    pub fn new(width: u32, height: u32, divisor: i32) -> Self {
        Self {
            max_x: last_index(width),
            max_y: last_index(height),
            divisor: divisor.max(1),
            pointer_x: 0,
            pointer_y: 0,
            buttons_down: [false; 2],
        }
    }

    /// Current pointer position in screen pixels.
    #[inline]
    pub fn pointer_position(&self) -> (i32, i32) {
        (self.pointer_x, self.pointer_y)
    }

    /// Last button state reported to the sink.
    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down[button.index()]
    }

    /// Polls each present device once and pushes the resulting events into `sink`.
    ///
    /// A missing device or a failed read leaves that channel idle for this frame.
    pub fn poll<'d, S: InputSink + ?Sized>(
        &mut self,
        keyboard: Option<&mut (dyn KeyboardDevice + 'd)>,
        pointer: Option<&mut (dyn PointerDevice + 'd)>,
        sink: &mut S,
    ) {
        if let Some(keyboard) = keyboard {
            match keyboard.read_key_stroke() {
                Ok(Some(stroke)) => emit_key_stroke(stroke, sink),
                Ok(None) => {}
                Err(err) => log::debug!("keyboard read failed: {err}"),
            }
        }

        if let Some(pointer) = pointer {
            match pointer.read_state() {
                Ok(Some(state)) => self.apply_pointer_state(state, sink),
                Ok(None) => {}
                Err(err) => log::debug!("pointer read failed: {err}"),
            }
        }
    }

    fn apply_pointer_state<S: InputSink + ?Sized>(&mut self, state: PointerState, sink: &mut S) {
        // Integer division truncates toward zero: sub-divisor motion is discarded.
        self.pointer_x = self.pointer_x.saturating_add(state.relative_x / self.divisor).clamp(0, self.max_x);
        self.pointer_y = self.pointer_y.saturating_add(state.relative_y / self.divisor).clamp(0, self.max_y);

        sink.push_event(InputEvent::PointerMoved(PointerMoveEvent {
            x: self.pointer_x as f32,
            y: self.pointer_y as f32,
        }));

        for (button, down) in [
            (MouseButton::Left, state.left_button),
            (MouseButton::Right, state.right_button),
        ] {
            let slot = &mut self.buttons_down[button.index()];
            if *slot != down {
                *slot = down;
                sink.push_event(InputEvent::PointerButton(PointerButtonEvent {
                    button,
                    state: MouseButtonState::from_down(down),
                }));
            }
        }
    }
}

fn emit_key_stroke<S: InputSink + ?Sized>(stroke: KeyStroke, sink: &mut S) {
    if stroke.scan_code != scan::NULL {
        match key_for_scan_code(stroke.scan_code) {
            Some(key) => emit_key_tap(key, sink),
            None => log::trace!("ignoring unmapped scan code {:#06x}", stroke.scan_code),
        }
    }

    if stroke.unicode_char != 0 {
        match char::from_u32(u32::from(stroke.unicode_char)) {
            Some(c) => {
                if let Some(key) = key_for_control_char(c) {
                    emit_key_tap(key, sink);
                } else if !c.is_control() {
                    sink.push_event(InputEvent::Text(c));
                }
            }
            None => log::debug!("dropping non-scalar character {:#06x}", stroke.unicode_char),
        }
    }
}

fn emit_key_tap<S: InputSink + ?Sized>(key: Key, sink: &mut S) {
    sink.push_event(InputEvent::Key { key, state: KeyState::Pressed });
    sink.push_event(InputEvent::Key { key, state: KeyState::Released });
}

#[inline]
fn last_index(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX).saturating_sub(1).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::memory::{ScriptedKeyboard, ScriptedPointer};
    use crate::device::DeviceError;

    fn buttons(left: bool, right: bool) -> PointerState {
        PointerState { left_button: left, right_button: right, ..PointerState::default() }
    }

    fn button_events(events: &[InputEvent]) -> Vec<PointerButtonEvent> {
        events
            .iter()
            .filter_map(|e| match e {
                InputEvent::PointerButton(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    fn poll_pointer(p: &mut InputPipeline, pointer: &mut ScriptedPointer) -> Vec<InputEvent> {
        let mut events = Vec::new();
        p.poll(None, Some(pointer), &mut events);
        events
    }

    fn poll_keyboard(p: &mut InputPipeline, keyboard: &mut ScriptedKeyboard) -> Vec<InputEvent> {
        let mut events = Vec::new();
        p.poll(Some(keyboard), None, &mut events);
        events
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    #[test]
    fn scan_code_emits_press_then_release() {
        let mut p = InputPipeline::new(100, 100, DEFAULT_POINTER_DIVISOR);
        let mut kb = ScriptedKeyboard::new();
        kb.push(KeyStroke::scan(scan::F5));
        assert_eq!(
            poll_keyboard(&mut p, &mut kb),
            vec![
                InputEvent::Key { key: Key::F5, state: KeyState::Pressed },
                InputEvent::Key { key: Key::F5, state: KeyState::Released },
            ]
        );
    }

    #[test]
    fn printable_char_emits_text_only() {
        let mut p = InputPipeline::new(100, 100, DEFAULT_POINTER_DIVISOR);
        let mut kb = ScriptedKeyboard::new();
        kb.push(KeyStroke::char('é'));
        assert_eq!(poll_keyboard(&mut p, &mut kb), vec![InputEvent::Text('é')]);
    }

    #[test]
    fn scan_code_and_char_are_handled_independently() {
        let mut p = InputPipeline::new(100, 100, DEFAULT_POINTER_DIVISOR);
        let mut kb = ScriptedKeyboard::new();
        kb.push(KeyStroke { scan_code: scan::UP, unicode_char: 'k' as u16 });
        let events = poll_keyboard(&mut p, &mut kb);
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], InputEvent::Text('k'));
    }

    #[test]
    fn unmapped_scan_code_is_ignored() {
        let mut p = InputPipeline::new(100, 100, DEFAULT_POINTER_DIVISOR);
        let mut kb = ScriptedKeyboard::new();
        kb.push(KeyStroke::scan(0x50));
        assert!(poll_keyboard(&mut p, &mut kb).is_empty());
    }

    #[test]
    fn carriage_return_becomes_enter_key() {
        let mut p = InputPipeline::new(100, 100, DEFAULT_POINTER_DIVISOR);
        let mut kb = ScriptedKeyboard::new();
        kb.push(KeyStroke::char('\r'));
        assert_eq!(
            poll_keyboard(&mut p, &mut kb),
            vec![
                InputEvent::Key { key: Key::Enter, state: KeyState::Pressed },
                InputEvent::Key { key: Key::Enter, state: KeyState::Released },
            ]
        );
    }

    #[test]
    fn surrogate_char_is_dropped() {
        let mut p = InputPipeline::new(100, 100, DEFAULT_POINTER_DIVISOR);
        let mut kb = ScriptedKeyboard::new();
        kb.push(KeyStroke { scan_code: 0, unicode_char: 0xD800 });
        assert!(poll_keyboard(&mut p, &mut kb).is_empty());
    }

    #[test]
    fn one_keystroke_per_poll() {
        let mut p = InputPipeline::new(100, 100, DEFAULT_POINTER_DIVISOR);
        let mut kb = ScriptedKeyboard::new();
        kb.push(KeyStroke::char('a'));
        kb.push(KeyStroke::char('b'));
        assert_eq!(poll_keyboard(&mut p, &mut kb), vec![InputEvent::Text('a')]);
        assert_eq!(kb.pending(), 1);
    }

    #[test]
    fn keyboard_error_is_not_fatal() {
        let mut p = InputPipeline::new(100, 100, DEFAULT_POINTER_DIVISOR);
        let mut kb = ScriptedKeyboard::new();
        kb.push_error(DeviceError::Fault("unplugged".into()));
        assert!(poll_keyboard(&mut p, &mut kb).is_empty());
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn motion_is_scaled_and_clamped() {
        let mut p = InputPipeline::new(100, 50, 1000);
        let mut ptr = ScriptedPointer::new();
        ptr.push_motion(12_999, 3_000);
        assert_eq!(
            poll_pointer(&mut p, &mut ptr),
            vec![InputEvent::PointerMoved(PointerMoveEvent { x: 12.0, y: 3.0 })]
        );

        ptr.push_motion(1_000_000, 1_000_000);
        poll_pointer(&mut p, &mut ptr);
        assert_eq!(p.pointer_position(), (99, 49));

        ptr.push_motion(-5_000_000, -999);
        poll_pointer(&mut p, &mut ptr);
        assert_eq!(p.pointer_position(), (0, 49));
    }

    #[test]
    fn position_event_emitted_even_without_motion() {
        let mut p = InputPipeline::new(10, 10, 1000);
        let mut ptr = ScriptedPointer::new();
        ptr.push_motion(0, 0);
        let events = poll_pointer(&mut p, &mut ptr);
        assert_eq!(events, vec![InputEvent::PointerMoved(PointerMoveEvent { x: 0.0, y: 0.0 })]);
    }

    #[test]
    fn unchanged_buttons_emit_no_transition_on_second_poll() {
        let mut p = InputPipeline::new(10, 10, 1000);
        let mut ptr = ScriptedPointer::new();
        ptr.push(buttons(true, false));
        ptr.push(buttons(true, false));

        let first = poll_pointer(&mut p, &mut ptr);
        assert_eq!(
            button_events(&first),
            vec![PointerButtonEvent { button: MouseButton::Left, state: MouseButtonState::Pressed }]
        );

        let second = poll_pointer(&mut p, &mut ptr);
        assert!(button_events(&second).is_empty());
        assert!(p.button_down(MouseButton::Left));
    }

    #[test]
    fn each_changed_button_emits_exactly_one_event() {
        let mut p = InputPipeline::new(10, 10, 1000);
        let mut ptr = ScriptedPointer::new();
        ptr.push(buttons(true, false));
        ptr.push(buttons(false, true));
        poll_pointer(&mut p, &mut ptr);

        let events = poll_pointer(&mut p, &mut ptr);
        assert_eq!(
            button_events(&events),
            vec![
                PointerButtonEvent { button: MouseButton::Left, state: MouseButtonState::Released },
                PointerButtonEvent { button: MouseButton::Right, state: MouseButtonState::Pressed },
            ]
        );
    }

    #[test]
    fn empty_or_failed_pointer_read_emits_nothing() {
        let mut p = InputPipeline::new(10, 10, 1000);
        let mut ptr = ScriptedPointer::new();
        assert!(poll_pointer(&mut p, &mut ptr).is_empty());
        ptr.push_error(DeviceError::Fault("timeout".into()));
        assert!(poll_pointer(&mut p, &mut ptr).is_empty());
    }

    #[test]
    fn missing_devices_are_ignored() {
        let mut p = InputPipeline::new(10, 10, 1000);
        let mut events = Vec::new();
        p.poll(None, None, &mut events);
        assert!(events.is_empty());
    }
}
