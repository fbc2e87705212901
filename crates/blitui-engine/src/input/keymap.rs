use super::Key;

/// Scan codes reported by firmware text-input devices.
pub mod scan {
    pub const NULL: u16 = 0x00;
    pub const UP: u16 = 0x01;
    pub const DOWN: u16 = 0x02;
    pub const RIGHT: u16 = 0x03;
    pub const LEFT: u16 = 0x04;
    pub const HOME: u16 = 0x05;
    pub const END: u16 = 0x06;
    pub const INSERT: u16 = 0x07;
    pub const DELETE: u16 = 0x08;
    pub const PAGE_UP: u16 = 0x09;
    pub const PAGE_DOWN: u16 = 0x0A;
    pub const F1: u16 = 0x0B;
    pub const F2: u16 = 0x0C;
    pub const F3: u16 = 0x0D;
    pub const F4: u16 = 0x0E;
    pub const F5: u16 = 0x0F;
    pub const F6: u16 = 0x10;
    pub const F7: u16 = 0x11;
    pub const F8: u16 = 0x12;
    pub const F9: u16 = 0x13;
    pub const F10: u16 = 0x14;
    pub const F11: u16 = 0x15;
    pub const F12: u16 = 0x16;
    pub const ESC: u16 = 0x17;
}

/// Maps a device scan code to a key. Unmapped codes (and `scan::NULL`) yield `None`.
pub fn key_for_scan_code(code: u16) -> Option<Key> {
    let key = match code {
        scan::UP => Key::ArrowUp,
        scan::DOWN => Key::ArrowDown,
        scan::RIGHT => Key::ArrowRight,
        scan::LEFT => Key::ArrowLeft,
        scan::HOME => Key::Home,
        scan::END => Key::End,
        scan::INSERT => Key::Insert,
        scan::DELETE => Key::Delete,
        scan::PAGE_UP => Key::PageUp,
        scan::PAGE_DOWN => Key::PageDown,
        scan::ESC => Key::Escape,
        scan::F1 => Key::F1,
        scan::F2 => Key::F2,
        scan::F3 => Key::F3,
        scan::F4 => Key::F4,
        scan::F5 => Key::F5,
        scan::F6 => Key::F6,
        scan::F7 => Key::F7,
        scan::F8 => Key::F8,
        scan::F9 => Key::F9,
        scan::F10 => Key::F10,
        scan::F11 => Key::F11,
        scan::F12 => Key::F12,
        _ => return None,
    };
    Some(key)
}

/// Keys that keystroke devices deliver through the character field.
pub fn key_for_control_char(c: char) -> Option<Key> {
    match c {
        '\u{08}' => Some(Key::Backspace),
        '\t' => Some(Key::Tab),
        '\r' => Some(Key::Enter),
        _ => None,
    }
}
