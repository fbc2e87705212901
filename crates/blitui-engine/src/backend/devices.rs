use crate::device::{DisplayDevice, KeyboardDevice, PointerDevice};

/// Device handles handed to [`Backend::init`](super::Backend::init).
///
/// The display is mandatory; a missing keyboard or pointer only disables that
/// input channel.
pub struct Devices {
    pub display: Box<dyn DisplayDevice>,
    pub keyboard: Option<Box<dyn KeyboardDevice>>,
    pub pointer: Option<Box<dyn PointerDevice>>,
}

impl Devices {
    pub fn new(display: impl DisplayDevice + 'static) -> Self {
        Self { display: Box::new(display), keyboard: None, pointer: None }
    }

    pub fn with_keyboard(mut self, keyboard: impl KeyboardDevice + 'static) -> Self {
        self.keyboard = Some(Box::new(keyboard));
        self
    }

    pub fn with_pointer(mut self, pointer: impl PointerDevice + 'static) -> Self {
        self.pointer = Some(Box::new(pointer));
        self
    }
}
