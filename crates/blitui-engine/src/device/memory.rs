//! In-memory devices.
//!
//! Each device is a cheap handle around shared state: clone it, hand one clone to
//! the backend, and keep the other to script input or inspect the screen.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{DeviceError, DisplayDevice, DisplayMode, KeyStroke, KeyboardDevice, PointerDevice, PointerState};

#[derive(Debug)]
struct Screen {
    mode: DisplayMode,
    pixels: Vec<u32>,
    blits: usize,
    fail_next: Option<DeviceError>,
}

/// Display that copies blits into an in-memory screen.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    screen: Rc<RefCell<Screen>>,
}

impl MemoryDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        let screen = Screen {
            mode: DisplayMode::new(width, height),
            pixels: vec![0; width as usize * height as usize],
            blits: 0,
            fail_next: None,
        };
        Self { screen: Rc::new(RefCell::new(screen)) }
    }

    /// Copy of the visible screen contents.
    pub fn snapshot(&self) -> Vec<u32> {
        self.screen.borrow().pixels.clone()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        let s = self.screen.borrow();
        if x >= s.mode.width || y >= s.mode.height {
            return None;
        }
        s.pixels.get(y as usize * s.mode.width as usize + x as usize).copied()
    }

    /// Number of successful blits so far.
    pub fn blit_count(&self) -> usize {
        self.screen.borrow().blits
    }

    /// Makes the next blit fail with `err`.
    pub fn fail_next_blit(&self, err: DeviceError) {
        self.screen.borrow_mut().fail_next = Some(err);
    }
}

impl DisplayDevice for MemoryDisplay {
    fn mode(&self) -> DisplayMode {
        self.screen.borrow().mode
    }

    fn blit(&mut self, pixels: &[u32], x: u32, y: u32, width: u32, height: u32) -> Result<(), DeviceError> {
        let mut s = self.screen.borrow_mut();
        if let Some(err) = s.fail_next.take() {
            return Err(err);
        }

        let mode = s.mode;
        let fits_x = x.checked_add(width).is_some_and(|r| r <= mode.width);
        let fits_y = y.checked_add(height).is_some_and(|b| b <= mode.height);
        if !fits_x || !fits_y {
            return Err(DeviceError::InvalidRequest(format!(
                "blit {width}x{height} at ({x}, {y}) exceeds {}x{} mode",
                mode.width, mode.height
            )));
        }
        if pixels.len() < width as usize * height as usize {
            return Err(DeviceError::InvalidRequest(format!(
                "blit source holds {} pixels, need {}",
                pixels.len(),
                width as usize * height as usize
            )));
        }

        let (w, sw) = (width as usize, mode.width as usize);
        for row in 0..height as usize {
            let dst = (y as usize + row) * sw + x as usize;
            s.pixels[dst..dst + w].copy_from_slice(&pixels[row * w..row * w + w]);
        }
        s.blits += 1;
        Ok(())
    }
}

/// Keyboard fed from a script of keystrokes and errors.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeyboard {
    queue: Rc<RefCell<VecDeque<Result<KeyStroke, DeviceError>>>>,
}

impl ScriptedKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, stroke: KeyStroke) {
        self.queue.borrow_mut().push_back(Ok(stroke));
    }

    /// Queues a failed read.
    pub fn push_error(&self, err: DeviceError) {
        self.queue.borrow_mut().push_back(Err(err));
    }

    /// Strokes (and errors) not read yet.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl KeyboardDevice for ScriptedKeyboard {
    fn read_key_stroke(&mut self) -> Result<Option<KeyStroke>, DeviceError> {
        self.queue.borrow_mut().pop_front().transpose()
    }
}

/// Pointer fed from a script of reports and errors.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPointer {
    queue: Rc<RefCell<VecDeque<Result<PointerState, DeviceError>>>>,
}

impl ScriptedPointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, state: PointerState) {
        self.queue.borrow_mut().push_back(Ok(state));
    }

    /// Queues a report with motion only.
    pub fn push_motion(&self, dx: i32, dy: i32) {
        self.push(PointerState { relative_x: dx, relative_y: dy, ..PointerState::default() });
    }

    /// Queues a failed read.
    pub fn push_error(&self, err: DeviceError) {
        self.queue.borrow_mut().push_back(Err(err));
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl PointerDevice for ScriptedPointer {
    fn read_state(&mut self) -> Result<Option<PointerState>, DeviceError> {
        self.queue.borrow_mut().pop_front().transpose()
    }
}
