//! Frame timing.
//!
//! The backend ticks a [`FrameClock`] in `new_frame` and hands the delta to the GUI
//! library. Frame pacing itself is the host's concern.

mod frame_clock;

pub use frame_clock::FrameClock;
