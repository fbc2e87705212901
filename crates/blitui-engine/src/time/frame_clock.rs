use std::time::{Duration, Instant};

/// Delta reported for the very first frame, before any interval exists.
const FIRST_FRAME_DT: Duration = Duration::from_micros(16_667);

/// Monotonic clock producing clamped per-frame deltas.
///
/// Clamps keep GUI animations sane when the host stalls (debugger, slow blits) or
/// spins faster than the timer resolution.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self { last: None, frame_index: 0, dt_min, dt_max }
    }

    /// Frames ticked so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock and returns the clamped delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => FIRST_FRAME_DT,
        };
        self.last = Some(now);
        self.frame_index = self.frame_index.wrapping_add(1);

        dt.clamp(self.dt_min, self.dt_max).as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
