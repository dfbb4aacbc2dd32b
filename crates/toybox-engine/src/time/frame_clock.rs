use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The delta is the raw wall-clock time between ticks; long stalls are not
/// clamped.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        FrameTime { dt: dt.as_secs_f32() }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
