use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots and keeps loop totals for the shutdown log.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frames: u64,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(Duration::from_millis(250))
    }

    /// Creates a clock whose reported `dt` never exceeds `dt_max`
    /// (debugger pauses, minimized windows).
    pub fn with_max_dt(dt_max: Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frames: 0,
            dt_max,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frames,
        };
        self.frames = self.frames.wrapping_add(1);
        ft
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mean frames per second since construction; 0 before the first tick.
    pub fn average_fps(&self) -> f64 {
        let secs = self.last.saturating_duration_since(self.start).as_secs_f64();
        if self.frames == 0 || secs <= 0.0 {
            0.0
        } else {
            self.frames as f64 / secs
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
