//! Animation clock: produces the two time bases each frame consumes.
//!
//! `delta_secs` drives continuous, rate-based motion (planet, satellite).
//! `now_ms` is a wall-clock timestamp used only for discrete meteor spawn
//! scheduling. The two are never substituted for one another.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use orrery_core::constants::{MAX_FRAME_DELTA_SECS, TICK_RATE};

/// Time inputs for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub delta_secs: f64,
    /// Wall-clock timestamp (ms).
    pub now_ms: u64,
}

impl FrameTime {
    pub fn new(delta_secs: f64, now_ms: u64) -> Self {
        Self { delta_secs, now_ms }
    }
}

/// Source of per-frame time.
pub trait FrameClock {
    fn next_frame(&mut self) -> FrameTime;
}

/// Milliseconds since the Unix epoch, 0 if the system clock is before it.
pub fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Real clock: monotonic delta plus wall-clock timestamp.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for SystemClock {
    fn next_frame(&mut self) -> FrameTime {
        let now = Instant::now();
        // First frame has no predecessor; long stalls are capped.
        let delta_secs = self
            .last
            .map(|last| now.duration_since(last).as_secs_f64())
            .unwrap_or(0.0)
            .min(MAX_FRAME_DELTA_SECS);
        self.last = Some(now);
        FrameTime {
            delta_secs,
            now_ms: wall_clock_ms(),
        }
    }
}

/// Deterministic clock stepping a fixed delta per frame.
#[derive(Debug, Clone)]
pub struct ManualClock {
    start_ms: u64,
    delta_secs: f64,
    elapsed_ms: f64,
}

impl ManualClock {
    pub fn new(start_ms: u64, delta_secs: f64) -> Self {
        Self {
            start_ms,
            delta_secs,
            elapsed_ms: 0.0,
        }
    }

    /// Clock running at the nominal tick rate from `start_ms`.
    pub fn at_tick_rate(start_ms: u64) -> Self {
        Self::new(start_ms, 1.0 / TICK_RATE as f64)
    }

    pub fn now_ms(&self) -> u64 {
        self.start_ms + self.elapsed_ms as u64
    }
}

impl FrameClock for ManualClock {
    fn next_frame(&mut self) -> FrameTime {
        self.elapsed_ms += self.delta_secs * 1_000.0;
        FrameTime {
            delta_secs: self.delta_secs,
            now_ms: self.now_ms(),
        }
    }
}
