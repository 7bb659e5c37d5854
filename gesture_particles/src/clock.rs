//! Real elapsed time between render ticks.

use std::time::{Duration, Instant};

/// Ticks longer than this are treated as a stall (window drag, debugger)
/// and clamped, so the blend does not jump straight to its target.
pub const MAX_TICK: Duration = Duration::from_millis(250);

const FPS_SMOOTHING: f32 = 0.1;

#[derive(Clone, Debug)]
pub struct FrameClock {
    last: Instant,
    fps:  f32,
}

impl FrameClock {
    pub fn new() -> Self { Self::starting_at(Instant::now()) }

    pub fn starting_at(now: Instant) -> Self {
        FrameClock { last: now, fps: 0.0 }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 { self.tick_at(Instant::now()) }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).min(MAX_TICK).as_secs_f32();
        self.last = now;
        if dt > 0.0 {
            let inst = 1.0 / dt;
            self.fps = if self.fps == 0.0 { inst } else { self.fps + (inst - self.fps) * FPS_SMOOTHING };
        }
        dt
    }

    /// Smoothed ticks per second.
    pub fn fps(&self) -> f32 { self.fps }
}

impl Default for FrameClock {
    fn default() -> Self { Self::new() }
}
