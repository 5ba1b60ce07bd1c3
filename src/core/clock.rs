//! Frame pacing.
//!
//! Movement is defined per frame, not per second, so the clock only throttles
//! the loop. A slow frame is not compensated and the game simply runs slower.

use std::thread;
use std::time::{Duration, Instant};

/// Throttles the main loop to a target frame rate.
pub trait FrameClock {
    /// Block until the current frame has lasted `1 / target_fps` seconds.
    /// Returns the time elapsed since the previous call.
    fn tick(&mut self, target_fps: u32) -> Duration;
}

/// Wall-clock implementation backed by [`Instant`] and `thread::sleep`.
#[derive(Debug)]
pub struct FixedRateClock {
    last_tick: Instant,
}

impl FixedRateClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }
}

impl Default for FixedRateClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Duration of a single frame at `target_fps` (treats 0 as 1).
pub fn frame_duration(target_fps: u32) -> Duration {
    Duration::from_secs(1) / target_fps.max(1)
}

impl FrameClock for FixedRateClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        let budget = frame_duration(target_fps);
        let spent = self.last_tick.elapsed();
        if spent < budget {
            thread::sleep(budget - spent);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}
