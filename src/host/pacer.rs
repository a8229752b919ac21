use std::thread;
use std::time::{Duration, Instant};

use crate::core::config::{HostConfig, FRAME_INTERVAL_MS};

/// Native frame pacing: sleep out whatever is left of the interval since the
/// previous frame. Late frames are not made up for.
pub struct FramePacer {
    interval: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(interval_ms.max(0.0) / 1000.0),
            last: Instant::now(),
        }
    }

    pub fn from_config(config: &HostConfig) -> Self {
        Self::new(config.frame_interval_ms)
    }

    /// Pacer that never sleeps (benchmarks, tests)
    pub fn unpaced() -> Self {
        Self::new(0.0)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn sleep_to_next_frame(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.interval {
            thread::sleep(self.interval - elapsed);
        }
        self.last = Instant::now();
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}
