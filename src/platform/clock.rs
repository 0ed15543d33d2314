//! Monotonic time and the cooperative wait.

use std::time::{Duration, Instant};

/// A millisecond clock with a blocking delay.
///
/// On a microcontroller this is `millis()` and `delay()`; on a host it is
/// [`SystemClock`]. Tests use a fake that advances on `delay_ms`.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now_ms(&self) -> u64;

    /// Blocks for `duration_ms` milliseconds.
    fn delay_ms(&self, duration_ms: u64);
}

/// The host clock: [`Instant`] for time, [`std::thread::sleep`] for delays.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn delay_ms(&self, duration_ms: u64) {
        std::thread::sleep(Duration::from_millis(duration_ms));
    }
}
