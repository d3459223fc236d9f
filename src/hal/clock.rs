//! Monotonic clock abstraction.
//!
//! The tracking phase is driven by elapsed time rather than counted sleeps,
//! so the cadence survives jitter in the delay provider. Injecting the clock
//! also makes the 30-minute tracking loop testable without wall-clock waits.

use core::time::Duration;

/// A monotonic elapsed-time source.
pub trait Clock {
    /// Time elapsed since some fixed point before the tracker started.
    fn elapsed(&self) -> Duration;
}

/// Clock backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct StdClock(std::time::Instant);

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock anchored at the current instant.
    pub fn new() -> Self {
        Self(std::time::Instant::now())
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}
