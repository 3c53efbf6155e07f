//! Simulated time source for SITL.
//!
//! Wraps a shared atomic counter for simulation time. The host loop sets it
//! from the wall clock; tests advance it explicitly, and a blocking delay
//! simply moves it forward.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use pico_ppm::platform::{traits::TimerInterface, Result};
use pico_ppm_core::traits::TimeSource;

/// Simulated time source backed by a shared atomic counter.
///
/// Clones share the same counter, so the host loop can drive the clock the
/// control task reads.
#[derive(Debug, Clone, Default)]
pub struct SitlTimeSource {
    time_us: Arc<AtomicU64>,
}

impl SitlTimeSource {
    /// Create a new time source starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance simulation time by the given number of microseconds.
    pub fn advance_us(&self, us: u64) {
        self.time_us.fetch_add(us, Ordering::Relaxed);
    }

    /// Advance simulation time by the given number of milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1000);
    }

    /// Set simulation time to an absolute value.
    ///
    /// Values earlier than the current time are ignored so the clock stays
    /// monotonic.
    pub fn set_us(&self, us: u64) {
        self.time_us.fetch_max(us, Ordering::Relaxed);
    }
}

impl TimeSource for SitlTimeSource {
    fn now_ms(&self) -> u64 {
        self.time_us.load(Ordering::Relaxed) / 1000
    }

    fn now_us(&self) -> u64 {
        self.time_us.load(Ordering::Relaxed)
    }
}

impl TimerInterface for SitlTimeSource {
    /// Simulate a delay by advancing time (non-blocking).
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.advance_us(u64::from(us));
        Ok(())
    }

    fn now_us(&self) -> u64 {
        TimeSource::now_us(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_starts_at_zero() {
        let ts = SitlTimeSource::new();
        assert_eq!(TimeSource::now_us(&ts), 0);
        assert_eq!(ts.now_ms(), 0);
    }

    #[test]
    fn test_advance_time() {
        let ts = SitlTimeSource::new();
        ts.advance_us(1000);
        assert_eq!(TimeSource::now_us(&ts), 1000);
        assert_eq!(ts.now_ms(), 1);
    }

    #[test]
    fn test_set_time_is_monotonic() {
        let ts = SitlTimeSource::new();
        ts.set_us(5_000_000);
        assert_eq!(ts.now_ms(), 5000);

        ts.set_us(1_000);
        assert_eq!(ts.now_ms(), 5000);
    }

    #[test]
    fn test_delay_advances_time() {
        let mut ts = SitlTimeSource::new();
        ts.delay_us(500).unwrap();
        assert_eq!(TimeSource::now_us(&ts), 500);
        ts.delay_ms(2).unwrap();
        assert_eq!(TimeSource::now_us(&ts), 2500);
    }

    #[test]
    fn test_shared_time_via_clone() {
        let ts1 = SitlTimeSource::new();
        let ts2 = ts1.clone();
        ts1.advance_us(1000);
        assert_eq!(TimeSource::now_us(&ts2), 1000);
    }
}
