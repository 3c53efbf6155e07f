//! Monotonic time source used to anchor and sample cyclic channels.
//!
//! The control loop never reads a clock directly. It asks a `TimeSource`,
//! which is `EmbassyTime` on target, a wall clock in SITL and `MockTime`
//! in tests.

use core::cell::Cell;

/// Monotonic clock for the control loop.
///
/// Timestamps must never go backwards: cyclic channels compute their phase
/// from `now_ms() - start_ms`.
///
/// # Example
///
/// ```
/// use pico_ppm_core::traits::{MockTime, TimeSource};
///
/// fn tick_due<T: TimeSource>(time: &T, last_tick_us: u64, period_us: u64) -> bool {
///     time.elapsed_since(last_tick_us) >= period_us
/// }
///
/// let time = MockTime::new();
/// time.advance_ms(20);
/// assert!(tick_due(&time, 0, 20_000));
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Microseconds since system start.
    fn now_us(&self) -> u64;

    /// Microseconds elapsed since `reference_us`, saturating at zero.
    fn elapsed_since(&self, reference_us: u64) -> u64 {
        self.now_us().saturating_sub(reference_us)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Manually advanced clock for deterministic waveform and loop tests.
///
/// ```
/// use pico_ppm_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::with_initial_ms(1_000);
/// time.advance_ms(250);
/// assert_eq!(time.now_ms(), 1_250);
/// assert_eq!(time.now_us(), 1_250_000);
/// ```
#[derive(Clone, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

// Safety: MockTime is only used in single-threaded test contexts.
// TimeSource requires Send + Sync for the embedded implementations.
unsafe impl Send for MockTime {}
unsafe impl Sync for MockTime {}

impl MockTime {
    /// Clock starting at zero.
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Clock starting at `ms` milliseconds.
    pub fn with_initial_ms(ms: u64) -> Self {
        Self {
            current_us: Cell::new(ms * 1000),
        }
    }

    /// Jump to an absolute time in milliseconds.
    pub fn set_ms(&self, ms: u64) {
        self.current_us.set(ms * 1000);
    }

    /// Advance by `us` microseconds.
    pub fn advance_us(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }

    /// Advance by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1000);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_us.get() / 1000
    }

    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_starts_at_zero() {
        let time = MockTime::new();
        assert_eq!(time.now_us(), 0);
        assert_eq!(time.now_ms(), 0);
    }

    #[test]
    fn mock_time_with_initial_ms() {
        let time = MockTime::with_initial_ms(5_000);
        assert_eq!(time.now_ms(), 5_000);
        assert_eq!(time.now_us(), 5_000_000);
    }

    #[test]
    fn mock_time_set_and_advance() {
        let time = MockTime::new();
        time.set_ms(100);
        time.advance_ms(50);
        time.advance_us(999);
        assert_eq!(time.now_us(), 150_999);
        // ms truncates
        assert_eq!(time.now_ms(), 150);
    }

    #[test]
    fn mock_time_clones_share_nothing() {
        let a = MockTime::new();
        let b = a.clone();
        a.advance_ms(10);
        assert_eq!(b.now_ms(), 0);
    }

    #[test]
    fn elapsed_since_saturates() {
        let time = MockTime::with_initial_ms(1);
        assert_eq!(time.elapsed_since(400), 600);
        assert_eq!(time.elapsed_since(5_000), 0);
    }
}
