//! Timer interface trait
//!
//! Blocking delays for pacing the control loop on targets without an async
//! executor.

use crate::platform::Result;

/// Timer interface trait
///
/// # Safety Invariants
///
/// - Timer peripheral must be initialized before use
/// - Monotonic time source (never goes backwards)
pub trait TimerInterface {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    /// Monotonic timestamp in microseconds since platform initialization
    fn now_us(&self) -> u64;
}
