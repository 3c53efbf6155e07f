//! Embassy-based time source implementation.
//!
//! Provides `EmbassyTime`, the `TimeSource` used on target. Cyclic channels
//! are anchored and sampled against it.

use pico_ppm_core::traits::TimeSource;

/// Embassy-based time source using the Embassy time driver.
///
/// # Example
///
/// ```ignore
/// use pico_ppm::platform::EmbassyTime;
/// use pico_ppm_core::traits::TimeSource;
///
/// let time = EmbassyTime;
/// let now = time.now_ms();
/// ```
#[derive(Clone, Copy, Default)]
pub struct EmbassyTime;

impl TimeSource for EmbassyTime {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }

    fn now_us(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}
