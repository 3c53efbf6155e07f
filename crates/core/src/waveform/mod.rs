//! Waveform generator for cyclic channels
//!
//! A cyclic channel sweeps a fixed four-phase ramp once per period:
//!
//! ```text
//! 2000 |    /\
//! 1500 |---/--\--------/---
//! 1000 |        \/
//!      0  P/4 P/2 3P/4 P
//! ```
//!
//! Integer arithmetic only: the elapsed time is scaled by four so each
//! quarter boundary falls on an exact multiple of the period, which keeps
//! `P/4`, `P/2` and `3P/4` exact even when `P` is not divisible by four.

use core::num::NonZeroU32;

use crate::channel::{PULSE_MAX_US, PULSE_MIN_US, PULSE_NEUTRAL_US};

/// Swing from neutral to either endpoint (μs)
const AMPLITUDE_US: u64 = (PULSE_MAX_US - PULSE_NEUTRAL_US) as u64;

/// Ramp phase within one period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampPhase {
    /// Neutral up to maximum
    Rising,
    /// Maximum back down to neutral
    Returning,
    /// Neutral down to minimum
    Falling,
    /// Minimum back up to neutral
    Recovering,
}

/// Sample the ramp `elapsed_ms` after the cycle was anchored.
///
/// The result is always within `[PULSE_MIN_US, PULSE_MAX_US]` and repeats
/// with period `period_ms`.
///
/// # Example
///
/// ```
/// use core::num::NonZeroU32;
/// use pico_ppm_core::waveform::ramp_pulse_us;
///
/// let period = NonZeroU32::new(4000).unwrap();
/// assert_eq!(ramp_pulse_us(0, period), 1500);
/// assert_eq!(ramp_pulse_us(1000, period), 2000);
/// assert_eq!(ramp_pulse_us(3000, period), 1000);
/// ```
pub fn ramp_pulse_us(elapsed_ms: u64, period_ms: NonZeroU32) -> u16 {
    let (phase, offset) = phase_at(elapsed_ms, period_ms);

    let pulse = match phase {
        RampPhase::Rising => PULSE_NEUTRAL_US + offset,
        RampPhase::Returning => PULSE_MAX_US - offset,
        RampPhase::Falling => PULSE_NEUTRAL_US - offset,
        RampPhase::Recovering => PULSE_MIN_US + offset,
    };

    debug_assert!((PULSE_MIN_US..=PULSE_MAX_US).contains(&pulse));
    pulse
}

/// Phase and distance travelled from the phase's starting endpoint (μs).
///
/// The offset is in `[0, 500)`.
pub fn phase_at(elapsed_ms: u64, period_ms: NonZeroU32) -> (RampPhase, u16) {
    let period = u64::from(period_ms.get());
    let scaled = (elapsed_ms % period) * 4;

    let quarter = scaled / period;
    let offset = (AMPLITUDE_US * (scaled % period) / period) as u16;

    let phase = match quarter {
        0 => RampPhase::Rising,
        1 => RampPhase::Returning,
        2 => RampPhase::Falling,
        _ => RampPhase::Recovering,
    };

    (phase, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(ms: u32) -> NonZeroU32 {
        NonZeroU32::new(ms).unwrap()
    }

    #[test]
    fn test_quarter_boundaries() {
        let p = period(4000);
        assert_eq!(ramp_pulse_us(0, p), 1500);
        assert_eq!(ramp_pulse_us(1000, p), 2000);
        assert_eq!(ramp_pulse_us(2000, p), 1500);
        assert_eq!(ramp_pulse_us(3000, p), 1000);
        assert_eq!(ramp_pulse_us(4000, p), 1500);
    }

    #[test]
    fn test_midpoints_interpolate_linearly() {
        let p = period(4000);
        assert_eq!(ramp_pulse_us(500, p), 1750);
        assert_eq!(ramp_pulse_us(1500, p), 1750);
        assert_eq!(ramp_pulse_us(2500, p), 1250);
        assert_eq!(ramp_pulse_us(3500, p), 1250);
    }

    #[test]
    fn test_periodicity() {
        let p = period(1234);
        for t in [0u64, 1, 77, 308, 617, 925, 1233] {
            assert_eq!(ramp_pulse_us(t, p), ramp_pulse_us(t + 1234, p));
            assert_eq!(ramp_pulse_us(t, p), ramp_pulse_us(t + 1234 * 1000, p));
        }
    }

    #[test]
    fn test_bounds_hold_for_awkward_periods() {
        for ms in [1u32, 2, 3, 5, 7, 999, 1001, 65_537] {
            let p = period(ms);
            for t in 0..(u64::from(ms) * 2).min(20_000) {
                let v = ramp_pulse_us(t, p);
                assert!((1000..=2000).contains(&v), "period {} t {} -> {}", ms, t, v);
            }
        }
    }

    #[test]
    fn test_large_elapsed_time() {
        let p = period(u32::MAX);
        let v = ramp_pulse_us(u64::MAX, p);
        assert!((1000..=2000).contains(&v));
    }

    #[test]
    fn test_one_ms_period_stays_neutral() {
        // Every sample lands on t = 0
        let p = period(1);
        for t in 0..10 {
            assert_eq!(ramp_pulse_us(t, p), 1500);
        }
    }

    #[test]
    fn test_phase_at() {
        let p = period(4000);
        assert_eq!(phase_at(0, p), (RampPhase::Rising, 0));
        assert_eq!(phase_at(999, p), (RampPhase::Rising, 499));
        assert_eq!(phase_at(1000, p), (RampPhase::Returning, 0));
        assert_eq!(phase_at(2200, p), (RampPhase::Falling, 100));
        assert_eq!(phase_at(3999, p), (RampPhase::Recovering, 499));
    }
}
