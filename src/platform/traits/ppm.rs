//! PPM encoder interface trait
//!
//! A PPM encoder multiplexes several servo pulse widths onto one output pin
//! as a pulse train, one frame per ~20 ms. The encoder keeps emitting the
//! last values it was given; the firmware refreshes them every tick.

use crate::platform::Result;

/// PPM encoder interface
///
/// # Safety Invariants
///
/// - `begin` must be called once before any `set_channel`
/// - Only one owner per encoder
pub trait PpmInterface {
    /// Start generating the pulse train on `pin` with `channel_count` channels
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if the pin or channel count is
    /// not supported by the encoder.
    fn begin(&mut self, pin: u8, channel_count: usize) -> Result<()>;

    /// Set the pulse width of channel `index` (0-based) in microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Ppm(PpmError::ChannelUnavailable)` for an index
    /// beyond the configured channel count, or `PpmError::NotStarted` before
    /// `begin`.
    fn set_channel(&mut self, index: usize, pulse_us: u16) -> Result<()>;
}
