//! Simulated PPM encoder for SITL.
//!
//! Records the pulse width of every channel so the host loop and tests can
//! read back what the firmware is sending.

use pico_ppm::platform::{
    error::{PlatformError, PpmError},
    traits::PpmInterface,
    Result,
};

/// Maximum channels in one PPM frame.
const MAX_CHANNELS: usize = 8;

/// Simulated PPM encoder.
#[derive(Debug, Default)]
pub struct SitlPpm {
    pin: Option<u8>,
    channels: Vec<u16>,
    update_count: u64,
}

impl SitlPpm {
    /// Create an encoder that has not been started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Output pin, once started.
    pub fn pin(&self) -> Option<u8> {
        self.pin
    }

    /// Current pulse widths, channel 1 first.
    pub fn channels(&self) -> &[u16] {
        &self.channels
    }

    /// Number of successful `set_channel` calls.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Nominal frame length in microseconds: all pulses plus a 4 ms sync gap.
    pub fn frame_length_us(&self) -> u32 {
        self.channels.iter().map(|&us| u32::from(us)).sum::<u32>() + 4_000
    }
}

impl PpmInterface for SitlPpm {
    fn begin(&mut self, pin: u8, channel_count: usize) -> Result<()> {
        if channel_count == 0 || channel_count > MAX_CHANNELS {
            return Err(PlatformError::InvalidConfig);
        }
        self.pin = Some(pin);
        self.channels = vec![0; channel_count];
        Ok(())
    }

    fn set_channel(&mut self, index: usize, pulse_us: u16) -> Result<()> {
        if self.pin.is_none() {
            return Err(PlatformError::Ppm(PpmError::NotStarted));
        }
        let slot = self
            .channels
            .get_mut(index)
            .ok_or(PlatformError::Ppm(PpmError::ChannelUnavailable))?;
        *slot = pulse_us;
        self.update_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_set() {
        let mut ppm = SitlPpm::new();
        assert_eq!(
            ppm.set_channel(0, 1500),
            Err(PlatformError::Ppm(PpmError::NotStarted))
        );

        ppm.begin(9, 6).unwrap();
        assert_eq!(ppm.pin(), Some(9));
        ppm.set_channel(5, 2000).unwrap();
        assert_eq!(ppm.channels(), &[0, 0, 0, 0, 0, 2000]);
        assert_eq!(ppm.update_count(), 1);

        assert_eq!(
            ppm.set_channel(6, 1500),
            Err(PlatformError::Ppm(PpmError::ChannelUnavailable))
        );
    }

    #[test]
    fn test_invalid_channel_count() {
        let mut ppm = SitlPpm::new();
        assert_eq!(ppm.begin(9, 0), Err(PlatformError::InvalidConfig));
        assert_eq!(ppm.begin(9, 12), Err(PlatformError::InvalidConfig));
    }

    #[test]
    fn test_frame_length() {
        let mut ppm = SitlPpm::new();
        ppm.begin(9, 6).unwrap();
        for index in 0..6 {
            ppm.set_channel(index, 1500).unwrap();
        }
        assert_eq!(ppm.frame_length_us(), 13_000);
    }
}
