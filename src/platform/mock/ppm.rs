//! Mock PPM encoder for testing

use crate::platform::{
    error::{PlatformError, PpmError},
    traits::PpmInterface,
    Result,
};
use std::vec::Vec;

/// Largest channel count a typical PPM encoder supports
const MAX_CHANNELS: usize = 8;

/// Mock PPM encoder
///
/// Tracks the configured pin, the latest pulse width per channel and every
/// `set_channel` call in order.
#[derive(Debug, Default)]
pub struct MockPpm {
    pin: Option<u8>,
    channel_count: usize,
    channels: Vec<u16>,
    writes: Vec<(usize, u16)>,
}

impl MockPpm {
    /// Create an encoder that has not been started
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin passed to `begin`, if started
    pub fn pin(&self) -> Option<u8> {
        self.pin
    }

    /// Channel count passed to `begin`
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Latest pulse width per channel
    pub fn channels(&self) -> &[u16] {
        &self.channels
    }

    /// Every `set_channel` call as `(index, pulse_us)`
    pub fn writes(&self) -> &[(usize, u16)] {
        &self.writes
    }

    /// Forget recorded writes
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl PpmInterface for MockPpm {
    fn begin(&mut self, pin: u8, channel_count: usize) -> Result<()> {
        if channel_count == 0 || channel_count > MAX_CHANNELS {
            return Err(PlatformError::InvalidConfig);
        }
        self.pin = Some(pin);
        self.channel_count = channel_count;
        self.channels = std::vec![0; channel_count];
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
        self.writes.push((index, pulse_us));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_ppm_begin() {
        let mut ppm = MockPpm::new();
        assert_eq!(ppm.pin(), None);

        ppm.begin(9, 6).unwrap();
        assert_eq!(ppm.pin(), Some(9));
        assert_eq!(ppm.channel_count(), 6);
        assert_eq!(ppm.channels(), &[0; 6]);

        assert_eq!(ppm.begin(9, 0), Err(PlatformError::InvalidConfig));
        assert_eq!(ppm.begin(9, 9), Err(PlatformError::InvalidConfig));
    }

    #[test]
    fn test_mock_ppm_set_channel() {
        let mut ppm = MockPpm::new();
        assert_eq!(
            ppm.set_channel(0, 1500),
            Err(PlatformError::Ppm(PpmError::NotStarted))
        );

        ppm.begin(9, 6).unwrap();
        ppm.set_channel(2, 1750).unwrap();
        ppm.set_channel(2, 1800).unwrap();

        assert_eq!(ppm.channels()[2], 1800);
        assert_eq!(ppm.writes(), &[(2, 1750), (2, 1800)]);
        assert_eq!(
            ppm.set_channel(6, 1500),
            Err(PlatformError::Ppm(PpmError::ChannelUnavailable))
        );

        ppm.clear_writes();
        assert!(ppm.writes().is_empty());
    }
}
