//! PPM output stage
//!
//! Thin owner of a [`PpmInterface`]: starts the pulse train with one slot
//! per channel and refreshes every slot from the channel store each tick.

use pico_ppm_core::channel::CHANNEL_COUNT;

use crate::platform::{traits::PpmInterface, Result};

/// PPM encoder driving [`CHANNEL_COUNT`] channels
pub struct PpmOutput<P: PpmInterface> {
    ppm: P,
    started: bool,
}

impl<P: PpmInterface> PpmOutput<P> {
    pub fn new(ppm: P) -> Self {
        Self { ppm, started: false }
    }

    /// Start the pulse train on `pin`
    pub fn begin(&mut self, pin: u8) -> Result<()> {
        self.ppm.begin(pin, CHANNEL_COUNT)?;
        self.started = true;
        crate::log_info!("PPM output started on pin {}", pin);
        Ok(())
    }

    /// Write all channel pulse widths, channel 1 first
    ///
    /// A failing channel does not stop the remaining ones from being
    /// written; the first error is returned.
    pub fn write_all(&mut self, pulse_widths: &[u16; CHANNEL_COUNT]) -> Result<()> {
        let mut first_error = None;

        for (index, &pulse_us) in pulse_widths.iter().enumerate() {
            if let Err(e) = self.ppm.set_channel(index, pulse_us) {
                crate::log_warn!("PPM channel {} write failed: {}", index + 1, e.as_str());
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Underlying encoder
    pub fn inner(&self) -> &P {
        &self.ppm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{error::PpmError, mock::MockPpm, PlatformError};

    #[test]
    fn test_begin_configures_six_channels() {
        let mut output = PpmOutput::new(MockPpm::new());
        assert!(!output.is_started());

        output.begin(9).unwrap();
        assert!(output.is_started());
        assert_eq!(output.inner().pin(), Some(9));
        assert_eq!(output.inner().channel_count(), CHANNEL_COUNT);
    }

    #[test]
    fn test_write_all_in_channel_order() {
        let mut output = PpmOutput::new(MockPpm::new());
        output.begin(9).unwrap();

        output
            .write_all(&[1000, 1200, 1400, 1600, 1800, 2000])
            .unwrap();

        assert_eq!(output.inner().channels(), &[1000, 1200, 1400, 1600, 1800, 2000]);
        let order: Vec<usize> = output.inner().writes().iter().map(|w| w.0).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_write_before_begin_fails() {
        let mut output = PpmOutput::new(MockPpm::new());
        assert_eq!(
            output.write_all(&[1500; CHANNEL_COUNT]),
            Err(PlatformError::Ppm(PpmError::NotStarted))
        );
    }
}
