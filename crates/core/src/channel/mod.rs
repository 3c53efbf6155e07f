//! Channel state store
//!
//! Holds the six PPM output channels. Each channel has a pulse width that is
//! always within `[PULSE_MIN_US, PULSE_MAX_US]` and a mode:
//!
//! - `Static`: the pulse width only changes on command
//! - `Cyclic`: the pulse width is recomputed every tick from the waveform
//!   generator, anchored at the time the channel entered cyclic mode
//!
//! The store validates indices and pulse widths itself, so a caller that
//! skips its own range check gets an error instead of a corrupted channel.

use core::fmt;
use core::num::NonZeroU32;

use crate::waveform::ramp_pulse_us;

/// Number of PPM channels
pub const CHANNEL_COUNT: usize = 6;

/// Minimum pulse width (μs)
pub const PULSE_MIN_US: u16 = 1000;

/// Maximum pulse width (μs)
pub const PULSE_MAX_US: u16 = 2000;

/// Neutral pulse width (μs), used at power-up and on reset
pub const PULSE_NEUTRAL_US: u16 = 1500;

/// Channel store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    /// Channel index outside `[0, CHANNEL_COUNT)`
    IndexOutOfRange {
        /// Offending 0-based index
        index: usize,
    },
    /// Pulse width outside `[PULSE_MIN_US, PULSE_MAX_US]`
    PulseOutOfRange {
        /// Offending pulse width (μs)
        pulse_us: u16,
    },
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::IndexOutOfRange { index } => {
                write!(f, "channel index {} out of range (0-{})", index, CHANNEL_COUNT - 1)
            }
            ChannelError::PulseOutOfRange { pulse_us } => write!(
                f,
                "pulse width {} us out of range ({}-{})",
                pulse_us, PULSE_MIN_US, PULSE_MAX_US
            ),
        }
    }
}

/// How a channel's pulse width is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMode {
    /// Holds the last commanded pulse width
    #[default]
    Static,
    /// Follows the ramp waveform
    Cyclic {
        /// Waveform period (ms)
        period_ms: NonZeroU32,
        /// Time the channel entered cyclic mode (ms)
        start_ms: u64,
    },
}

impl ChannelMode {
    /// Check if the channel follows the waveform generator
    pub fn is_cyclic(&self) -> bool {
        matches!(self, ChannelMode::Cyclic { .. })
    }
}

/// One PPM output channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    /// Current output pulse width (μs)
    pub pulse_width_us: u16,
    /// Drive mode
    pub mode: ChannelMode,
}

impl Channel {
    /// Neutral, static channel
    pub const fn new() -> Self {
        Self {
            pulse_width_us: PULSE_NEUTRAL_US,
            mode: ChannelMode::Static,
        }
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a pulse width against the output range
#[inline]
pub fn is_valid_pulse(pulse_us: u16) -> bool {
    (PULSE_MIN_US..=PULSE_MAX_US).contains(&pulse_us)
}

/// Fixed-size store of all output channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelStore {
    channels: [Channel; CHANNEL_COUNT],
}

impl Default for ChannelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelStore {
    /// All channels neutral and static
    pub const fn new() -> Self {
        Self {
            channels: [Channel::new(); CHANNEL_COUNT],
        }
    }

    /// Get a copy of channel `index` (0-based)
    pub fn get(&self, index: usize) -> Result<Channel, ChannelError> {
        self.channels
            .get(index)
            .copied()
            .ok_or(ChannelError::IndexOutOfRange { index })
    }

    /// Set a static pulse width, leaving cyclic mode if active
    pub fn set_static(&mut self, index: usize, pulse_us: u16) -> Result<(), ChannelError> {
        if !is_valid_pulse(pulse_us) {
            return Err(ChannelError::PulseOutOfRange { pulse_us });
        }
        let channel = self.channel_mut(index)?;
        channel.pulse_width_us = pulse_us;
        channel.mode = ChannelMode::Static;
        Ok(())
    }

    /// Put a channel in cyclic mode anchored at `now_ms`
    ///
    /// Issuing this on a channel that is already cyclic re-anchors it: the
    /// new period applies and the ramp restarts from neutral.
    pub fn set_cyclic(
        &mut self,
        index: usize,
        period_ms: NonZeroU32,
        now_ms: u64,
    ) -> Result<(), ChannelError> {
        let channel = self.channel_mut(index)?;
        channel.mode = ChannelMode::Cyclic {
            period_ms,
            start_ms: now_ms,
        };
        channel.pulse_width_us = ramp_pulse_us(0, period_ms);
        Ok(())
    }

    /// Every channel back to neutral and static
    pub fn reset_all(&mut self) {
        self.channels = [Channel::new(); CHANNEL_COUNT];
    }

    /// Resample every cyclic channel at `now_ms`
    ///
    /// Static channels are untouched. A timestamp before a channel's anchor
    /// samples the ramp at its start.
    pub fn update(&mut self, now_ms: u64) {
        for channel in self.channels.iter_mut() {
            if let ChannelMode::Cyclic {
                period_ms,
                start_ms,
            } = channel.mode
            {
                channel.pulse_width_us = ramp_pulse_us(now_ms.saturating_sub(start_ms), period_ms);
            }
        }
    }

    /// Current pulse width of every channel, in channel order
    pub fn pulse_widths(&self) -> [u16; CHANNEL_COUNT] {
        let mut out = [PULSE_NEUTRAL_US; CHANNEL_COUNT];
        for (slot, channel) in out.iter_mut().zip(self.channels.iter()) {
            *slot = channel.pulse_width_us;
        }
        out
    }

    /// Iterate over all channels in order
    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    /// Number of channels currently in cyclic mode
    pub fn cyclic_count(&self) -> usize {
        self.channels.iter().filter(|c| c.mode.is_cyclic()).count()
    }

    fn channel_mut(&mut self, index: usize) -> Result<&mut Channel, ChannelError> {
        self.channels
            .get_mut(index)
            .ok_or(ChannelError::IndexOutOfRange { index })
    }
}
