//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};
use std::vec::Vec;

/// Mock Timer implementation
///
/// Delays return immediately and advance a simulated clock. Every requested
/// delay is recorded so pacing can be asserted.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    delays: Vec<u32>,
}

impl MockTimer {
    /// Create a new mock timer at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested delays in microseconds, in order
    pub fn delays(&self) -> &[u32] {
        &self.delays
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.delays.push(us);
        self.now_us = self.now_us.wrapping_add(u64::from(us));
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_timer_delay_us() {
        let mut timer = MockTimer::new();
        assert_eq!(timer.now_us(), 0);

        timer.delay_us(1000).unwrap();
        timer.delay_us(500).unwrap();
        assert_eq!(timer.now_us(), 1500);
        assert_eq!(timer.delays(), &[1000, 500]);
    }

    #[test]
    fn test_mock_timer_delay_ms() {
        let mut timer = MockTimer::new();
        timer.delay_ms(20).unwrap();
        assert_eq!(timer.now_us(), 20_000);
        assert_eq!(timer.delays(), &[20_000]);
    }
}
