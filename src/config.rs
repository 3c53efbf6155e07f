//! Firmware configuration
//!
//! Compile-time defaults for the control task. The SITL binary overrides
//! them from its command line.

use crate::platform::traits::UartConfig;

/// Control task configuration
#[derive(Debug, Clone, Copy)]
pub struct ControlConfig {
    /// Output pin of the PPM pulse train
    pub ppm_pin: u8,
    /// Command console serial settings
    pub uart: UartConfig,
    /// Tick period in milliseconds; `0` runs the loop back to back
    pub loop_period_ms: u32,
    /// Execution time above which a tick counts as a deadline miss
    pub tick_budget_us: u32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            ppm_pin: 9,
            uart: UartConfig::default(),
            loop_period_ms: 20,
            tick_budget_us: 15_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControlConfig::default();
        assert_eq!(config.ppm_pin, 9);
        assert_eq!(config.uart.baud_rate, 115_200);
        assert_eq!(config.loop_period_ms, 20);
        assert_eq!(config.tick_budget_us, 15_000);
    }
}
