//! Platform error types
//!
//! Error types for the peripherals the encoder talks to.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All peripheral implementations map their driver-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// UART operation failed
    Uart(UartError),
    /// PPM encoder operation failed
    Ppm(PpmError),
    /// Display operation failed
    Display(DisplayError),
    /// Peripheral initialization failed
    InitializationFailed,
    /// Invalid configuration provided
    InvalidConfig,
}

/// UART-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartError {
    /// Write operation failed
    WriteFailed,
    /// Read operation failed
    ReadFailed,
    /// Overrun error
    Overrun,
}

/// PPM encoder errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpmError {
    /// `set_channel` before `begin`
    NotStarted,
    /// Channel index beyond the configured channel count
    ChannelUnavailable,
}

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Panel did not respond on its bus
    NoResponse,
    /// Frame transfer failed
    FlushFailed,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Uart(e) => write!(f, "UART error: {:?}", e),
            PlatformError::Ppm(e) => write!(f, "PPM error: {:?}", e),
            PlatformError::Display(e) => write!(f, "Display error: {:?}", e),
            PlatformError::InitializationFailed => write!(f, "Peripheral initialization failed"),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

impl core::error::Error for PlatformError {}

impl PlatformError {
    /// Short static description for log output
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformError::Uart(_) => "uart",
            PlatformError::Ppm(_) => "ppm",
            PlatformError::Display(_) => "display",
            PlatformError::InitializationFailed => "initialization failed",
            PlatformError::InvalidConfig => "invalid config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_peripheral() {
        assert_eq!(
            PlatformError::Ppm(PpmError::NotStarted).to_string(),
            "PPM error: NotStarted"
        );
        assert_eq!(
            PlatformError::Display(DisplayError::NoResponse).to_string(),
            "Display error: NoResponse"
        );
        assert_eq!(
            PlatformError::InitializationFailed.to_string(),
            "Peripheral initialization failed"
        );
    }

    #[test]
    fn test_as_str_is_short() {
        assert_eq!(PlatformError::Uart(UartError::Overrun).as_str(), "uart");
        assert_eq!(PlatformError::InvalidConfig.as_str(), "invalid config");
    }
}
