//! Platform abstraction layer
//!
//! Hardware access for the encoder goes through the traits in this module:
//! the PPM encoder, the display, the serial port and a blocking timer.

pub mod error;
pub mod traits;

#[cfg(feature = "embassy")]
pub mod time;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{DisplayInterface, PpmInterface, TimerInterface, UartConfig, UartInterface};

#[cfg(feature = "embassy")]
pub use time::EmbassyTime;
