//! Mock platform implementation for testing
//!
//! In-memory peripherals that record what the firmware did to them, so
//! unit tests can drive the control task without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use pico_ppm::platform::mock::MockUart;
//! use pico_ppm::platform::traits::UartInterface;
//!
//! let mut uart = MockUart::new(Default::default());
//! uart.inject_rx_data(b"C1 1200\n");
//! assert!(uart.available());
//! ```

#![cfg(any(test, feature = "mock"))]

mod display;
mod ppm;
mod timer;
mod uart;

pub use display::{DrawOp, MockDisplay};
pub use ppm::MockPpm;
pub use timer::MockTimer;
pub use uart::MockUart;
