//! Platform abstraction traits
//!
//! Traits the peripheral drivers must provide. The encoder core only talks
//! to hardware through these.

pub mod display;
pub mod ppm;
pub mod timer;
pub mod uart;

// Re-export trait interfaces
pub use display::DisplayInterface;
pub use ppm::PpmInterface;
pub use timer::TimerInterface;
pub use uart::{UartConfig, UartInterface, UartParity, UartStopBits};
