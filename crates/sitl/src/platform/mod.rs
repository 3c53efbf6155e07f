//! Simulated peripherals for SITL.
//!
//! Each type implements the matching `pico_ppm` platform trait so the
//! unchanged control task can run on the host.

pub mod display;
pub mod ppm;
pub mod timer;
pub mod uart;

pub use display::TerminalDisplay;
pub use ppm::SitlPpm;
pub use timer::SitlTimeSource;
pub use uart::{RxHandle, SitlUart};
