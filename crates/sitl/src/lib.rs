//! pico_ppm_sitl - Software-in-the-loop host for the pico_ppm encoder
//!
//! Runs the firmware control task on a desktop: console bytes come from
//! stdin, replies go to stdout, PPM channels are recorded in memory and
//! the channel display is drawn as text bars.

pub mod error;
pub mod platform;

pub use error::SitlError;
pub use platform::{SitlPpm, SitlTimeSource, SitlUart, TerminalDisplay};
