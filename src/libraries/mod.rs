//! Output libraries
//!
//! Hardware-agnostic drivers built on the platform traits.
//!
//! ## Libraries
//!
//! - `ppm_output`: pushes the channel pulse widths into the PPM encoder
//! - `channel_display`: draws one labelled bar per channel

pub mod channel_display;
pub mod ppm_output;

pub use channel_display::ChannelDisplay;
pub use ppm_output::PpmOutput;
