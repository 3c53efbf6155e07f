//! Task implementations
//!
//! - Control task: serial command handling, cyclic channel update, PPM
//!   output and display refresh once per tick

pub mod control;

pub use control::{ControlTask, BANNER, DISPLAY_INIT_FAILED};
