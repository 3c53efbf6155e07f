//! Core firmware infrastructure
//!
//! Logging macros and the control task that runs the encoder.

pub mod logging;
pub mod scheduler;
