//! Core traits for platform-agnostic channel processing.
//!
//! Trait definitions here carry no feature gates. Mock implementations are
//! always available for host testing; the Embassy implementation lives in
//! the firmware crate.

pub mod time;

pub use time::{MockTime, TimeSource};
