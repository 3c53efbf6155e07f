//! Control task scheduling
//!
//! Timing types come from `pico_ppm_core::scheduler`; the task itself
//! lives in [`tasks`].

pub mod tasks;

pub use pico_ppm_core::scheduler::{TaskMetadata, TaskStats};
pub use tasks::ControlTask;
