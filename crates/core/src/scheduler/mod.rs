//! Control loop timing types
//!
//! The firmware runs one control task. These types describe its target
//! cadence and collect execution statistics without any async runtime
//! dependency; pacing itself is done by the firmware crate (Embassy ticker
//! or a blocking timer).
//!
//! # Example
//!
//! ```rust
//! use pico_ppm_core::scheduler::{TaskMetadata, TaskStats};
//!
//! let metadata = TaskMetadata::from_period_ms("control", 20, 15_000);
//! assert_eq!(metadata.rate_hz(), 50);
//!
//! let mut stats = TaskStats::default();
//! stats.update(1_200, 20_000, metadata.period_us, metadata.budget_us);
//! assert_eq!(stats.execution_count, 1);
//! ```

pub mod types;

pub use types::*;
