#![cfg_attr(not(test), no_std)]

//! pico_ppm - Serial-commanded six-channel PPM encoder
//!
//! Firmware library for an RP2040-class board: reads text commands from a
//! serial console, drives a PPM pulse train with static or ramping
//! channels, and draws the channel values as bars on an SSD1306-style
//! display. Channel logic lives in `pico_ppm_core`; this crate adds the
//! platform abstraction and the control task.

#[cfg(all(not(test), any(feature = "std", feature = "mock")))]
extern crate std;

// Platform abstraction layer
pub mod platform;

// Logging and control task
pub mod core;

// Serial command console
pub mod communication;

// PPM output and channel display drivers
pub mod libraries;

pub mod config;

pub use config::ControlConfig;
pub use crate::core::scheduler::ControlTask;
