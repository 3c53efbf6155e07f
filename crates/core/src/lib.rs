//! pico_ppm_core - Pure no_std channel logic for the pico_ppm encoder
//!
//! This crate contains platform-agnostic algorithms and types
//! that can be tested on host without any feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Platform services injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)
//! - [`channel`]: Channel state store (static and cyclic channels)
//! - [`waveform`]: Four-phase ramp generator for cyclic channels
//! - [`command`]: Serial text command parser and interpreter
//! - [`display`]: Bar graph geometry for the channel display
//! - [`scheduler`]: Control loop metadata and statistics

#![no_std]

pub mod channel;
pub mod command;
pub mod display;
pub mod scheduler;
pub mod traits;
pub mod waveform;
