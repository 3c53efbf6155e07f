//! Communication with the host
//!
//! The encoder is driven over a plain serial text console (see [`serial`]).

pub mod serial;
