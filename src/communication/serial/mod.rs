//! Serial command console
//!
//! - [`line_reader`]: frames UART bytes into newline-terminated lines
//! - [`console`]: owns the UART, hands out lines and writes replies

pub mod console;
pub mod line_reader;

pub use console::SerialConsole;
pub use line_reader::{LineEvent, LineReader, LINE_CAPACITY};
