//! Serial text console
//!
//! Owns the UART. Inbound bytes are framed by [`LineReader`]; outbound
//! replies are formatted into a fixed buffer and written with a CRLF
//! terminator.

use core::fmt::{Display, Write as _};

use heapless::String;

use super::line_reader::{LineEvent, LineReader};
use crate::platform::{
    error::{PlatformError, UartError},
    traits::UartInterface,
    Result,
};

/// Longest reply line, excluding CRLF
pub const REPLY_CAPACITY: usize = 128;

/// Line-oriented console over a UART
pub struct SerialConsole<U: UartInterface> {
    uart: U,
    reader: LineReader,
}

impl<U: UartInterface> SerialConsole<U> {
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            reader: LineReader::new(),
        }
    }

    /// Return the next complete line, if one has arrived
    pub fn poll_line(&mut self) -> Result<Option<LineEvent>> {
        self.reader.poll(&mut self.uart)
    }

    /// Write `message` followed by `\r\n`
    ///
    /// Messages longer than [`REPLY_CAPACITY`] are truncated.
    pub fn write_line(&mut self, message: impl Display) -> Result<()> {
        let mut line = Truncating(String::new());
        // Overflow only truncates the reply
        let _ = write!(line, "{}", message);

        let mut bytes: heapless::Vec<u8, { REPLY_CAPACITY + 2 }> = heapless::Vec::new();
        let _ = bytes.extend_from_slice(line.0.as_bytes());
        let _ = bytes.extend_from_slice(b"\r\n");

        self.write_all(&bytes)
    }

    fn write_all(&mut self, mut bytes: &[u8]) -> Result<()> {
        while !bytes.is_empty() {
            let written = self.uart.write(bytes)?;
            if written == 0 {
                return Err(PlatformError::Uart(UartError::WriteFailed));
            }
            bytes = &bytes[written.min(bytes.len())..];
        }
        self.uart.flush()
    }

    pub fn uart(&self) -> &U {
        &self.uart
    }

    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }
}

/// Formatter sink that keeps as many whole characters as fit
struct Truncating(String<REPLY_CAPACITY>);

impl core::fmt::Write for Truncating {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                return Err(core::fmt::Error);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockUart;

    #[test]
    fn test_write_line_appends_crlf() {
        let mut console = SerialConsole::new(MockUart::new(Default::default()));
        console.write_line("Channel 2 set to 1800").unwrap();
        assert_eq!(console.uart().tx_string(), "Channel 2 set to 1800\r\n");
    }

    #[test]
    fn test_write_line_formats_display() {
        let mut console = SerialConsole::new(MockUart::new(Default::default()));
        console.write_line(format_args!("Channel {} cycling", 4)).unwrap();
        assert_eq!(console.uart().tx_string(), "Channel 4 cycling\r\n");
    }

    #[test]
    fn test_write_line_truncates_long_message() {
        let mut console = SerialConsole::new(MockUart::new(Default::default()));
        let long = "x".repeat(300);
        console.write_line(long.as_str()).unwrap();

        let tx = console.uart().tx_string();
        assert_eq!(tx.len(), REPLY_CAPACITY + 2);
        assert!(tx.ends_with("\r\n"));
    }

    #[test]
    fn test_poll_line() {
        let mut console = SerialConsole::new(MockUart::new(Default::default()));
        assert_eq!(console.poll_line().unwrap(), None);

        console.uart_mut().inject_rx_data(b"R\r\n");
        match console.poll_line().unwrap() {
            Some(LineEvent::Line(line)) => assert_eq!(&line[..], b"R"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
