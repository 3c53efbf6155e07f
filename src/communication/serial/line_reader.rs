//! Line framing over a byte stream
//!
//! Bytes accumulate until `\n`. A trailing `\r` is dropped so terminals
//! sending CRLF behave like LF. A line that does not fit in
//! [`LINE_CAPACITY`] bytes is discarded up to its newline and reported as
//! [`LineEvent::Overflow`].

use heapless::Vec;

use crate::platform::{traits::UartInterface, Result};

/// Longest accepted line, excluding the newline
pub const LINE_CAPACITY: usize = 64;

/// Outcome of a completed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A complete line, newline and trailing `\r` removed
    Line(Vec<u8, LINE_CAPACITY>),
    /// A line longer than [`LINE_CAPACITY`] was dropped
    Overflow,
}

/// Incremental newline framer
#[derive(Debug, Default)]
pub struct LineReader {
    buffer: Vec<u8, LINE_CAPACITY>,
    discarding: bool,
    pending_cr: bool,
}

impl LineReader {
    /// Create an empty reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain available bytes until one line completes
    ///
    /// Stops right after the first newline so at most one line is returned
    /// per call; later bytes stay in the UART for the next poll. Returns
    /// `Ok(None)` when the UART runs dry mid-line.
    pub fn poll<U: UartInterface>(&mut self, uart: &mut U) -> Result<Option<LineEvent>> {
        let mut byte = [0u8; 1];
        while uart.available() {
            if uart.read(&mut byte)? == 0 {
                break;
            }
            if let Some(event) = self.push(byte[0]) {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }

    /// Feed one byte
    ///
    /// A `\r` is held back until the next byte shows whether it ends the
    /// line, so a CRLF terminator never counts against [`LINE_CAPACITY`].
    pub fn push(&mut self, byte: u8) -> Option<LineEvent> {
        match byte {
            b'\n' => {
                self.pending_cr = false;
                if core::mem::take(&mut self.discarding) {
                    self.buffer.clear();
                    return Some(LineEvent::Overflow);
                }
                Some(LineEvent::Line(core::mem::take(&mut self.buffer)))
            }
            b'\r' => {
                if core::mem::replace(&mut self.pending_cr, true) {
                    self.store(b'\r');
                }
                None
            }
            _ => {
                if core::mem::take(&mut self.pending_cr) {
                    self.store(b'\r');
                }
                self.store(byte);
                None
            }
        }
    }

    fn store(&mut self, byte: u8) {
        if !self.discarding && self.buffer.push(byte).is_err() {
            crate::log_trace!("Line exceeds {} bytes, discarding", LINE_CAPACITY);
            self.discarding = true;
            self.buffer.clear();
        }
    }

    /// Bytes of the current partial line
    pub fn pending(&self) -> usize {
        self.buffer.len() + usize::from(self.pending_cr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockUart;

    fn line(bytes: &[u8]) -> LineEvent {
        LineEvent::Line(Vec::from_slice(bytes).unwrap())
    }

    #[test]
    fn test_complete_line() {
        let mut reader = LineReader::new();
        let mut uart = MockUart::new(Default::default());
        uart.inject_rx_data(b"C3 1750\n");

        assert_eq!(reader.poll(&mut uart).unwrap(), Some(line(b"C3 1750")));
        assert_eq!(reader.poll(&mut uart).unwrap(), None);
    }

    #[test]
    fn test_line_split_across_polls() {
        let mut reader = LineReader::new();
        let mut uart = MockUart::new(Default::default());

        uart.inject_rx_data(b"A2 40");
        assert_eq!(reader.poll(&mut uart).unwrap(), None);
        assert_eq!(reader.pending(), 5);

        uart.inject_rx_data(b"00\n");
        assert_eq!(reader.poll(&mut uart).unwrap(), Some(line(b"A2 4000")));
        assert_eq!(reader.pending(), 0);
    }

    #[test]
    fn test_one_line_per_poll() {
        let mut reader = LineReader::new();
        let mut uart = MockUart::new(Default::default());
        uart.inject_rx_data(b"R\nC1 1200\n");

        assert_eq!(reader.poll(&mut uart).unwrap(), Some(line(b"R")));
        assert_eq!(uart.rx_pending(), 8);
        assert_eq!(reader.poll(&mut uart).unwrap(), Some(line(b"C1 1200")));
    }

    #[test]
    fn test_crlf_and_empty_lines() {
        let mut reader = LineReader::new();
        assert_eq!(reader.push(b'R'), None);
        assert_eq!(reader.push(b'\r'), None);
        assert_eq!(reader.push(b'\n'), Some(line(b"R")));
        assert_eq!(reader.push(b'\n'), Some(line(b"")));
    }

    #[test]
    fn test_overflow_discards_until_newline() {
        let mut reader = LineReader::new();
        for _ in 0..LINE_CAPACITY + 10 {
            assert_eq!(reader.push(b'9'), None);
        }
        assert_eq!(reader.push(b'\n'), Some(LineEvent::Overflow));

        // Next line is framed normally
        for &b in b"C1 1000" {
            reader.push(b);
        }
        assert_eq!(reader.push(b'\n'), Some(line(b"C1 1000")));
    }

    #[test]
    fn test_exactly_full_line_is_kept() {
        let mut reader = LineReader::new();
        for _ in 0..LINE_CAPACITY {
            reader.push(b'x');
        }
        match reader.push(b'\n') {
            Some(LineEvent::Line(l)) => assert_eq!(l.len(), LINE_CAPACITY),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_full_line_with_crlf_is_kept() {
        let mut reader = LineReader::new();
        for _ in 0..LINE_CAPACITY {
            reader.push(b'1');
        }
        assert_eq!(reader.push(b'\r'), None);
        match reader.push(b'\n') {
            Some(LineEvent::Line(l)) => assert_eq!(l.len(), LINE_CAPACITY),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_overlong_line_with_crlf_overflows() {
        let mut reader = LineReader::new();
        for _ in 0..=LINE_CAPACITY {
            reader.push(b'1');
        }
        reader.push(b'\r');
        assert_eq!(reader.push(b'\n'), Some(LineEvent::Overflow));
    }

    #[test]
    fn test_inner_carriage_returns_are_content() {
        let mut reader = LineReader::new();
        for &b in b"C1\r\r2\r" {
            reader.push(b);
        }
        assert_eq!(reader.pending(), 6);
        assert_eq!(reader.push(b'\n'), Some(line(b"C1\r\r2")));
    }

    #[test]
    fn test_read_error_propagates() {
        let mut reader = LineReader::new();
        let mut uart = MockUart::new(Default::default());
        uart.inject_rx_data(b"R\n");
        uart.set_fail_reads(true);

        assert!(reader.poll(&mut uart).is_err());
    }
}
