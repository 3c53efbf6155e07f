//! Mock UART implementation for testing

use crate::platform::{
    error::{PlatformError, UartError},
    traits::{UartConfig, UartInterface},
    Result,
};
use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

/// Mock UART implementation
///
/// In-memory buffers for transmit and receive data.
///
/// # Example
///
/// ```ignore
/// use pico_ppm::platform::mock::MockUart;
/// use pico_ppm::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new(Default::default());
///
/// uart.write(b"Channel 1 set to 1200\r\n").unwrap();
/// assert_eq!(uart.tx_string(), "Channel 1 set to 1200\r\n");
///
/// uart.inject_rx_data(b"R\n");
/// let mut buf = [0u8; 2];
/// uart.read(&mut buf).unwrap();
/// assert_eq!(&buf, b"R\n");
/// ```
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: Vec<u8>,
    rx_buffer: VecDeque<u8>,
    fail_reads: bool,
}

impl MockUart {
    /// Create a new mock UART
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: Vec::new(),
            rx_buffer: VecDeque::new(),
            fail_reads: false,
        }
    }

    /// Transmitted bytes (for test verification)
    pub fn tx_buffer(&self) -> &[u8] {
        &self.tx_buffer
    }

    /// Transmitted bytes as text, lossy
    pub fn tx_string(&self) -> String {
        String::from_utf8_lossy(&self.tx_buffer).into_owned()
    }

    /// Clear transmit buffer
    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.clear();
    }

    /// Inject receive data (for test setup)
    pub fn inject_rx_data(&mut self, data: &[u8]) {
        self.rx_buffer.extend(data.iter().copied());
    }

    /// Bytes received but not yet read
    pub fn rx_pending(&self) -> usize {
        self.rx_buffer.len()
    }

    /// Make every following `read` fail with an overrun
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Configured baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tx_buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        if self.fail_reads {
            return Err(PlatformError::Uart(UartError::Overrun));
        }
        let to_read = core::cmp::min(buffer.len(), self.rx_buffer.len());
        for (slot, byte) in buffer.iter_mut().zip(self.rx_buffer.drain(..to_read)) {
            *slot = byte;
        }
        Ok(to_read)
    }

    fn available(&self) -> bool {
        !self.rx_buffer.is_empty()
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_uart_write() {
        let mut uart = MockUart::new(UartConfig::default());
        let written = uart.write(b"All channels reset").unwrap();
        assert_eq!(written, 18);
        assert_eq!(uart.tx_buffer(), b"All channels reset");

        uart.clear_tx_buffer();
        assert!(uart.tx_buffer().is_empty());
    }

    #[test]
    fn test_mock_uart_partial_reads() {
        let mut uart = MockUart::new(UartConfig::default());
        uart.inject_rx_data(b"A2 4000");

        let mut buffer = [0u8; 3];
        assert_eq!(uart.read(&mut buffer).unwrap(), 3);
        assert_eq!(&buffer, b"A2 ");
        assert_eq!(uart.rx_pending(), 4);

        let mut rest = [0u8; 10];
        assert_eq!(uart.read(&mut rest).unwrap(), 4);
        assert_eq!(&rest[..4], b"4000");
        assert!(!uart.available());
    }

    #[test]
    fn test_mock_uart_read_failure() {
        let mut uart = MockUart::new(UartConfig::default());
        uart.inject_rx_data(b"R\n");
        uart.set_fail_reads(true);

        let mut buffer = [0u8; 1];
        assert_eq!(
            uart.read(&mut buffer),
            Err(PlatformError::Uart(UartError::Overrun))
        );
    }

    #[test]
    fn test_mock_uart_baud_rate() {
        let uart = MockUart::new(UartConfig::default());
        assert_eq!(uart.baud_rate(), 115200);
    }
}
