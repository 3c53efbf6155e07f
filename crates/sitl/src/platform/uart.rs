//! Simulated UART peripheral for SITL.
//!
//! The RX side is shared: a stdin reader task pushes bytes through an
//! [`RxHandle`] while the control task drains them. TX bytes stay in an
//! in-memory buffer until the host loop drains and prints them.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use pico_ppm::platform::{
    error::{PlatformError, UartError},
    traits::{UartConfig, UartInterface},
    Result,
};

/// Cloneable writer into a [`SitlUart`] receive buffer.
#[derive(Debug, Clone)]
pub struct RxHandle {
    rx_buffer: Arc<Mutex<VecDeque<u8>>>,
    capacity: usize,
}

impl RxHandle {
    /// Queue bytes as if they arrived on the wire, returning bytes accepted.
    ///
    /// Bytes beyond the buffer capacity are dropped, like a hardware FIFO
    /// overrun.
    pub fn push(&self, data: &[u8]) -> usize {
        let mut rx = self.rx_buffer.lock().unwrap();
        let available = self.capacity.saturating_sub(rx.len());
        let to_push = data.len().min(available);
        rx.extend(&data[..to_push]);
        to_push
    }

    /// Queue a line followed by `\n`.
    pub fn push_line(&self, line: &str) -> usize {
        self.push(line.as_bytes()) + self.push(b"\n")
    }

    /// Copy newline-terminated segments from `reader` until EOF.
    ///
    /// Bytes are forwarded untouched so invalid UTF-8 reaches the command
    /// interpreter as a bad line instead of ending the stream.
    pub async fn forward_lines<R: AsyncBufRead + Unpin>(&self, reader: R) -> std::io::Result<()> {
        let mut segments = reader.split(b'\n');
        while let Some(mut segment) = segments.next_segment().await? {
            segment.push(b'\n');
            self.push(&segment);
        }
        Ok(())
    }
}

/// Simulated UART with in-memory buffers.
#[derive(Debug)]
pub struct SitlUart {
    config: UartConfig,
    tx_buffer: VecDeque<u8>,
    rx: RxHandle,
}

impl SitlUart {
    /// Default buffer capacity in bytes.
    const DEFAULT_CAPACITY: usize = 4096;

    /// Create a new SITL UART.
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: VecDeque::with_capacity(Self::DEFAULT_CAPACITY),
            rx: RxHandle {
                rx_buffer: Arc::new(Mutex::new(VecDeque::with_capacity(
                    Self::DEFAULT_CAPACITY,
                ))),
                capacity: Self::DEFAULT_CAPACITY,
            },
        }
    }

    /// Handle for feeding the receive buffer from another task.
    pub fn rx_handle(&self) -> RxHandle {
        self.rx.clone()
    }

    /// Drain the TX buffer (simulating data being sent).
    pub fn drain_tx(&mut self) -> Vec<u8> {
        self.tx_buffer.drain(..).collect()
    }

    /// Get the configured baud rate.
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for SitlUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let available = Self::DEFAULT_CAPACITY.saturating_sub(self.tx_buffer.len());
        let to_write = data.len().min(available);
        self.tx_buffer.extend(&data[..to_write]);
        Ok(to_write)
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut rx = self
            .rx
            .rx_buffer
            .lock()
            .map_err(|_| PlatformError::Uart(UartError::ReadFailed))?;
        let to_read = buffer.len().min(rx.len());
        for (slot, byte) in buffer.iter_mut().zip(rx.drain(..to_read)) {
            *slot = byte;
        }
        Ok(to_read)
    }

    fn available(&self) -> bool {
        !self.rx.rx_buffer.lock().unwrap().is_empty()
    }

    fn flush(&mut self) -> Result<()> {
        // Data is immediately available in the buffer
        Ok(())
    }
}
