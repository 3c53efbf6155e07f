//! Mock display for testing

use crate::platform::{
    error::{DisplayError, PlatformError},
    traits::DisplayInterface,
    Result,
};
use std::string::{String, ToString};
use std::vec::Vec;

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Text { x: u16, y: u16, text: String },
    Rect { x: u16, y: u16, width: u16, height: u16 },
    FillRect { x: u16, y: u16, width: u16, height: u16 },
}

/// Mock display
///
/// Records drawing calls into a pending frame; `flush` moves the pending
/// frame into the last flushed frame and counts it.
#[derive(Debug, Default)]
pub struct MockDisplay {
    fail_init: bool,
    initialized: bool,
    pending: Vec<DrawOp>,
    frame: Vec<DrawOp>,
    clears: usize,
    flushes: usize,
}

impl MockDisplay {
    /// Create a display that initializes successfully
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a display whose `init` fails, like a panel missing from the bus
    pub fn failing() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }

    /// Check if `init` succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Drawing calls of the last flushed frame
    pub fn frame(&self) -> &[DrawOp] {
        &self.frame
    }

    /// Number of `clear` calls
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Number of `flush` calls
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl DisplayInterface for MockDisplay {
    fn init(&mut self) -> Result<()> {
        if self.fail_init {
            return Err(PlatformError::Display(DisplayError::NoResponse));
        }
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) {
        self.pending.clear();
        self.clears += 1;
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) {
        self.pending.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16) {
        self.pending.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) {
        self.pending.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn flush(&mut self) -> Result<()> {
        if !self.initialized {
            return Err(PlatformError::Display(DisplayError::FlushFailed));
        }
        self.frame = core::mem::take(&mut self.pending);
        self.flushes += 1;
        Ok(())
    }
}
