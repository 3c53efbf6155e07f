//! Terminal rendering of the channel display.
//!
//! Collects drawing calls like a frame buffer and turns each flushed frame
//! into text rows, one per label: `C1 |##########          |`. Bars are
//! drawn at 5 pixels per character.

use pico_ppm::platform::{
    error::{DisplayError, PlatformError},
    traits::DisplayInterface,
    Result,
};

/// Pixels per bar character.
const PIXELS_PER_CELL: u16 = 5;

#[derive(Debug, Clone)]
enum Op {
    Text { y: u16, text: String },
    Rect { y: u16, width: u16 },
    Fill { y: u16, width: u16 },
}

/// Display that renders frames as text.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    connected: bool,
    initialized: bool,
    pending: Vec<Op>,
    frame: Vec<String>,
    version: u64,
}

impl TerminalDisplay {
    /// Create a display that comes up normally.
    pub fn new() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    /// Create a display that fails `init`, like a panel missing from the bus.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Rows of the last flushed frame.
    pub fn frame(&self) -> &[String] {
        &self.frame
    }

    /// Incremented every time a flush changes the visible frame.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn render(&self) -> Vec<String> {
        let mut rows: Vec<(u16, String, u16, u16)> = Vec::new();

        for op in &self.pending {
            match op {
                Op::Text { y, text } => rows.push((*y, text.clone(), 0, 0)),
                Op::Rect { y, width } => {
                    if let Some(row) = rows.iter_mut().find(|row| row.0 == *y) {
                        row.2 = *width;
                    }
                }
                Op::Fill { y, width } => {
                    if let Some(row) = rows.iter_mut().find(|row| row.0 == *y) {
                        row.3 = *width;
                    }
                }
            }
        }

        rows.into_iter()
            .map(|(_, label, outline, fill)| {
                let cells = usize::from(outline / PIXELS_PER_CELL);
                let filled = usize::from(fill.min(outline) / PIXELS_PER_CELL);
                format!("{:<3}|{}{}|", label, "#".repeat(filled), " ".repeat(cells - filled))
            })
            .collect()
    }
}

impl DisplayInterface for TerminalDisplay {
    fn init(&mut self) -> Result<()> {
        if !self.connected {
            return Err(PlatformError::Display(DisplayError::NoResponse));
        }
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) {
        self.pending.clear();
    }

    fn draw_text(&mut self, _x: u16, y: u16, text: &str) {
        self.pending.push(Op::Text {
            y,
            text: text.to_string(),
        });
    }

    fn draw_rect(&mut self, _x: u16, y: u16, width: u16, _height: u16) {
        self.pending.push(Op::Rect { y, width });
    }

    fn fill_rect(&mut self, _x: u16, y: u16, width: u16, _height: u16) {
        self.pending.push(Op::Fill { y, width });
    }

    fn flush(&mut self) -> Result<()> {
        if !self.initialized {
            return Err(PlatformError::Display(DisplayError::FlushFailed));
        }
        let frame = self.render();
        if frame != self.frame {
            self.frame = frame;
            self.version += 1;
        }
        Ok(())
    }
}
