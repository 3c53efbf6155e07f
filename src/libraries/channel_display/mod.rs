//! Channel bar display
//!
//! Renders the layout from [`pico_ppm_core::display`] onto a
//! [`DisplayInterface`]: per channel a `Cn` label, a bar outline and a
//! fill proportional to the pulse width.

use pico_ppm_core::{channel::CHANNEL_COUNT, display::layout};

use crate::platform::{traits::DisplayInterface, Result};

/// Channel bar renderer
pub struct ChannelDisplay<D: DisplayInterface> {
    display: D,
    last_frame: Option<[u16; CHANNEL_COUNT]>,
}

impl<D: DisplayInterface> ChannelDisplay<D> {
    pub fn new(display: D) -> Self {
        Self {
            display,
            last_frame: None,
        }
    }

    /// Bring up the panel and show an empty frame
    pub fn init(&mut self) -> Result<()> {
        self.display.init()?;
        self.display.clear();
        self.display.flush()
    }

    /// Redraw every channel bar and flush
    pub fn render(&mut self, pulse_widths: &[u16; CHANNEL_COUNT]) -> Result<()> {
        self.display.clear();

        for bar in layout(pulse_widths).iter() {
            self.display
                .draw_text(bar.label_x, bar.label_y, bar.label.as_str());
            let o = bar.outline;
            self.display.draw_rect(o.x, o.y, o.width, o.height);
            let f = bar.fill;
            self.display.fill_rect(f.x, f.y, f.width, f.height);
        }

        self.display.flush()?;
        self.last_frame = Some(*pulse_widths);
        Ok(())
    }

    /// Pulse widths of the last frame that reached the panel
    pub fn last_frame(&self) -> Option<&[u16; CHANNEL_COUNT]> {
        self.last_frame.as_ref()
    }

    /// Underlying display
    pub fn inner(&self) -> &D {
        &self.display
    }
}
