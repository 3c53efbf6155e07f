//! Display interface trait
//!
//! Minimal monochrome drawing surface, the subset of an SSD1306-style
//! buffered driver the channel display needs. Drawing calls only touch the
//! frame buffer; `flush` transfers it to the panel.

use crate::platform::Result;

/// Buffered monochrome display
pub trait DisplayInterface {
    /// Bring up the panel
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Display` if the panel does not respond or its
    /// frame buffer cannot be allocated.
    fn init(&mut self) -> Result<()>;

    /// Clear the frame buffer
    fn clear(&mut self);

    /// Draw text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, x: u16, y: u16, text: &str);

    /// Draw a one-pixel rectangle outline
    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16);

    /// Draw a filled rectangle
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16);

    /// Send the frame buffer to the panel
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Display(DisplayError::FlushFailed)` if the
    /// transfer fails.
    fn flush(&mut self) -> Result<()>;
}
