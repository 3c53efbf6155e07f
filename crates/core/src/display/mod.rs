//! Channel bar graph geometry
//!
//! The display shows one row per channel on a 128x64 monochrome panel:
//!
//! ```text
//! C1  [##########          ]   y = 0
//! C2  [####################]   y = 10
//! ...
//! ```
//!
//! Each row has a text label at the left edge, an outline rectangle and a
//! filled rectangle whose width is the pulse width mapped from
//! `[1000, 2000]` to `[0, 100]` pixels.

use core::fmt::Write;

use heapless::String;

use crate::channel::{CHANNEL_COUNT, PULSE_MAX_US, PULSE_MIN_US};

/// Panel width (pixels)
pub const SCREEN_WIDTH: u16 = 128;

/// Panel height (pixels)
pub const SCREEN_HEIGHT: u16 = 64;

/// Vertical distance between channel rows (pixels)
pub const ROW_PITCH: u16 = 10;

/// Left edge of the bar outline (pixels)
pub const BAR_X: u16 = 20;

/// Bar outline width, also the fill width at full scale (pixels)
pub const BAR_WIDTH: u16 = 100;

/// Bar height (pixels)
pub const BAR_HEIGHT: u16 = 8;

/// Axis-aligned rectangle in panel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge (pixels)
    pub x: u16,
    /// Top edge (pixels)
    pub y: u16,
    /// Width (pixels)
    pub width: u16,
    /// Height (pixels)
    pub height: u16,
}

/// Drawing instructions for one channel row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBar {
    /// Label text, e.g. `C1`
    pub label: String<4>,
    /// Label cursor column
    pub label_x: u16,
    /// Label cursor row, the top of the channel's bar
    pub label_y: u16,
    /// Bar outline
    pub outline: Rect,
    /// Filled part of the bar
    pub fill: Rect,
}

/// Fill width for a pulse width (pixels)
///
/// Linear map of `[1000, 2000]` onto `[0, 100]`, truncating. Pulse widths
/// are already range-checked by the channel store.
pub fn fill_width(pulse_us: u16) -> u16 {
    let span = u32::from(PULSE_MAX_US - PULSE_MIN_US);
    let above_min = u32::from(pulse_us.saturating_sub(PULSE_MIN_US));
    (above_min * u32::from(BAR_WIDTH) / span) as u16
}

/// Row geometry for channel `index` (0-based) showing `pulse_us`
pub fn channel_bar(index: usize, pulse_us: u16) -> ChannelBar {
    let y = index as u16 * ROW_PITCH;

    let mut label = String::new();
    // "C" plus at most two digits always fits
    let _ = write!(label, "C{}", index + 1);

    ChannelBar {
        label,
        label_x: 0,
        label_y: y,
        outline: Rect {
            x: BAR_X,
            y,
            width: BAR_WIDTH,
            height: BAR_HEIGHT,
        },
        fill: Rect {
            x: BAR_X,
            y,
            width: fill_width(pulse_us),
            height: BAR_HEIGHT,
        },
    }
}

/// Row geometry for every channel
pub fn layout(pulse_widths: &[u16; CHANNEL_COUNT]) -> [ChannelBar; CHANNEL_COUNT] {
    core::array::from_fn(|index| channel_bar(index, pulse_widths[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_width_endpoints() {
        assert_eq!(fill_width(1000), 0);
        assert_eq!(fill_width(1500), 50);
        assert_eq!(fill_width(2000), 100);
    }

    #[test]
    fn test_fill_width_truncates() {
        assert_eq!(fill_width(1009), 0);
        assert_eq!(fill_width(1010), 1);
        assert_eq!(fill_width(1755), 75);
        assert_eq!(fill_width(1999), 99);
    }

    #[test]
    fn test_channel_bar_geometry() {
        let bar = channel_bar(2, 1750);

        assert_eq!(bar.label.as_str(), "C3");
        assert_eq!((bar.label_x, bar.label_y), (0, 20));
        assert_eq!(
            bar.outline,
            Rect {
                x: 20,
                y: 20,
                width: 100,
                height: 8
            }
        );
        assert_eq!(bar.fill.width, 75);
        assert_eq!(bar.fill.y, 20);
    }

    #[test]
    fn test_layout_fits_panel() {
        let bars = layout(&[1000, 1200, 1400, 1600, 1800, 2000]);

        for (index, bar) in bars.iter().enumerate() {
            assert_eq!(bar.label_y, index as u16 * ROW_PITCH);
            assert!(bar.outline.x + bar.outline.width <= SCREEN_WIDTH);
            assert!(bar.outline.y + bar.outline.height <= SCREEN_HEIGHT);
            assert!(bar.fill.width <= bar.outline.width);
        }
        assert_eq!(bars[0].fill.width, 0);
        assert_eq!(bars[5].fill.width, 100);
        assert_eq!(bars[5].label.as_str(), "C6");
    }
}
