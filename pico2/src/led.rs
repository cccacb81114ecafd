//! RGB status LED state.
//!
//! The board LED has one on/off GPIO per channel, so a color is reduced to
//! three booleans after brightness scaling: a channel is lit when its scaled
//! value reaches the upper half of the range. Yellow, amber and blue at the
//! clock's brightness come out as red+green, red+green and blue.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use touchclock_common::Indicator;

/// Scaled channel value above which the channel is lit.
const ON_THRESHOLD: u8 = 127;

#[inline]
const fn scale(
    value: u8,
    brightness: u8,
) -> u8 {
    ((value as u16 * brightness as u16) / 255) as u8
}

/// Red, green and blue on/off levels for `color` at `brightness`.
pub fn channel_levels(
    color: Rgb888,
    brightness: u8,
) -> [bool; 3] {
    [
        scale(color.r(), brightness) > ON_THRESHOLD,
        scale(color.g(), brightness) > ON_THRESHOLD,
        scale(color.b(), brightness) > ON_THRESHOLD,
    ]
}

/// Buffered LED state. Writes only take effect on [`Indicator::show`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LedState {
    brightness: u8,
    pending: Rgb888,
    shown: [bool; 3],
}

impl LedState {
    pub const fn new() -> Self {
        Self {
            brightness: u8::MAX,
            pending: Rgb888::BLACK,
            shown: [false; 3],
        }
    }

    /// Channel levels as of the last `show`.
    #[inline]
    pub const fn levels(&self) -> [bool; 3] { self.shown }
}

impl Default for LedState {
    fn default() -> Self { Self::new() }
}

impl Indicator for LedState {
    fn clear(&mut self) { self.pending = Rgb888::BLACK; }

    fn set_brightness(
        &mut self,
        level: u8,
    ) {
        self.brightness = level;
    }

    /// The board has a single LED; every channel index addresses it.
    fn set_color(
        &mut self,
        _channel: usize,
        color: Rgb888,
    ) {
        self.pending = color;
    }

    fn show(&mut self) { self.shown = channel_levels(self.pending, self.brightness); }
}

// =============================================================================
// Unit Tests
// =============================================================================
