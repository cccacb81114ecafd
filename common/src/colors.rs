//! Color constants for the clock.
//!
//! The OLED is monochrome, so on-screen drawing only uses [`BinaryColor`].
//! The status indicator is an RGB LED and takes [`Rgb888`] values.

use embedded_graphics::pixelcolor::{BinaryColor, Rgb888, RgbColor, WebColors};

// =============================================================================
// Display Colors
// =============================================================================

/// Lit pixel. Used for all text.
pub const INK: BinaryColor = BinaryColor::On;

/// Unlit pixel. Frames are cleared to this color.
pub const BACKGROUND: BinaryColor = BinaryColor::Off;

// =============================================================================
// Indicator Colors
// =============================================================================

/// Warm yellow (#FFFF00) shown in the morning.
pub const MORNING_YELLOW: Rgb888 = Rgb888::YELLOW;

/// Amber (#FFA500) shown in the afternoon.
pub const AFTERNOON_AMBER: Rgb888 = Rgb888::CSS_ORANGE;

/// Cool blue (#0000FF) shown in the evening.
pub const EVENING_BLUE: Rgb888 = Rgb888::BLUE;

/// Indicator brightness used for greetings (0-255).
pub const INDICATOR_BRIGHTNESS: u8 = 240;
