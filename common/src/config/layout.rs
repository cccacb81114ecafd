//! Display and layout configuration constants.
//!
//! Positions are text baselines in pixels (left end of the baseline), which
//! is where [`crate::surface::Surface::set_cursor`] anchors text.

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (128x64 monochrome OLED).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

// =============================================================================
// Clock Frame Layout
// =============================================================================

/// Greeting line, top left.
pub const GREETING_POS: Point = Point::new(0, 10);

/// "Setting: " prefix of the label line.
pub const LABEL_POS: Point = Point::new(0, 20);

/// Field name on the label line, shifted right to leave room for the prefix.
pub const LABEL_VALUE_POS: Point = Point::new(60, 20);

/// Baseline of the centered HH:MM:SS line. X is computed per frame.
pub const TIME_BASELINE_Y: i32 = 40;

/// Date line.
pub const DATE_POS: Point = Point::new(10, 60);

// =============================================================================
// Loading Frame Layout
// =============================================================================

/// "Loading..." text.
pub const LOADING_POS: Point = Point::new(0, 30);
