//! Clock and loading frame composition.
//!
//! The renderer owns no state. Each call opens a [`Frame`], draws every
//! line from the view it is given, and lets the frame guard flush.
//!
//! # Clock Frame (128x64)
//!
//! ```text
//!  Good Afternoon!               <- greeting (optional, small font)
//!  Setting:    Hour              <- label line (when shown, small font)
//!        15:11:24                <- time, horizontally centered (large font)
//!   27|9|2023                    <- date (large font)
//! ```

use core::fmt::Write;

use embedded_graphics::prelude::Point;
use heapless::String;

use crate::config::{
    DATE_POS,
    GREETING_POS,
    LABEL_POS,
    LABEL_VALUE_POS,
    LOADING_POS,
    SCREEN_WIDTH,
    TIME_BASELINE_Y,
};
use crate::cursor::SettingField;
use crate::surface::{Font, Frame, Surface};
use crate::time::TimeValue;

/// Text shown while the clock starts up.
pub const LOADING_TEXT: &str = "Loading...";

/// Prefix of the label line.
pub const LABEL_PREFIX: &str = "Setting: ";

// =============================================================================
// Label Mode
// =============================================================================

/// Whether the "Setting: <field>" line is drawn.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LabelMode {
    #[default]
    Shown,
    /// Time and date only.
    Hidden,
}

impl LabelMode {
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Shown => Self::Hidden,
            Self::Hidden => Self::Shown,
        }
    }

    #[inline]
    pub const fn is_shown(self) -> bool { matches!(self, Self::Shown) }
}

// =============================================================================
// Formatting
// =============================================================================

/// Zero-padded "HH:MM:SS".
pub fn format_time(time: &TimeValue) -> String<8> {
    let mut text = String::new();
    let _ = write!(text, "{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second());
    text
}

/// Unpadded "D|M|YYYY".
pub fn format_date(time: &TimeValue) -> String<12> {
    let mut text = String::new();
    let _ = write!(text, "{}|{}|{}", time.day(), time.month(), time.year());
    text
}

/// X coordinate that centers `width` pixels on the screen. Never negative.
#[inline]
pub const fn centered_x(width: u32) -> i32 { (SCREEN_WIDTH.saturating_sub(width) / 2) as i32 }

// =============================================================================
// Frames
// =============================================================================

/// Everything a clock frame shows.
#[derive(Clone, Copy, Debug)]
pub struct ClockView<'a> {
    pub time: TimeValue,
    pub field: SettingField,
    pub label: LabelMode,
    /// Greeting line, or `None` to leave it out.
    pub greeting: Option<&'a str>,
}

/// Draw one clock frame.
pub fn draw_clock_frame<S: Surface + ?Sized>(
    surface: &mut S,
    view: &ClockView<'_>,
) {
    let mut frame = Frame::begin(surface);

    if let Some(greeting) = view.greeting {
        frame.print_at(GREETING_POS, Font::Small, greeting);
    }

    if view.label.is_shown() {
        frame.print_at(LABEL_POS, Font::Small, LABEL_PREFIX);
        frame.print_at(LABEL_VALUE_POS, Font::Small, view.field.label());
    }

    let time = format_time(&view.time);
    let width = frame.text_width(Font::Large, &time);
    frame.print_at(Point::new(centered_x(width), TIME_BASELINE_Y), Font::Large, &time);

    frame.print_at(DATE_POS, Font::Large, &format_date(&view.time));
}

/// Draw the startup "Loading..." frame.
pub fn draw_loading_frame<S: Surface + ?Sized>(surface: &mut S) {
    let mut frame = Frame::begin(surface);
    frame.print_at(LOADING_POS, Font::Small, LOADING_TEXT);
}

// =============================================================================
// Unit Tests
// =============================================================================
