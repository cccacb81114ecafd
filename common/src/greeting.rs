//! Time-of-day greeting and the status indicator that mirrors it.
//!
//! | Hours | Greeting | Indicator |
//! |-------|----------|-----------|
//! | 0-11 | "Good Morning!" | Yellow |
//! | 12-17 | "Good Afternoon!" | Amber |
//! | 18-23 | "Good Evening!" | Blue |
//!
//! Looking up the greeting is pure. Pushing the color to the LED is a
//! separate call ([`show_period`]) so the controller can do it only when the
//! period changes.

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::{AFTERNOON_AMBER, EVENING_BLUE, INDICATOR_BRIGHTNESS, MORNING_YELLOW};

/// Part of the day a greeting belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DayPeriod {
    /// Hours 0-11.
    Morning,
    /// Hours 12-17.
    Afternoon,
    /// Hours 18-23.
    Evening,
}

impl DayPeriod {
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            0..12 => Self::Morning,
            12..18 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    pub const fn greeting(self) -> &'static str {
        match self {
            Self::Morning => "Good Morning!",
            Self::Afternoon => "Good Afternoon!",
            Self::Evening => "Good Evening!",
        }
    }

    pub const fn indicator_color(self) -> Rgb888 {
        match self {
            Self::Morning => MORNING_YELLOW,
            Self::Afternoon => AFTERNOON_AMBER,
            Self::Evening => EVENING_BLUE,
        }
    }
}

/// Greeting text and indicator color for `hour`.
#[inline]
pub const fn greeting(hour: u8) -> (&'static str, Rgb888) {
    let period = DayPeriod::from_hour(hour);
    (period.greeting(), period.indicator_color())
}

/// Addressable RGB status indicator.
pub trait Indicator {
    /// Turn every channel off (takes effect on [`show`](Self::show)).
    fn clear(&mut self);

    fn set_brightness(
        &mut self,
        level: u8,
    );

    fn set_color(
        &mut self,
        channel: usize,
        color: Rgb888,
    );

    /// Latch the pending state onto the hardware.
    fn show(&mut self);
}

/// Indicator for boards without an LED.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoIndicator;

impl Indicator for NoIndicator {
    fn clear(&mut self) {}

    fn set_brightness(
        &mut self,
        _level: u8,
    ) {
    }

    fn set_color(
        &mut self,
        _channel: usize,
        _color: Rgb888,
    ) {
    }

    fn show(&mut self) {}
}

/// Show the color of `period` on channel 0 of `indicator`.
pub fn show_period<I: Indicator + ?Sized>(
    indicator: &mut I,
    period: DayPeriod,
) {
    indicator.clear();
    indicator.set_brightness(INDICATOR_BRIGHTNESS);
    indicator.set_color(0, period.indicator_color());
    indicator.show();
}

// =============================================================================
// Unit Tests
// =============================================================================
