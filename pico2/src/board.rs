//! Board wiring and firmware-level constants.
//!
//! # Pins (Raspberry Pi Pico 2)
//!
//! | Function | GPIO | Notes |
//! |----------|------|-------|
//! | OLED SDA | 4 | I2C0 |
//! | OLED SCL | 5 | I2C0 |
//! | TB1A | 12 | active-low, internal pull-up |
//! | TB2A | 13 | active-low, internal pull-up |
//! | TB1B | 14 | active-low, internal pull-up |
//! | TB2B | 15 | active-low, internal pull-up |
//! | LED red | 26 | active-low |
//! | LED green | 27 | active-low |
//! | LED blue | 28 | active-low |

use touchclock_common::ClockConfig;

/// OLED bus speed (fast-mode I2C).
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Clock behavior built into this firmware image.
#[cfg(not(feature = "plain"))]
pub const CLOCK_CONFIG: ClockConfig = ClockConfig::GREETER;

/// Clock behavior built into this firmware image.
#[cfg(feature = "plain")]
pub const CLOCK_CONFIG: ClockConfig = ClockConfig::PLAIN;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "plain"))]
    fn test_default_image_greets() {
        assert!(CLOCK_CONFIG.has_greeting);
        assert!(CLOCK_CONFIG.has_loading_screen);
    }

    #[test]
    #[cfg(feature = "plain")]
    fn test_plain_image() {
        assert!(!CLOCK_CONFIG.has_greeting);
        assert_eq!(CLOCK_CONFIG.debounce_ms, 0);
    }
}
