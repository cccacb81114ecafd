//! Build-time behaviour presets.
//!
//! One [`ClockConfig`] record covers both clock variants: the full
//! "greeter" clock (debounce, loading screen, greeting, hideable label)
//! and the plain setter without any of those.

use crate::debounce::DebouncePolicy;
use crate::input::Keymap;
use crate::time::TimeValue;

/// Time the clock starts at on power-up: 15:11:24, 27 September 2023.
pub const SEED_TIME: TimeValue = match TimeValue::new(15, 11, 24, 27, 9, 2023) {
    Some(value) => value,
    None => panic!("seed time out of range"),
};

/// Every option the controller recognises.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClockConfig {
    /// Minimum spacing between accepted pad presses. 0 disables debouncing.
    pub debounce_ms: u64,
    pub debounce_policy: DebouncePolicy,
    /// Show "Loading..." for `loading_ms` before the first clock frame.
    pub has_loading_screen: bool,
    pub loading_ms: u64,
    /// Draw the greeting line and drive the status indicator.
    pub has_greeting: bool,
    /// Whether [`crate::input::Action::ToggleLabel`] is honoured. When false the label stays shown.
    pub label_togglable: bool,
    /// Delay between loop iterations.
    pub pace_ms: u64,
    /// Value written to the clock service at startup.
    pub seed: TimeValue,
    pub keymap: Keymap,
}

impl ClockConfig {
    /// Full clock: 100 ms shared debounce, 2 s loading screen, greeting + LED.
    pub const GREETER: Self = Self {
        debounce_ms: 100,
        debounce_policy: DebouncePolicy::Shared,
        has_loading_screen: true,
        loading_ms: 2_000,
        has_greeting: true,
        label_togglable: true,
        pace_ms: 200,
        seed: SEED_TIME,
        keymap: Keymap::DEFAULT,
    };

    /// Plain setter: no debounce, no loading screen, no greeting. The label is
    /// always on and the toggle pad does nothing.
    pub const PLAIN: Self = Self {
        debounce_ms: 0,
        debounce_policy: DebouncePolicy::Shared,
        has_loading_screen: false,
        loading_ms: 0,
        has_greeting: false,
        label_togglable: false,
        pace_ms: 200,
        seed: SEED_TIME,
        keymap: Keymap::DEFAULT,
    };
}

impl Default for ClockConfig {
    fn default() -> Self { Self::GREETER }
}

// Pad mappings must not bind two pads to one action
const _: () = assert!(ClockConfig::GREETER.keymap.is_bijective());
const _: () = assert!(ClockConfig::PLAIN.keymap.is_bijective());

// =============================================================================
// Unit Tests
// =============================================================================
