//! Clock UI core shared by the simulator and the Pico 2 firmware.
//!
//! This crate contains the interaction core of the touch clock and is
//! platform-agnostic:
//!
//! - [`time`]: Date-time value, calendar helpers and the free-running clock service
//! - [`time_model`]: Per-field wraparound editing on top of a clock service
//! - [`cursor`]: Cyclic selection of the editable field
//! - [`debounce`]: Touch pad rate limiting
//! - [`input`]: Touch pads, actions and the pad → action keymap
//! - [`greeting`]: Hour → greeting text and status indicator color
//! - [`surface`]: Frame-scoped text drawing over any `DrawTarget`
//! - [`render`]: Clock and loading frame composition
//! - [`controller`]: The per-iteration render/poll/dispatch loop body
//! - [`config`]: Variant presets and display layout constants
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p touchclock-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the firmware builds this crate as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod debounce;
pub mod greeting;
pub mod input;
pub mod render;
pub mod styles;
pub mod surface;
pub mod time;
pub mod time_model;

// Re-export commonly used items
pub use config::ClockConfig;
pub use controller::{ClockContext, Controller, StepOutcome};
pub use cursor::{SettingCursor, SettingField};
pub use greeting::{DayPeriod, Indicator, NoIndicator};
pub use input::{Action, Keymap, TouchInput, TouchPad};
pub use render::LabelMode;
pub use surface::{Canvas, Font, Frame, Present, Surface};
pub use time::{ClockService, Delta, Monotonic, SoftClock, TimeValue};
pub use time_model::TimeModel;
