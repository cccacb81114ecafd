//! Touch clock firmware library: testable modules for the Pico 2 build.
//!
//! The clock itself lives in `touchclock-common`. This library holds the
//! board-specific logic that can still be tested on the host machine; the
//! binary (`main.rs`) wires it to the RP2350 peripherals.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p touchclock-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p touchclock-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

pub mod board;
pub mod led;

pub use led::{LedState, channel_levels};
