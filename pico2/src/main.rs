//! Touch clock firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows an editable date-time clock on a 128x64 SSD1306 OLED.
//!
//! # Architecture
//!
//! A single embassy task runs the shared controller: render, poll the pads,
//! apply accepted actions, then sleep for the configured pace. Board
//! peripherals are adapted to the controller's interfaces here:
//!
//! - [`Oled`]: buffered SSD1306 driver, flushed once per frame
//! - [`PicoPads`]: four active-low touch pad inputs
//! - [`RgbLed`]: active-low RGB status LED
//! - [`EmbassyTicks`]: millisecond ticks for the clock and debouncer
//!
//! # Pad Controls (default image)
//!
//! - **TB1A**: Increment the active field
//! - **TB2A**: Decrement the active field
//! - **TB1B**: Select the next field
//! - **TB2B**: Show/hide the "Setting:" label
//!
//! Build with `--features plain` for the minimal variant.

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Instant, Timer};
use embedded_graphics::pixelcolor::{BinaryColor, Rgb888};
use embedded_graphics::prelude::*;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::{DisplayConfig, DisplayRotation, DisplaySize128x64, I2CInterface};
use ssd1306::{I2CDisplayInterface, Ssd1306};
use touchclock_common::{Canvas, Controller, Indicator, Monotonic, Present, SoftClock, TouchInput, TouchPad};
use touchclock_pico2::LedState;
use touchclock_pico2::board::{CLOCK_CONFIG, I2C_FREQUENCY_HZ};
use {defmt_rtt as _, panic_probe as _};

// =============================================================================
// Display
// =============================================================================

type OledDriver =
    Ssd1306<I2CInterface<I2c<'static, I2C0, Blocking>>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// SSD1306 framebuffer. Drawing touches RAM only; [`Present`] sends it over I2C.
struct Oled(OledDriver);

impl OriginDimensions for Oled {
    fn size(&self) -> Size { self.0.size() }
}

impl DrawTarget for Oled {
    type Color = BinaryColor;
    type Error = <OledDriver as DrawTarget>::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.0.draw_iter(pixels)
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        DrawTarget::clear(&mut self.0, color)
    }
}

impl Present for Oled {
    fn present(&mut self) {
        if self.0.flush().is_err() {
            warn!("OLED flush failed");
        }
    }
}

// =============================================================================
// Touch Pads
// =============================================================================

/// Touch pad outputs, indexed by [`TouchPad::index`]. Low means touched.
struct PicoPads {
    pins: [Input<'static>; 4],
}

impl TouchInput for PicoPads {
    fn is_pressed(
        &mut self,
        pad: TouchPad,
    ) -> bool {
        self.pins[pad.index()].is_low()
    }
}

// =============================================================================
// Status LED
// =============================================================================

/// Red, green and blue LED pins. Low means lit.
struct RgbLed {
    pins: [Output<'static>; 3],
    state: LedState,
}

impl Indicator for RgbLed {
    fn clear(&mut self) { self.state.clear(); }

    fn set_brightness(
        &mut self,
        level: u8,
    ) {
        self.state.set_brightness(level);
    }

    fn set_color(
        &mut self,
        channel: usize,
        color: Rgb888,
    ) {
        self.state.set_color(channel, color);
    }

    fn show(&mut self) {
        self.state.show();
        for (pin, lit) in self.pins.iter_mut().zip(self.state.levels()) {
            pin.set_level(if lit { Level::Low } else { Level::High });
        }
    }
}

// =============================================================================
// Ticks
// =============================================================================

/// Embassy time driver as the clock's millisecond source.
#[derive(Clone, Copy)]
struct EmbassyTicks;

impl Monotonic for EmbassyTicks {
    fn now_ms(&self) -> u64 { Instant::now().as_millis() }
}

// =============================================================================
// Program metadata for `picotool info`
// =============================================================================

#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"touchclock"),
    embassy_rp::binary_info::rp_program_description!(c"Touch-editable clock on a 128x64 OLED"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

// =============================================================================
// Main
// =============================================================================

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Touch clock starting...");

    let p = embassy_rp::init(Default::default());

    // LED off until the first greeting
    let mut led = RgbLed {
        pins: [
            Output::new(p.PIN_26, Level::High),
            Output::new(p.PIN_27, Level::High),
            Output::new(p.PIN_28, Level::High),
        ],
        state: LedState::new(),
    };

    let mut pads = PicoPads {
        pins: [
            Input::new(p.PIN_12, Pull::Up),
            Input::new(p.PIN_13, Pull::Up),
            Input::new(p.PIN_14, Pull::Up),
            Input::new(p.PIN_15, Pull::Up),
        ],
    };

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);

    let mut display =
        Ssd1306::new(I2CDisplayInterface::new(bus), DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();
    if display.init().is_err() {
        warn!("OLED init failed, running without a screen");
    }
    let mut canvas = Canvas::new(Oled(display));

    let ticks = EmbassyTicks;
    let mut controller = Controller::new(CLOCK_CONFIG, SoftClock::new(ticks, CLOCK_CONFIG.seed), ticks.now_ms());
    info!(
        "Clock ready: debounce={}ms loading={} greeting={}",
        CLOCK_CONFIG.debounce_ms, CLOCK_CONFIG.has_loading_screen, CLOCK_CONFIG.has_greeting
    );

    loop {
        let outcome = controller.step(&mut canvas, &mut pads, &mut led, ticks.now_ms());
        for action in &outcome.actions {
            info!("{} -> {}", action.label(), controller.context().cursor.current());
        }

        Timer::after_millis(controller.pace_ms()).await;
    }
}
