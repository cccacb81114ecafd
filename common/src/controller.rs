//! The clock's main loop body.
//!
//! The platform loop calls [`Controller::step`] forever, sleeping
//! [`Controller::pace_ms`] between calls. Each step:
//!
//! 1. While the loading screen is up, draws "Loading..." and returns without
//!    reading any pad.
//! 2. Draws the clock frame (time, date, optional greeting and label).
//! 3. Polls the four pads in order; every press the debouncer accepts is
//!    mapped through the keymap and dispatched.
//!
//! # State
//!
//! Two independent axes, both held in [`ClockContext`]:
//!
//! - Active field: Hour → Minute → Second → Day → Month → Year → Hour
//! - Label mode: Shown ↔ Hidden
//!
//! plus a one-way Loading → Running phase that is never re-entered.

use heapless::Vec;

use crate::config::ClockConfig;
use crate::cursor::SettingCursor;
use crate::debounce::Debouncer;
use crate::greeting::{DayPeriod, Indicator, show_period};
use crate::input::{Action, TouchInput, TouchPad};
use crate::render::{ClockView, LabelMode, draw_clock_frame, draw_loading_frame};
use crate::surface::Surface;
use crate::time::{ClockService, Delta};
use crate::time_model::TimeModel;

/// Everything the pads can change.
pub struct ClockContext<C> {
    pub time: TimeModel<C>,
    pub cursor: SettingCursor,
    pub label: LabelMode,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Loading { since_ms: u64 },
    Running,
}

/// What happened during one [`Controller::step`].
#[derive(Default, Debug)]
pub struct StepOutcome {
    /// The loading frame was drawn and pads were not polled.
    pub loading: bool,
    /// Actions applied this step, in poll order.
    pub actions: Vec<Action, 4>,
}

/// Owns the clock context, debouncer and phase; drives one iteration at a time.
pub struct Controller<C> {
    config: ClockConfig,
    context: ClockContext<C>,
    debouncer: Debouncer,
    phase: Phase,
    /// Period last pushed to the indicator.
    shown_period: Option<DayPeriod>,
}

impl<C: ClockService> Controller<C> {
    /// Seed `clock` with `config.seed` and start in the loading phase if enabled.
    pub fn new(
        config: ClockConfig,
        clock: C,
        now_ms: u64,
    ) -> Self {
        let mut time = TimeModel::new(clock);
        time.set(config.seed);

        let phase = if config.has_loading_screen {
            Phase::Loading { since_ms: now_ms }
        } else {
            Phase::Running
        };

        Self {
            config,
            context: ClockContext {
                time,
                cursor: SettingCursor::new(),
                label: LabelMode::Shown,
            },
            debouncer: Debouncer::new(config.debounce_ms, config.debounce_policy),
            phase,
            shown_period: None,
        }
    }

    #[inline]
    pub const fn config(&self) -> &ClockConfig { &self.config }

    #[inline]
    pub const fn context(&self) -> &ClockContext<C> { &self.context }

    #[inline]
    pub const fn context_mut(&mut self) -> &mut ClockContext<C> { &mut self.context }

    /// Delay the platform loop should wait after each step.
    #[inline]
    pub const fn pace_ms(&self) -> u64 { self.config.pace_ms }

    #[inline]
    pub const fn is_loading(&self) -> bool { matches!(self.phase, Phase::Loading { .. }) }

    /// Run one loop iteration at time `now_ms`.
    pub fn step<S, T, I>(
        &mut self,
        surface: &mut S,
        touch: &mut T,
        indicator: &mut I,
        now_ms: u64,
    ) -> StepOutcome
    where
        S: Surface + ?Sized,
        T: TouchInput + ?Sized,
        I: Indicator + ?Sized,
    {
        let mut outcome = StepOutcome::default();

        if let Phase::Loading { since_ms } = self.phase {
            if now_ms.saturating_sub(since_ms) < self.config.loading_ms {
                draw_loading_frame(surface);
                outcome.loading = true;
                return outcome;
            }
            self.phase = Phase::Running;
        }

        self.render(surface, indicator);

        for pad in TouchPad::ALL {
            if touch.is_pressed(pad) && self.debouncer.accept(pad, now_ms) {
                let action = self.config.keymap.action(pad);
                if self.dispatch(action) {
                    outcome.actions.push(action).ok();
                }
            }
        }

        outcome
    }

    /// Apply one action. Returns false if the action is disabled by the config.
    pub fn dispatch(
        &mut self,
        action: Action,
    ) -> bool {
        let field = self.context.cursor.current();
        match action {
            Action::Increment => self.context.time.adjust(field, Delta::Increment),
            Action::Decrement => self.context.time.adjust(field, Delta::Decrement),
            Action::NextField => self.context.cursor.next(),
            Action::PreviousField => self.context.cursor.previous(),
            Action::ToggleLabel if self.config.label_togglable => self.context.label = self.context.label.toggle(),
            Action::ToggleLabel => return false,
        }
        true
    }

    fn render<S, I>(
        &mut self,
        surface: &mut S,
        indicator: &mut I,
    ) where
        S: Surface + ?Sized,
        I: Indicator + ?Sized,
    {
        let time = self.context.time.snapshot();

        let greeting = if self.config.has_greeting {
            let period = DayPeriod::from_hour(time.hour());
            if self.shown_period != Some(period) {
                show_period(indicator, period);
                self.shown_period = Some(period);
            }
            Some(period.greeting())
        } else {
            None
        };

        let view = ClockView {
            time,
            field: self.context.cursor.current(),
            label: self.context.label,
            greeting,
        };
        draw_clock_frame(surface, &view);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use embedded_graphics::pixelcolor::Rgb888;

    use super::*;
    use crate::colors::{AFTERNOON_AMBER, EVENING_BLUE};
    use crate::cursor::SettingField;
    use crate::greeting::NoIndicator;
    use crate::input::Keymap;
    use crate::render::tests::RecordingSurface;
    use crate::time::{Monotonic, SoftClock, TimeValue};

    struct FakeTicks(Cell<u64>);

    impl Monotonic for FakeTicks {
        fn now_ms(&self) -> u64 { self.0.get() }
    }

    /// Pads held down for the next poll.
    #[derive(Default)]
    struct ScriptedPads {
        held: [bool; 4],
    }

    impl ScriptedPads {
        fn press(pad: TouchPad) -> Self {
            let mut pads = Self::default();
            pads.held[pad.index()] = true;
            pads
        }
    }

    impl TouchInput for ScriptedPads {
        fn is_pressed(
            &mut self,
            pad: TouchPad,
        ) -> bool {
            self.held[pad.index()]
        }
    }

    #[derive(Default)]
    struct ColorLog {
        shows: u32,
        color: Option<Rgb888>,
    }

    impl Indicator for ColorLog {
        fn clear(&mut self) { self.color = None; }

        fn set_brightness(
            &mut self,
            _level: u8,
        ) {
        }

        fn set_color(
            &mut self,
            _channel: usize,
            color: Rgb888,
        ) {
            self.color = Some(color);
        }

        fn show(&mut self) { self.shows += 1; }
    }

    fn controller(
        config: ClockConfig,
        ticks: &FakeTicks,
    ) -> Controller<SoftClock<&FakeTicks>> {
        let clock = SoftClock::new(ticks, config.seed);
        Controller::new(config, clock, ticks.now_ms())
    }

    fn time_line(surface: &RecordingSurface) -> &str { surface.texts()[surface.texts().len() - 2] }

    #[test]
    fn test_loading_frame_then_clock() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::GREETER, &ticks);
        let mut surface = RecordingSurface::default();
        let mut indicator = ColorLog::default();

        let outcome = controller.step(&mut surface, &mut ScriptedPads::default(), &mut indicator, 0);
        assert!(outcome.loading);
        assert_eq!(surface.texts(), ["Loading..."]);

        let outcome = controller.step(&mut surface, &mut ScriptedPads::default(), &mut indicator, 1_999);
        assert!(outcome.loading);

        let outcome = controller.step(&mut surface, &mut ScriptedPads::default(), &mut indicator, 2_000);
        assert!(!outcome.loading);
        assert!(!controller.is_loading());
        assert!(surface.find("Good Afternoon!").is_some());
        assert_eq!(surface.frames_ended, 3);
    }

    #[test]
    fn test_loading_ignores_pads() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::GREETER, &ticks);
        let mut surface = RecordingSurface::default();

        let outcome = controller.step(
            &mut surface,
            &mut ScriptedPads::press(TouchPad::Tb1a),
            &mut NoIndicator,
            100,
        );
        assert!(outcome.actions.is_empty());
        assert_eq!(controller.context().time.get(SettingField::Hour), 15);
    }

    #[test]
    fn test_loading_is_never_reentered() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::GREETER, &ticks);
        let mut surface = RecordingSurface::default();

        controller.step(&mut surface, &mut ScriptedPads::default(), &mut NoIndicator, 2_500);
        assert!(!controller.is_loading());
        // A tick source that restarted must not bring the loading screen back
        let outcome = controller.step(&mut surface, &mut ScriptedPads::default(), &mut NoIndicator, 0);
        assert!(!outcome.loading);
    }

    #[test]
    fn test_plain_starts_running() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::PLAIN, &ticks);
        let mut surface = RecordingSurface::default();

        let outcome = controller.step(&mut surface, &mut ScriptedPads::default(), &mut NoIndicator, 0);
        assert!(!outcome.loading);
        assert_eq!(surface.texts(), ["Setting: ", "Hour", "15:11:24", "27|9|2023"]);
    }

    #[test]
    fn test_end_to_end_edit_sequence() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::GREETER, &ticks);

        assert!(controller.dispatch(Action::Increment));
        assert_eq!(controller.context().time.get(SettingField::Hour), 16);

        assert!(controller.dispatch(Action::NextField));
        assert_eq!(controller.context().cursor.current(), SettingField::Minute);

        assert!(controller.dispatch(Action::Decrement));
        assert_eq!(controller.context().time.get(SettingField::Minute), 10);

        let mut surface = RecordingSurface::default();
        controller.step(&mut surface, &mut ScriptedPads::default(), &mut NoIndicator, 5_000);
        assert_eq!(time_line(&surface), "16:10:24");
        assert!(surface.find("Minute").is_some());
    }

    #[test]
    fn test_pads_dispatch_through_keymap() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::PLAIN, &ticks);
        let mut surface = RecordingSurface::default();

        let outcome = controller.step(&mut surface, &mut ScriptedPads::press(TouchPad::Tb1a), &mut NoIndicator, 0);
        assert_eq!(outcome.actions.as_slice(), [Action::Increment]);
        assert_eq!(controller.context().time.get(SettingField::Hour), 16);

        // Toggle pad is inert while the label cannot be hidden
        let outcome = controller.step(&mut surface, &mut ScriptedPads::press(TouchPad::Tb2b), &mut NoIndicator, 200);
        assert!(outcome.actions.is_empty());
        assert_eq!(controller.context().label, LabelMode::Shown);
    }

    #[test]
    fn test_custom_keymap_steps_back() {
        let ticks = FakeTicks(Cell::new(0));
        let config = ClockConfig {
            keymap: Keymap::new([Action::Increment, Action::Decrement, Action::NextField, Action::PreviousField]),
            ..ClockConfig::PLAIN
        };
        let mut controller = controller(config, &ticks);
        let mut surface = RecordingSurface::default();

        let outcome = controller.step(&mut surface, &mut ScriptedPads::press(TouchPad::Tb2b), &mut NoIndicator, 0);
        assert_eq!(outcome.actions.as_slice(), [Action::PreviousField]);
        assert_eq!(controller.context().cursor.current(), SettingField::Year);
    }

    #[test]
    fn test_toggle_pad_hides_and_shows_label() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::GREETER, &ticks);
        let mut surface = RecordingSurface::default();

        let outcome = controller.step(&mut surface, &mut ScriptedPads::press(TouchPad::Tb2b), &mut NoIndicator, 2_000);
        assert_eq!(outcome.actions.as_slice(), [Action::ToggleLabel]);
        assert_eq!(controller.context().label, LabelMode::Hidden);

        controller.step(&mut surface, &mut ScriptedPads::default(), &mut NoIndicator, 2_200);
        assert!(surface.find("Setting: ").is_none());
        assert_eq!(time_line(&surface), "15:11:24");

        let outcome = controller.step(&mut surface, &mut ScriptedPads::press(TouchPad::Tb2b), &mut NoIndicator, 2_400);
        assert_eq!(outcome.actions.as_slice(), [Action::ToggleLabel]);
        controller.step(&mut surface, &mut ScriptedPads::default(), &mut NoIndicator, 2_600);
        assert!(surface.find("Setting: ").is_some());
    }

    #[test]
    fn test_render_happens_before_dispatch() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::PLAIN, &ticks);
        let mut surface = RecordingSurface::default();

        controller.step(&mut surface, &mut ScriptedPads::press(TouchPad::Tb1a), &mut NoIndicator, 0);
        assert_eq!(time_line(&surface), "15:11:24");
        controller.step(&mut surface, &mut ScriptedPads::default(), &mut NoIndicator, 200);
        assert_eq!(time_line(&surface), "16:11:24");
    }

    #[test]
    fn test_shared_debounce_accepts_one_pad_per_window() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::GREETER, &ticks);
        let mut surface = RecordingSurface::default();
        let mut pads = ScriptedPads {
            held: [true, false, true, false],
        };

        let outcome = controller.step(&mut surface, &mut pads, &mut NoIndicator, 2_000);
        assert_eq!(outcome.actions.as_slice(), [Action::Increment]);

        let outcome = controller.step(&mut surface, &mut pads, &mut NoIndicator, 2_050);
        assert!(outcome.actions.is_empty());

        let outcome = controller.step(&mut surface, &mut pads, &mut NoIndicator, 2_200);
        assert_eq!(outcome.actions.as_slice(), [Action::Increment]);
    }

    #[test]
    fn test_no_debounce_accepts_every_pad() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::PLAIN, &ticks);
        let mut surface = RecordingSurface::default();
        let mut pads = ScriptedPads {
            held: [true, true, true, false],
        };

        let outcome = controller.step(&mut surface, &mut pads, &mut NoIndicator, 0);
        assert_eq!(outcome.actions.as_slice(), [Action::Increment, Action::Decrement, Action::NextField]);
        assert_eq!(controller.context().time.get(SettingField::Hour), 15);
        assert_eq!(controller.context().cursor.current(), SettingField::Minute);
    }

    #[test]
    fn test_toggle_label() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::GREETER, &ticks);
        assert!(controller.dispatch(Action::ToggleLabel));
        assert_eq!(controller.context().label, LabelMode::Hidden);

        let mut surface = RecordingSurface::default();
        controller.step(&mut surface, &mut ScriptedPads::default(), &mut NoIndicator, 3_000);
        assert!(surface.find("Setting: ").is_none());
    }

    #[test]
    fn test_toggle_label_disabled() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::PLAIN, &ticks);
        assert!(!controller.dispatch(Action::ToggleLabel));
        assert_eq!(controller.context().label, LabelMode::Shown);
    }

    #[test]
    fn test_indicator_updates_on_period_change_only() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::GREETER, &ticks);
        let mut surface = RecordingSurface::default();
        let mut indicator = ColorLog::default();

        controller.step(&mut surface, &mut ScriptedPads::default(), &mut indicator, 2_000);
        controller.step(&mut surface, &mut ScriptedPads::default(), &mut indicator, 2_200);
        assert_eq!(indicator.shows, 1);
        assert_eq!(indicator.color, Some(AFTERNOON_AMBER));

        let evening = TimeValue::new(18, 0, 0, 27, 9, 2023).unwrap();
        controller.context_mut().time.set(evening);
        controller.step(&mut surface, &mut ScriptedPads::default(), &mut indicator, 2_400);
        assert_eq!(indicator.shows, 2);
        assert_eq!(indicator.color, Some(EVENING_BLUE));
        assert!(surface.find("Good Evening!").is_some());
    }

    #[test]
    fn test_plain_never_touches_indicator() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::PLAIN, &ticks);
        let mut surface = RecordingSurface::default();
        let mut indicator = ColorLog::default();

        controller.step(&mut surface, &mut ScriptedPads::default(), &mut indicator, 0);
        assert_eq!(indicator.shows, 0);
    }

    #[test]
    fn test_clock_keeps_running_between_frames() {
        let ticks = FakeTicks(Cell::new(0));
        let mut controller = controller(ClockConfig::PLAIN, &ticks);
        let mut surface = RecordingSurface::default();

        ticks.0.set(3_000);
        controller.step(&mut surface, &mut ScriptedPads::default(), &mut NoIndicator, 3_000);
        assert_eq!(time_line(&surface), "15:11:27");
    }
}
