//! Field-level editing of the clock service's date-time.
//!
//! [`TimeModel`] is the only writer of the clock during normal operation.
//! Every edit reads the current value, steps a single field and writes all
//! six fields back in one [`ClockService::set`], matching the service's
//! all-at-once write contract.

use crate::cursor::SettingField;
use crate::time::{ClockService, Delta, TimeValue};

/// Editable view of a [`ClockService`].
pub struct TimeModel<C> {
    clock: C,
}

impl<C: ClockService> TimeModel<C> {
    pub const fn new(clock: C) -> Self { Self { clock } }

    /// Current value of one field.
    #[inline]
    pub fn get(
        &self,
        field: SettingField,
    ) -> u16 {
        self.clock.now().get(field)
    }

    /// Step `field` by one in `delta`'s direction. See [`TimeValue::adjusted`]
    /// for the wraparound rules.
    pub fn adjust(
        &mut self,
        field: SettingField,
        delta: Delta,
    ) {
        let next = self.clock.now().adjusted(field, delta);
        self.clock.set(next);
    }

    /// All six fields at once.
    #[inline]
    pub fn snapshot(&self) -> TimeValue { self.clock.now() }

    /// Overwrite the whole value.
    #[inline]
    pub fn set(
        &mut self,
        value: TimeValue,
    ) {
        self.clock.set(value);
    }

    #[inline]
    pub const fn clock(&self) -> &C { &self.clock }

    #[inline]
    pub const fn clock_mut(&mut self) -> &mut C { &mut self.clock }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Clock that never advances and counts writes.
    struct StoppedClock {
        value: TimeValue,
        writes: u32,
    }

    impl ClockService for StoppedClock {
        fn now(&self) -> TimeValue { self.value }

        fn set(
            &mut self,
            value: TimeValue,
        ) {
            self.value = value;
            self.writes += 1;
        }
    }

    fn model(value: TimeValue) -> TimeModel<StoppedClock> { TimeModel::new(StoppedClock { value, writes: 0 }) }

    #[test]
    fn test_get_reads_clock() {
        let model = model(TimeValue::new(15, 11, 24, 27, 9, 2023).unwrap());
        assert_eq!(model.get(SettingField::Hour), 15);
        assert_eq!(model.get(SettingField::Year), 2023);
    }

    #[test]
    fn test_adjust_writes_once() {
        let mut model = model(TimeValue::new(15, 11, 24, 27, 9, 2023).unwrap());
        model.adjust(SettingField::Minute, Delta::Increment);
        assert_eq!(model.get(SettingField::Minute), 12);
        assert_eq!(model.clock().writes, 1);
    }

    #[test]
    fn test_adjust_touches_only_named_field() {
        let start = TimeValue::new(15, 11, 59, 27, 9, 2023).unwrap();
        let mut model = model(start);
        model.adjust(SettingField::Second, Delta::Increment);
        let snapshot = model.snapshot();
        assert_eq!(snapshot.second(), 0);
        for field in [SettingField::Hour, SettingField::Minute, SettingField::Day, SettingField::Month, SettingField::Year] {
            assert_eq!(snapshot.get(field), start.get(field));
        }
    }

    #[test]
    fn test_hour_wrap_through_model() {
        let mut model = model(TimeValue::new(23, 0, 0, 1, 1, 2023).unwrap());
        model.adjust(SettingField::Hour, Delta::Increment);
        assert_eq!(model.get(SettingField::Hour), 0);
        model.adjust(SettingField::Hour, Delta::Decrement);
        assert_eq!(model.get(SettingField::Hour), 23);
    }

    #[test]
    fn test_february_31_cannot_happen() {
        let mut model = model(TimeValue::new(0, 0, 0, 31, 1, 2023).unwrap());
        model.adjust(SettingField::Month, Delta::Increment);
        let snapshot = model.snapshot();
        assert_eq!(snapshot.month(), 2);
        assert_eq!(snapshot.day(), 28);
    }
}
