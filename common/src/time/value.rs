//! Six-field date-time value with validated construction.
//!
//! A [`TimeValue`] can only be built through [`TimeValue::new`], which rejects
//! out-of-range fields, and every method returning a new value keeps all
//! fields in range. Code holding a `TimeValue` never has to re-check it.
//!
//! # Editing vs. Running
//!
//! Two kinds of arithmetic exist:
//!
//! | Operation | Carry into neighbours | Used by |
//! |-----------|----------------------|---------|
//! | [`TimeValue::adjusted`] | No, the field wraps on its own | Operator edits |
//! | [`TimeValue::advanced_by_secs`] | Yes, full calendar carry | Free-running clock |
//!
//! Editing Month or Year clamps Day to the length of the resulting month,
//! so 31 January becomes 29 February in a leap year rather than an invalid date.

use crate::cursor::SettingField;

// =============================================================================
// Calendar Helpers
// =============================================================================

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Days in one full Gregorian cycle. Advancing any date by this many days
/// lands on the same month and day exactly 400 years later.
const DAYS_PER_400_YEARS: u64 = 146_097;

/// Gregorian leap year rule.
#[inline]
pub const fn is_leap_year(year: u16) -> bool { (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 }

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(
    month: u8,
    year: u16,
) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// =============================================================================
// Adjustment Direction
// =============================================================================

/// Direction of a single-step field edit (+1 or -1).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Delta {
    /// Step the field up by one.
    Increment,
    /// Step the field down by one.
    Decrement,
}

impl Delta {
    /// The opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Increment => Self::Decrement,
            Self::Decrement => Self::Increment,
        }
    }
}

/// Step `value` within `min..=max`, wrapping to the opposite bound on overflow.
const fn wrap_step(
    value: u8,
    min: u8,
    max: u8,
    delta: Delta,
) -> u8 {
    match delta {
        Delta::Increment if value >= max => min,
        Delta::Increment => value + 1,
        Delta::Decrement if value <= min => max,
        Delta::Decrement => value - 1,
    }
}

const fn min_u8(
    a: u8,
    b: u8,
) -> u8 {
    if a < b { a } else { b }
}

// =============================================================================
// Time Value
// =============================================================================

/// A calendar date and wall-clock time with every field in range.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeValue {
    hour: u8,
    minute: u8,
    second: u8,
    day: u8,
    month: u8,
    year: u16,
}

impl TimeValue {
    /// Build a value, or `None` if any field is out of range.
    ///
    /// Day is checked against the length of `month` in `year`.
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
        day: u8,
        month: u8,
        year: u16,
    ) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        if month == 0 || month > 12 || day == 0 || day > days_in_month(month, year) {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
            day,
            month,
            year,
        })
    }

    #[inline]
    pub const fn hour(&self) -> u8 { self.hour }

    #[inline]
    pub const fn minute(&self) -> u8 { self.minute }

    #[inline]
    pub const fn second(&self) -> u8 { self.second }

    #[inline]
    pub const fn day(&self) -> u8 { self.day }

    #[inline]
    pub const fn month(&self) -> u8 { self.month }

    #[inline]
    pub const fn year(&self) -> u16 { self.year }

    /// Read one field by its setting identity.
    pub const fn get(
        &self,
        field: SettingField,
    ) -> u16 {
        match field {
            SettingField::Hour => self.hour as u16,
            SettingField::Minute => self.minute as u16,
            SettingField::Second => self.second as u16,
            SettingField::Day => self.day as u16,
            SettingField::Month => self.month as u16,
            SettingField::Year => self.year,
        }
    }

    /// Step one field by one, leaving every other field untouched.
    ///
    /// Hour wraps 23↔0, Minute and Second wrap 59↔0, Month wraps 12↔1 and Day
    /// wraps between 1 and the length of the current month. Year saturates at
    /// 0 and `u16::MAX`. Month and Year edits clamp Day afterwards.
    ///
    /// Stepping one way and back restores the value, except for a Year step
    /// that hits a saturation bound and a Month or Year step that clamped Day.
    #[must_use]
    pub const fn adjusted(
        self,
        field: SettingField,
        delta: Delta,
    ) -> Self {
        let mut next = self;
        match field {
            SettingField::Hour => next.hour = wrap_step(self.hour, 0, 23, delta),
            SettingField::Minute => next.minute = wrap_step(self.minute, 0, 59, delta),
            SettingField::Second => next.second = wrap_step(self.second, 0, 59, delta),
            SettingField::Day => next.day = wrap_step(self.day, 1, days_in_month(self.month, self.year), delta),
            SettingField::Month => {
                next.month = wrap_step(self.month, 1, 12, delta);
                next.day = min_u8(self.day, days_in_month(next.month, self.year));
            }
            SettingField::Year => {
                next.year = match delta {
                    Delta::Increment => self.year.saturating_add(1),
                    Delta::Decrement => self.year.saturating_sub(1),
                };
                next.day = min_u8(self.day, days_in_month(self.month, next.year));
            }
        }
        next
    }

    /// Advance by `secs` seconds with full carry through every field.
    ///
    /// Year saturates at `u16::MAX`; months keep cycling past that point.
    #[must_use]
    pub fn advanced_by_secs(
        self,
        secs: u64,
    ) -> Self {
        let secs_of_day =
            u64::from(self.hour) * SECS_PER_HOUR + u64::from(self.minute) * SECS_PER_MINUTE + u64::from(self.second);
        let total = secs_of_day.saturating_add(secs);
        let mut days = total / SECS_PER_DAY;
        let rem = total % SECS_PER_DAY;

        let mut next = self;
        next.hour = (rem / SECS_PER_HOUR) as u8;
        next.minute = ((rem % SECS_PER_HOUR) / SECS_PER_MINUTE) as u8;
        next.second = (rem % SECS_PER_MINUTE) as u8;

        // Skip whole Gregorian cycles first so large jumps stay cheap
        while days >= DAYS_PER_400_YEARS && next.year <= u16::MAX - 400 {
            days -= DAYS_PER_400_YEARS;
            next.year += 400;
        }

        while days > 0 {
            let left_in_month = u64::from(days_in_month(next.month, next.year) - next.day);
            if days <= left_in_month {
                next.day += days as u8;
                break;
            }
            days -= left_in_month + 1;
            next.day = 1;
            if next.month == 12 {
                next.month = 1;
                next.year = next.year.saturating_add(1);
            } else {
                next.month += 1;
            }
        }

        // Only reachable when the year saturated on a leap day
        next.day = min_u8(next.day, days_in_month(next.month, next.year));
        next
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
