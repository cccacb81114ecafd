//! Cyclic selection of the editable date-time field.
//!
//! The cursor steps through the fields with the "next field" pad and wraps
//! around at both ends.
//!
//! # Fields
//!
//! Hour → Minute → Second → Day → Month → Year → Hour

/// The date-time component currently editable.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingField {
    #[default]
    Hour,
    Minute,
    Second,
    Day,
    Month,
    Year,
}

impl SettingField {
    /// All fields in cycle order.
    pub const ALL: [Self; 6] = [Self::Hour, Self::Minute, Self::Second, Self::Day, Self::Month, Self::Year];

    /// Human-readable names, indexed like [`Self::ALL`].
    const LABELS: [&'static str; 6] = ["Hour", "Minute", "Second", "Day", "Month", "Year"];

    /// Position in cycle order.
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Name shown after "Setting: " on screen.
    #[inline]
    pub const fn label(self) -> &'static str { Self::LABELS[self.index()] }

    /// Following field, wrapping Year → Hour.
    #[inline]
    pub const fn next(self) -> Self { Self::ALL[(self.index() + 1) % Self::ALL.len()] }

    /// Preceding field, wrapping Hour → Year.
    #[inline]
    pub const fn previous(self) -> Self { Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()] }
}

/// Holds the active [`SettingField`]. Starts at [`SettingField::Hour`].
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct SettingCursor {
    current: SettingField,
}

impl SettingCursor {
    pub const fn new() -> Self {
        Self {
            current: SettingField::Hour,
        }
    }

    #[inline]
    pub const fn current(&self) -> SettingField { self.current }

    /// Move to the next field.
    #[inline]
    pub fn next(&mut self) { self.current = self.current.next(); }

    /// Move to the previous field.
    #[inline]
    pub fn previous(&mut self) { self.current = self.current.previous(); }
}

// =============================================================================
// Unit Tests
// =============================================================================
