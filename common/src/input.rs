//! Touch pads, the actions they trigger, and the mapping between the two.
//!
//! # Default Pad Controls
//!
//! - **TB1A**: Increment the active field
//! - **TB2A**: Decrement the active field
//! - **TB1B**: Select the next field
//! - **TB2B**: Show/hide the "Setting:" label

/// The four logical touch inputs, in poll order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchPad {
    Tb1a,
    Tb2a,
    Tb1b,
    Tb2b,
}

impl TouchPad {
    /// All pads in the order the controller polls them.
    pub const ALL: [Self; 4] = [Self::Tb1a, Self::Tb2a, Self::Tb1b, Self::Tb2b];

    #[inline]
    pub const fn index(self) -> usize { self as usize }
}

/// Something a touch pad can make the clock do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Step the active field up.
    Increment,
    /// Step the active field down.
    Decrement,
    /// Move the cursor to the next field.
    NextField,
    /// Move the cursor to the previous field.
    PreviousField,
    /// Flip between showing and hiding the setting label.
    ToggleLabel,
}

impl Action {
    /// Short name for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::NextField => "next field",
            Self::PreviousField => "previous field",
            Self::ToggleLabel => "toggle label",
        }
    }
}

/// Pad → action table, indexed by [`TouchPad::index`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Keymap([Action; 4]);

impl Keymap {
    /// Leanbot pad layout: A pads edit the value, B pads navigate.
    pub const DEFAULT: Self = Self([Action::Increment, Action::Decrement, Action::NextField, Action::ToggleLabel]);

    pub const fn new(actions: [Action; 4]) -> Self { Self(actions) }

    /// Action bound to `pad`.
    #[inline]
    pub const fn action(&self, pad: TouchPad) -> Action { self.0[pad.index()] }

    /// True when no two pads share an action.
    pub const fn is_bijective(&self) -> bool {
        let mut i = 0;
        while i < self.0.len() {
            let mut j = i + 1;
            while j < self.0.len() {
                if self.0[i] as u8 == self.0[j] as u8 {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    /// Pad bound to `action`, if any.
    pub fn pad_for(
        &self,
        action: Action,
    ) -> Option<TouchPad> {
        TouchPad::ALL.into_iter().find(|pad| self.action(*pad) == action)
    }
}

impl Default for Keymap {
    fn default() -> Self { Self::DEFAULT }
}

/// Polled touch input source.
pub trait TouchInput {
    /// Whether `pad` is being touched right now.
    fn is_pressed(
        &mut self,
        pad: TouchPad,
    ) -> bool;
}

// =============================================================================
// Unit Tests
// =============================================================================
