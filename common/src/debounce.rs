//! Touch pad debouncing.
//!
//! Touch pads are polled as levels, so a finger resting on a pad reports
//! "pressed" on every poll. The debouncer rate-limits those reports: a press
//! is accepted only if enough time has passed since the last accepted one.
//!
//! # Policies
//!
//! - [`DebouncePolicy::Shared`]: one timestamp for all pads. Accepting any pad
//!   blocks every pad for the interval, which also throttles fast alternating
//!   presses.
//! - [`DebouncePolicy::PerInput`]: one timestamp per pad.
//!
//! A press is accepted only strictly after the interval has elapsed, so a
//! second press exactly `interval_ms` later is still rejected. An interval of
//! 0 accepts every press.

use crate::input::TouchPad;

/// Which presses share a debounce window.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebouncePolicy {
    #[default]
    Shared,
    PerInput,
}

/// Last-accepted timestamps for the tracked pads.
pub struct Debouncer {
    interval_ms: u64,
    policy: DebouncePolicy,
    last_accepted: [Option<u64>; TouchPad::ALL.len()],
}

impl Debouncer {
    pub const fn new(
        interval_ms: u64,
        policy: DebouncePolicy,
    ) -> Self {
        Self {
            interval_ms,
            policy,
            last_accepted: [None; TouchPad::ALL.len()],
        }
    }

    #[inline]
    pub const fn interval_ms(&self) -> u64 { self.interval_ms }

    /// Timestamp slot that `pad` reads and writes.
    #[inline]
    const fn slot(
        &self,
        pad: TouchPad,
    ) -> usize {
        match self.policy {
            DebouncePolicy::Shared => 0,
            DebouncePolicy::PerInput => pad.index(),
        }
    }

    /// Returns true if a press of `pad` at `now_ms` should be acted on.
    ///
    /// Records `now_ms` only when the press is accepted.
    pub fn accept(
        &mut self,
        pad: TouchPad,
        now_ms: u64,
    ) -> bool {
        let slot = self.slot(pad);
        if self.interval_ms > 0
            && let Some(last) = self.last_accepted[slot]
            && now_ms.saturating_sub(last) <= self.interval_ms
        {
            return false;
        }

        self.last_accepted[slot] = Some(now_ms);
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
