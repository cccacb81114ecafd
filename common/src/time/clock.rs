//! Clock service contract and a free-running software implementation.
//!
//! The clock service owns the current date-time between frames. It keeps
//! running on its own; the UI only reads it and occasionally writes a whole
//! six-field value back.

use super::TimeValue;

/// Millisecond tick source (monotonic, never goes backwards).
pub trait Monotonic {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;
}

impl<M: Monotonic + ?Sized> Monotonic for &M {
    #[inline]
    fn now_ms(&self) -> u64 { (**self).now_ms() }
}

/// Real-time clock as seen by the UI: read the current value, write all fields at once.
pub trait ClockService {
    /// Current date-time.
    fn now(&self) -> TimeValue;

    /// Replace the current date-time. The clock keeps running from `value`.
    fn set(
        &mut self,
        value: TimeValue,
    );
}

/// Software clock advancing with a [`Monotonic`] tick.
///
/// Stores the last written value together with the tick it was written at;
/// reading adds the whole seconds elapsed since then. Writes keep the
/// sub-second phase of the running clock, so repeated edits in quick
/// succession do not hold the seconds back.
pub struct SoftClock<M> {
    ticks: M,
    anchor: TimeValue,
    anchor_ms: u64,
}

impl<M: Monotonic> SoftClock<M> {
    /// Start a clock at `start`, counting from the current tick.
    pub fn new(
        ticks: M,
        start: TimeValue,
    ) -> Self {
        let anchor_ms = ticks.now_ms();
        Self {
            ticks,
            anchor: start,
            anchor_ms,
        }
    }
}

impl<M: Monotonic> ClockService for SoftClock<M> {
    fn now(&self) -> TimeValue {
        let elapsed_secs = self.ticks.now_ms().saturating_sub(self.anchor_ms) / 1000;
        self.anchor.advanced_by_secs(elapsed_secs)
    }

    fn set(
        &mut self,
        value: TimeValue,
    ) {
        let now_ms = self.ticks.now_ms();
        let phase_ms = now_ms.saturating_sub(self.anchor_ms) % 1000;
        self.anchor = value;
        self.anchor_ms = now_ms - phase_ms;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
