//! Date-time values and the clock service they live in.
//!
//! - `value`: [`TimeValue`], calendar helpers and per-field wraparound arithmetic
//! - `clock`: [`ClockService`] contract and the free-running [`SoftClock`]

mod clock;
mod value;

pub use clock::{ClockService, Monotonic, SoftClock};
pub use value::{Delta, TimeValue, days_in_month, is_leap_year};
