//! System time and sleeping
//!
//! Wall-clock readings are reported since the Unix epoch. A clock set before
//! the epoch is an error rather than a negative time.

pub mod sleep;
pub mod time;

pub use sleep::{sleep_milliseconds, sleep_seconds};
pub use time::{Stopwatch, TimeOfDay, now_milliseconds, now_seconds, time_of_day};
