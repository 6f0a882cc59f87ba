//! Blocking sleeps

use std::thread;
use std::time::Duration;

/// Blocks the current thread for `seconds` seconds
pub fn sleep_seconds(seconds: u32) {
    tracing::trace!(seconds, "sleeping");
    thread::sleep(Duration::from_secs(u64::from(seconds)));
}

/// Blocks the current thread for `milliseconds` milliseconds
pub fn sleep_milliseconds(milliseconds: u32) {
    tracing::trace!(milliseconds, "sleeping");
    thread::sleep(Duration::from_millis(u64::from(milliseconds)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::Stopwatch;

    #[test]
    fn test_sleep_milliseconds_waits() {
        let stopwatch = Stopwatch::start();
        sleep_milliseconds(20);
        assert!(stopwatch.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_zero_sleep_returns() {
        sleep_seconds(0);
        sleep_milliseconds(0);
    }
}
