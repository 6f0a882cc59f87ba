//! Wall-clock time

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::error::{GhoError, GhoResult};

/// Seconds and microseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    /// Whole seconds
    pub seconds: u64,
    /// Microseconds within the current second
    pub microseconds: u64,
}

impl TimeOfDay {
    /// Total time in milliseconds
    pub fn as_milliseconds(&self) -> f64 {
        self.seconds as f64 * 1000.0 + self.microseconds as f64 / 1000.0
    }
}

impl From<Duration> for TimeOfDay {
    fn from(elapsed: Duration) -> Self {
        Self {
            seconds: elapsed.as_secs(),
            microseconds: u64::from(elapsed.subsec_micros()),
        }
    }
}

fn since_epoch() -> GhoResult<Duration> {
    SystemTime::now().duration_since(UNIX_EPOCH).map_err(|_| {
        tracing::debug!("system clock reads before the Unix epoch");
        GhoError::ClockBeforeEpoch
    })
}

/// Current time since the Unix epoch
pub fn time_of_day() -> GhoResult<TimeOfDay> {
    since_epoch().map(TimeOfDay::from)
}

/// Milliseconds since the Unix epoch, with microsecond resolution
pub fn now_milliseconds() -> GhoResult<f64> {
    Ok(time_of_day()?.as_milliseconds())
}

/// Seconds since the Unix epoch
pub fn now_seconds() -> GhoResult<f64> {
    Ok(now_milliseconds()? / 1000.0)
}

/// Monotonic elapsed-time measurement
///
/// ```rust
/// use gho::system::Stopwatch;
///
/// let stopwatch = Stopwatch::start();
/// assert!(stopwatch.elapsed_seconds() >= 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Starts measuring now
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since the stopwatch was started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed time in seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_milliseconds(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }

    /// Returns the elapsed time and starts over
    pub fn restart(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.started);
        self.started = now;
        elapsed
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_is_consistent() {
        let before = now_seconds().unwrap();
        let time = time_of_day().unwrap();
        let after = now_seconds().unwrap();

        assert!(time.microseconds < 1_000_000);
        // 2015-01-01
        assert!(time.seconds > 1_420_070_400);
        let seconds = time.as_milliseconds() / 1000.0;
        assert!(before - 1.0 <= seconds && seconds <= after + 1.0);
    }

    #[test]
    fn test_duration_split() {
        let time = TimeOfDay::from(Duration::from_micros(3_000_250));
        assert_eq!(
            time,
            TimeOfDay {
                seconds: 3,
                microseconds: 250
            }
        );
        assert_eq!(time.as_milliseconds(), 3000.25);
    }

    #[test]
    fn test_stopwatch_restart() {
        let mut stopwatch = Stopwatch::start();
        let first = stopwatch.restart();
        assert!(stopwatch.elapsed() <= first + Duration::from_secs(60));
    }
}
