//! Time management utilities

use std::time::Duration;

/// Fixed-interval timer driven by externally supplied elapsed time
///
/// Mirrors a repeating interval callback: time is accumulated and every full
/// interval that fits counts as one firing. Leftover time carries over to the
/// next call, so firings never drift.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    accumulated: Duration,
    total_fired: u64,
}

impl IntervalTimer {
    /// Create a new timer that fires every `interval`
    ///
    /// A zero interval is bumped to one millisecond so the timer cannot spin.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
            total_fired: 0,
        }
    }

    /// Create a timer from an interval in milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Advance the timer and return how many times it fired
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let mut fired = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fired += 1;
        }

        self.total_fired += u64::from(fired);
        fired
    }

    /// Get the firing interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time remaining until the next firing
    pub fn remaining(&self) -> Duration {
        self.interval - self.accumulated
    }

    /// Total number of firings since creation or the last reset
    pub fn total_fired(&self) -> u64 {
        self.total_fired
    }

    /// Reset accumulated time and the firing count
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.total_fired = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_does_not_fire_early() {
        let mut timer = IntervalTimer::from_millis(100);
        assert_eq!(timer.advance(Duration::from_millis(99)), 0);
        assert_eq!(timer.remaining(), Duration::from_millis(1));
    }

    #[test]
    fn test_timer_fires_multiple_times() {
        let mut timer = IntervalTimer::from_millis(10);
        assert_eq!(timer.advance(Duration::from_millis(35)), 3);
        assert_eq!(timer.advance(Duration::from_millis(5)), 1);
        assert_eq!(timer.total_fired(), 4);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let timer = IntervalTimer::new(Duration::ZERO);
        assert_eq!(timer.interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_reset() {
        let mut timer = IntervalTimer::from_millis(10);
        timer.advance(Duration::from_millis(25));
        timer.reset();
        assert_eq!(timer.total_fired(), 0);
        assert_eq!(timer.remaining(), Duration::from_millis(10));
    }
}
