//! Hook scheduling
//!
//! The game exposes four hooks that run at independent fixed intervals.
//! [`HookSchedule`] keeps one [`IntervalTimer`] per hook and turns elapsed
//! wall time into the ordered list of hook invocations that are due.

use std::time::Duration;

use void_engine::foundation::time::IntervalTimer;

use crate::config::ScheduleConfig;

/// A schedulable game hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Integrate motion, rotation and lifetimes
    AutoMove,
    /// Run collision tests
    Collision,
    /// Ramp difficulty and top up asteroids
    Difficulty,
    /// Render a frame
    Draw,
}

impl Hook {
    /// All hooks in dispatch order
    pub const ALL: [Self; 4] = [Self::AutoMove, Self::Collision, Self::Difficulty, Self::Draw];
}

/// Fixed-interval timers for every hook
#[derive(Debug, Clone)]
pub struct HookSchedule {
    timers: [(Hook, IntervalTimer); 4],
}

impl HookSchedule {
    /// Build a schedule from configured intervals
    pub fn new(config: &ScheduleConfig) -> Self {
        Self {
            timers: [
                (Hook::AutoMove, IntervalTimer::from_millis(config.auto_move_ms)),
                (Hook::Collision, IntervalTimer::from_millis(config.collision_ms)),
                (Hook::Difficulty, IntervalTimer::from_millis(config.difficulty_ms)),
                (Hook::Draw, IntervalTimer::from_millis(config.draw_ms)),
            ],
        }
    }

    /// Advance every timer and return the due hooks
    ///
    /// Hooks are grouped in [`Hook::ALL`] order; a hook due several times
    /// appears that many times in a row.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Hook> {
        let mut due = Vec::new();
        for (hook, timer) in &mut self.timers {
            let fired = timer.advance(elapsed);
            due.extend(std::iter::repeat(*hook).take(fired as usize));
        }
        due
    }

    /// Interval of one hook
    pub fn interval(&self, hook: Hook) -> Duration {
        self.timers
            .iter()
            .find(|(candidate, _)| *candidate == hook)
            .map_or(Duration::ZERO, |(_, timer)| timer.interval())
    }

    /// Total invocations of one hook since creation or the last reset
    pub fn total_fired(&self, hook: Hook) -> u64 {
        self.timers
            .iter()
            .find(|(candidate, _)| *candidate == hook)
            .map_or(0, |(_, timer)| timer.total_fired())
    }

    /// Reset every timer
    pub fn reset(&mut self) {
        for (_, timer) in &mut self.timers {
            timer.reset();
        }
    }
}

impl Default for HookSchedule {
    fn default() -> Self {
        Self::new(&ScheduleConfig::default())
    }
}
