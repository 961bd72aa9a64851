use std::time::Duration;

/// Fixed rate timer - fires at a changeable frequency
///
/// Accumulates frame deltas and fires at most once per tick, so a long stall
/// does not turn into a burst of catch-up steps.
#[derive(Debug, Clone, Copy)]
pub struct StepTimer {
    interval: f64,
    accumulator: f64,
}

impl StepTimer {
    /// Create timer that fires at given frequency
    pub fn new(hz: f64) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Change the frequency, keeping accumulated time
    pub fn set_rate(&mut self, hz: f64) {
        self.interval = 1.0 / hz;
    }

    pub fn rate(&self) -> f64 {
        1.0 / self.interval
    }

    /// Update with delta in seconds, returns true if should fire
    pub fn tick(&mut self, delta: f64) -> bool {
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            self.accumulator = (self.accumulator - self.interval).min(self.interval);
            true
        } else {
            false
        }
    }

    /// Time left until the next fire
    pub fn remaining(&self) -> Duration {
        Duration::from_secs_f64((self.interval - self.accumulator).max(0.0))
    }
}
