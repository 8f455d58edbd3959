use std::cell::Cell;
use std::time::Instant;

use crate::traits::TimeSource;

/// Monotonic wall clock
/// Epoch is the moment the clock was created
#[derive(Debug)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since creation
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Clock {
    fn now(&self) -> f64 {
        self.elapsed()
    }
}

/// Hand-driven clock for deterministic frame cycles
#[derive(Debug, Default)]
pub struct ManualClock {
    time: Cell<f64>,
}

impl ManualClock {
    pub fn new(time: f64) -> Self {
        Self {
            time: Cell::new(time),
        }
    }

    pub fn set(&self, time: f64) {
        self.time.set(time);
    }

    pub fn advance(&self, seconds: f64) {
        self.time.set(self.time.get() + seconds);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> f64 {
        self.time.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::rc::Rc<T> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}
