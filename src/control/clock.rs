use std::time::Instant;

/// Source of timestamps in seconds.
pub trait Clock {
    /// Current time in seconds. Successive reads must not decrease.
    fn now(&mut self) -> f64;
}

/// Wall-clock seconds elapsed since the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Deterministic clock: the first read returns `start`, each later read adds
/// `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStepClock {
    next: f64,
    step: f64,
}

impl FixedStepClock {
    pub fn new(start: f64, step: f64) -> Self {
        Self { next: start, step }
    }
}

impl Clock for FixedStepClock {
    fn now(&mut self) -> f64 {
        let t = self.next;
        self.next += self.step;
        t
    }
}
