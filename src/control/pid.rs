use super::clock::{Clock, MonotonicClock};
use serde::{Deserialize, Serialize};

/// Floor applied to the elapsed time between updates (seconds).
pub const MIN_DT: f64 = 1e-3;

/// Proportional, integral and derivative gains.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PidGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

impl Default for PidGains {
    fn default() -> Self {
        Self {
            kp: 0.4,
            ki: 0.01,
            kd: 0.1,
        }
    }
}

/// Controller memory, mutated by every update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PidState {
    pub integral: f64,
    pub last_error: f64,
    pub last_timestamp: f64,
}

/// PID controller driving a measured value toward `target`.
///
/// The integral term accumulates without bound: a persistent error (for
/// example a line that stays off-centre for a long time) keeps growing it and
/// the output with it. There is no anti-windup clamp.
#[derive(Clone, Debug)]
pub struct PidController<C: Clock = MonotonicClock> {
    gains: PidGains,
    target: f64,
    state: PidState,
    clock: C,
}

impl PidController<MonotonicClock> {
    /// Controller timed by the wall clock.
    pub fn new(gains: PidGains, target: f64) -> Self {
        Self::with_clock(gains, target, MonotonicClock::new())
    }
}

impl<C: Clock> PidController<C> {
    /// Controller timed by `clock`. The clock is read once here to set the
    /// reference timestamp for the first update.
    pub fn with_clock(gains: PidGains, target: f64, mut clock: C) -> Self {
        let state = PidState {
            last_timestamp: clock.now(),
            ..PidState::default()
        };
        Self {
            gains,
            target,
            state,
            clock,
        }
    }

    /// Correction for `measured`, timestamped by the controller's clock.
    pub fn update(&mut self, measured: f64) -> f64 {
        let now = self.clock.now();
        self.update_at(measured, now)
    }

    /// Correction for `measured` observed at `now` (seconds).
    pub fn update_at(&mut self, measured: f64, now: f64) -> f64 {
        let dt = (now - self.state.last_timestamp).max(MIN_DT);
        let error = self.target - measured;
        self.state.integral += error * dt;
        let derivative = (error - self.state.last_error) / dt;
        self.state.last_error = error;
        self.state.last_timestamp = now;

        self.gains.kp * error + self.gains.ki * self.state.integral + self.gains.kd * derivative
    }

    pub fn gains(&self) -> &PidGains {
        &self.gains
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn state(&self) -> &PidState {
        &self.state
    }
}
