//! Per-run line follower tying seed selection, tracing and steering together.
//!
//! The [`LineFollower`] owns everything that persists across frames: the
//! tracker state (last known line x) and the PID controller. Feed it one mask
//! per frame and it returns a [`FrameReport`].
//!
//! ```
//! use line_tracker::control::FixedStepClock;
//! use line_tracker::image::GrayImageU8;
//! use line_tracker::{FollowerParams, LineFollower};
//!
//! let mut mask = GrayImageU8::zeros(320, 160);
//! mask.fill_rect(150, 0, 160, 160, 255);
//! let clock = FixedStepClock::new(0.0, 1.0 / 30.0);
//! let mut follower = LineFollower::with_clock(FollowerParams::default(), 320, clock);
//! let report = follower.process(&mask.as_view());
//! assert!(report.seed.is_locked());
//! assert_eq!(report.measured_x, 154);
//! ```

use crate::control::{Clock, MonotonicClock, PidController, PidGains, PidState};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::TimingBreakdown;
use crate::image::ImageU8;
use crate::seed::{selector_for, SeedMode, SeedOptions, SeedOverrides, SeedSelector, TrackerState};
use crate::tracer::{LineTracer, TraceOptions};
use crate::types::FrameReport;
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Configuration of the whole per-frame pipeline.
///
/// `seed` overrides individual fields of the search parameters that
/// `seed_mode` defaults to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FollowerParams {
    pub trace: TraceOptions,
    pub seed: SeedOverrides,
    pub seed_mode: SeedMode,
    pub pid: PidGains,
}

impl FollowerParams {
    /// Seed search parameters after applying overrides to the mode defaults.
    pub fn seed_options(&self) -> SeedOptions {
        self.seed.apply(self.seed_mode.default_options())
    }
}

pub struct LineFollower<C: Clock = MonotonicClock> {
    width: usize,
    tracer: LineTracer,
    selector: Box<dyn SeedSelector>,
    state: TrackerState,
    pid: PidController<C>,
    frame_index: usize,
}

impl LineFollower<MonotonicClock> {
    /// Follower for masks `width` pixels wide, timed by the wall clock.
    pub fn new(params: FollowerParams, width: usize) -> Self {
        Self::with_clock(params, width, MonotonicClock::new())
    }
}

impl<C: Clock> LineFollower<C> {
    /// Follower timed by `clock`. Steering targets the mask's centre column.
    pub fn with_clock(params: FollowerParams, width: usize, clock: C) -> Self {
        let state = TrackerState::centered(width);
        Self {
            width,
            tracer: LineTracer::new(params.trace),
            selector: selector_for(params.seed_mode, params.seed_options()),
            state,
            pid: PidController::with_clock(params.pid, state.last_x as f64, clock),
            frame_index: 0,
        }
    }

    /// Process one mask. Panics if the mask width differs from the width the
    /// follower was created for.
    pub fn process(&mut self, mask: &ImageU8<'_>) -> FrameReport {
        assert_eq!(
            mask.w, self.width,
            "mask width {} does not match follower width {}",
            mask.w, self.width
        );
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let seed = timing.measure("seed", || self.selector.select(mask, &mut self.state));
        let path = timing.measure("trace", || self.tracer.trace(mask, seed.x));

        // No trace: steer on the seed, which holds the previous heading.
        let measured_x = path.first().map_or(seed.x, |p| p.x);
        let correction = timing.measure("control", || self.pid.update(measured_x as f64));
        timing.total_ms = elapsed_ms(total_start);

        debug!(
            "frame {} [{}] seed x={} {:?} window={:?} path_len={} measured={} correction={:.3}",
            self.frame_index,
            self.selector.name(),
            seed.x,
            seed.status,
            seed.window,
            path.len(),
            measured_x,
            correction
        );

        let report = FrameReport {
            frame_index: self.frame_index,
            seed,
            path,
            measured_x,
            correction,
            timing,
        };
        self.frame_index += 1;
        report
    }

    pub fn tracker_state(&self) -> &TrackerState {
        &self.state
    }

    pub fn pid_state(&self) -> &PidState {
        self.pid.state()
    }

    pub fn frames_processed(&self) -> usize {
        self.frame_index
    }

    pub fn selector_name(&self) -> &'static str {
        self.selector.name()
    }
}
