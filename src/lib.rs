#![doc = include_str!("../README.md")]

// Core: tracing, seeding and steering.
pub mod control;
pub mod follower;
pub mod moments;
pub mod seed;
pub mod tracer;
pub mod types;

// Plumbing around the core: masks from frames, overlays, I/O, tool configs.
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod overlay;
pub mod segmentation;

// --- High-level re-exports -------------------------------------------------

pub use crate::control::{PidController, PidGains};
pub use crate::follower::{FollowerParams, LineFollower};
pub use crate::seed::{LaneLockSelector, SeedSelector, TrackerState};
pub use crate::tracer::{trace_line, LineTracer, TraceOptions};
pub use crate::types::{FrameReport, LockStatus, Path, Point, Seed};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use line_tracker::prelude::*;
///
/// let (w, h) = (320usize, 160usize);
/// let mask = vec![0u8; w * h];
/// let mask = ImageU8::packed(w, h, &mask).unwrap();
///
/// let mut state = TrackerState::centered(w);
/// let seed = LaneLockSelector::default().select(&mask, &mut state);
/// let path = LineTracer::default().trace(&mask, seed.x);
/// assert_eq!(seed.status, LockStatus::Lost);
/// assert!(path.is_empty());
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::seed::{FullWidthSelector, LaneLockSelector, SeedSelector, TrackerState};
    pub use crate::tracer::{LineTracer, TraceOptions};
    pub use crate::types::{LockStatus, Path, Point};
    pub use crate::{FollowerParams, LineFollower, PidController, PidGains};
}
