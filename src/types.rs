use crate::diagnostics::TimingBreakdown;
use serde::Serialize;

/// Pixel position; `y` grows downward from the top of the mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Centerline samples ordered bottom (near the robot) to top.
pub type Path = Vec<Point>;

/// Outcome of the seed search for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LockStatus {
    /// Enough line mass in the search window; the seed follows it.
    Locked,
    /// Nothing found; the seed holds the last known position.
    Lost,
}

/// Seed x for the tracer plus the column window that was searched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    pub x: i32,
    pub status: LockStatus,
    pub window: (i32, i32), // x1, x2 (exclusive)
}

impl Seed {
    pub fn is_locked(&self) -> bool {
        self.status == LockStatus::Locked
    }
}

/// Everything the follower computed for one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub frame_index: usize,
    pub seed: Seed,
    pub path: Path,
    pub measured_x: i32,
    pub correction: f64,
    pub timing: TimingBreakdown,
}
