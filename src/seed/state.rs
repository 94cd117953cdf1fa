use serde::Serialize;

/// Tracker memory carried from frame to frame.
///
/// `last_x` is the last column where the seed band had enough line mass. It
/// starts at the image centre and only moves when a selector locks on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    pub last_x: i32,
}

impl TrackerState {
    /// Start at the horizontal centre of a `width`-wide mask.
    pub fn centered(width: usize) -> Self {
        Self {
            last_x: (width / 2) as i32,
        }
    }
}
