use super::{search_bottom_band, SeedOptions, SeedSelector, TrackerState};
use crate::image::ImageU8;
use crate::types::Seed;

/// Seeds from a tunnel of `half_width` columns on each side of the last fix.
#[derive(Clone, Debug, Default)]
pub struct LaneLockSelector {
    options: SeedOptions,
}

impl LaneLockSelector {
    pub fn new(options: SeedOptions) -> Self {
        Self { options }
    }
}

impl SeedSelector for LaneLockSelector {
    fn select(&self, mask: &ImageU8<'_>, state: &mut TrackerState) -> Seed {
        let center = state.last_x as i64;
        let half = self.options.half_width as i64;
        search_bottom_band(mask, state, center - half, center + half, &self.options)
    }

    fn name(&self) -> &'static str {
        "lane-lock"
    }
}
