use super::{search_bottom_band, SeedOptions, SeedSelector, TrackerState};
use crate::image::ImageU8;
use crate::types::Seed;

/// Seeds from the centroid of the whole bottom band.
#[derive(Clone, Debug)]
pub struct FullWidthSelector {
    options: SeedOptions,
}

impl FullWidthSelector {
    pub fn new(options: SeedOptions) -> Self {
        Self { options }
    }
}

impl Default for FullWidthSelector {
    fn default() -> Self {
        Self::new(SeedOptions::full_width())
    }
}

impl SeedSelector for FullWidthSelector {
    fn select(&self, mask: &ImageU8<'_>, state: &mut TrackerState) -> Seed {
        search_bottom_band(mask, state, 0, mask.w as i64, &self.options)
    }

    fn name(&self) -> &'static str {
        "full-width"
    }
}
