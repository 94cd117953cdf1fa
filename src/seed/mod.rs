//! Seed selection: where in the bottom band each trace starts.
//!
//! Both strategies measure the centroid of line mass in a band at the bottom
//! of the mask and differ only in which columns they look at:
//! - [`LaneLockSelector`] searches a tunnel around the previous fix. A line
//!   that only appears outside the tunnel is never picked up, so the tracker
//!   cannot hop onto a neighbouring parallel line, at the cost of slower
//!   re-acquisition after a total loss.
//! - [`FullWidthSelector`] searches the whole band.
//!
//! On a miss both hold `TrackerState::last_x` and report [`LockStatus::Lost`].

mod full_width;
mod lane_lock;
mod options;
mod state;

pub use full_width::FullWidthSelector;
pub use lane_lock::LaneLockSelector;
pub use options::{SeedMode, SeedOptions, SeedOverrides};
pub use state::TrackerState;

use crate::image::ImageU8;
use crate::moments::{Moments, Region};
use crate::types::{LockStatus, Seed};
use log::debug;

/// Strategy choosing the tracer's start column for one frame.
pub trait SeedSelector {
    /// Pick the seed and update `state` when the line is found.
    fn select(&self, mask: &ImageU8<'_>, state: &mut TrackerState) -> Seed;

    fn name(&self) -> &'static str;
}

/// Build the selector for `mode`.
pub fn selector_for(mode: SeedMode, options: SeedOptions) -> Box<dyn SeedSelector> {
    match mode {
        SeedMode::LaneLock => Box::new(LaneLockSelector::new(options)),
        SeedMode::FullWidth => Box::new(FullWidthSelector::new(options)),
    }
}

/// Centroid search over columns `[x1, x2)` of the bottom band.
fn search_bottom_band(
    mask: &ImageU8<'_>,
    state: &mut TrackerState,
    x1: i64,
    x2: i64,
    options: &SeedOptions,
) -> Seed {
    mask.assert_layout();
    let h = mask.h as i64;
    let region = Region::clipped(x1, h - options.band_height as i64, x2, h, mask.w, mask.h);
    let moments = Moments::over(mask, region);
    let window = (region.x0 as i32, region.x1 as i32);

    match moments.centroid_x(options.min_mass) {
        Some(dx) => {
            let x = (region.x0 + dx) as i32;
            state.last_x = x;
            Seed {
                x,
                status: LockStatus::Locked,
                window,
            }
        }
        None => {
            debug!(
                "seed search [{}, {}) mass={} below {}; holding x={}",
                window.0, window.1, moments.m00, options.min_mass, state.last_x
            );
            Seed {
                x: state.last_x,
                status: LockStatus::Lost,
                window,
            }
        }
    }
}
