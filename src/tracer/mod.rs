//! Sliding-window centroid crawl along a binary line mask.
//!
//! Starting from a seed column near the bottom of the mask, the tracer walks
//! upward in non-overlapping horizontal bands. In each band it only looks at a
//! bounded column window around the current x, recentres on the intensity
//! centroid found there and records one path point per successful band.
//!
//! The bounded window keeps the crawl on its own line when a parallel line is
//! visible nearby during a curve. Bands without enough mass are skipped at the
//! current x; once more than `patience` consecutive bands come up empty the
//! crawl stops. Short gaps (dashes, glare) are thus bridged without losing the
//! rest of the line.
//!
//! ```
//! use line_tracker::image::GrayImageU8;
//! use line_tracker::tracer::{LineTracer, TraceOptions};
//!
//! let mut mask = GrayImageU8::zeros(320, 160);
//! mask.fill_rect(100, 0, 110, 160, 255);
//! let path = LineTracer::new(TraceOptions::default()).trace(&mask.as_view(), 120);
//! assert!(!path.is_empty());
//! assert!(path.iter().all(|p| (p.x - 104).abs() <= 1));
//! ```

mod options;

pub use options::TraceOptions;

use crate::image::ImageU8;
use crate::moments::{Moments, Region};
use crate::types::{Path, Point};
use log::trace;

/// Centroid crawler configured with [`TraceOptions`].
#[derive(Clone, Debug, Default)]
pub struct LineTracer {
    options: TraceOptions,
}

impl LineTracer {
    pub fn new(options: TraceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    /// Trace the line upward from column `start_x`.
    ///
    /// Panics if the mask's declared dimensions do not fit its buffer.
    pub fn trace(&self, mask: &ImageU8<'_>, start_x: i32) -> Path {
        trace_line(mask, start_x, &self.options)
    }
}

/// Free-function form of [`LineTracer::trace`].
pub fn trace_line(mask: &ImageU8<'_>, start_x: i32, options: &TraceOptions) -> Path {
    mask.assert_layout();

    let (w, h) = (mask.w, mask.h);
    let window_h = options.window_height.max(1) as i64;
    let half_h = window_h / 2;
    let half_w = options.window_half_width as i64;

    let mut path = Path::new();
    let mut curr_x = start_x as i64;
    let mut curr_y = h as i64 - half_h;
    let mut consecutive_empty = 0usize;

    while curr_y > window_h {
        let (y1, y2) = (curr_y - half_h, curr_y + half_h);
        if y1 < 0 {
            break;
        }
        let region = Region::clipped(curr_x - half_w, y1, curr_x + half_w, y2, w, h);
        let moments = Moments::over(mask, region);

        match moments.centroid_x(options.min_mass) {
            Some(dx) => {
                let cx = (region.x0 + dx) as i64;
                trace!(
                    "trace band y={} window=[{}, {}) mass={} -> x={}",
                    curr_y,
                    region.x0,
                    region.x1,
                    moments.m00,
                    cx
                );
                path.push(Point::new(cx as i32, curr_y as i32));
                curr_x = cx;
                consecutive_empty = 0;
            }
            None => {
                consecutive_empty += 1;
                trace!(
                    "trace band y={} window=[{}, {}) mass={} empty ({}/{})",
                    curr_y,
                    region.x0,
                    region.x1,
                    moments.m00,
                    consecutive_empty,
                    options.patience
                );
                if consecutive_empty > options.patience {
                    break;
                }
            }
        }

        curr_y -= window_h;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;

    #[test]
    fn first_point_sits_in_bottom_band() {
        let mut mask = GrayImageU8::zeros(64, 60);
        mask.fill_rect(30, 0, 34, 60, 255);
        let path = trace_line(&mask.as_view(), 32, &TraceOptions::default());
        // h=60, half band 7: 53, 38, 23; 8 is not above the band height.
        let ys: Vec<i32> = path.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![53, 38, 23]);
        assert!(path.iter().all(|p| p.x == 31));
    }

    #[test]
    fn seed_far_from_line_finds_nothing() {
        let mut mask = GrayImageU8::zeros(300, 120);
        mask.fill_rect(250, 0, 260, 120, 255);
        let path = trace_line(&mask.as_view(), 20, &TraceOptions::default());
        assert!(path.is_empty());
    }

    #[test]
    fn mask_shorter_than_two_bands_yields_empty_path() {
        let mut mask = GrayImageU8::zeros(40, 20);
        mask.fill_rect(0, 0, 40, 20, 255);
        let path = trace_line(&mask.as_view(), 20, &TraceOptions::default());
        assert!(path.is_empty());
    }

    #[test]
    #[should_panic(expected = "Invalid image layout")]
    fn malformed_mask_panics() {
        let data = vec![0u8; 10];
        let mask = ImageU8 {
            w: 10,
            h: 10,
            stride: 10,
            data: &data,
        };
        let _ = trace_line(&mask, 5, &TraceOptions::default());
    }
}
