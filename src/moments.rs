//! Raw image moments over rectangular mask regions.
//!
//! Values follow the usual 8-bit image-moment convention: every pixel weighs
//! its intensity, so a single 255 pixel contributes 255 to the zeroth moment.
//! Column coordinates are relative to the region's left edge; callers add the
//! region origin back when converting the centroid to image coordinates.

use crate::image::{ImageU8, ImageView};

/// Half-open pixel rectangle `[x0, x1) × [y0, y1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Region {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Region {
    /// Clip signed bounds to a `w × h` image. Empty when the bounds miss it.
    pub fn clipped(x0: i64, y0: i64, x1: i64, y1: i64, w: usize, h: usize) -> Self {
        let clamp = |v: i64, hi: usize| v.clamp(0, hi as i64) as usize;
        let (x0, x1) = (clamp(x0, w), clamp(x1, w));
        let (y0, y1) = (clamp(y0, h), clamp(y1, h));
        Self {
            x0,
            y0,
            x1: x1.max(x0),
            y1: y1.max(y0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }
}

/// Zeroth and first x-moment of a region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Moments {
    /// Total intensity mass.
    pub m00: u64,
    /// Sum of region-relative column index weighted by intensity.
    pub m10: u64,
}

impl Moments {
    /// Accumulate moments of `mask` over `region`.
    pub fn over(mask: &ImageU8<'_>, region: Region) -> Self {
        let mut acc = Self::default();
        if region.is_empty() {
            return acc;
        }
        for y in region.y0..region.y1 {
            let row = &mask.row(y)[region.x0..region.x1];
            for (dx, &v) in row.iter().enumerate() {
                if v != 0 {
                    let v = v as u64;
                    acc.m00 += v;
                    acc.m10 += dx as u64 * v;
                }
            }
        }
        acc
    }

    pub fn mass(&self) -> f64 {
        self.m00 as f64
    }

    /// Region-relative centroid column, truncated toward zero. `None` when the
    /// mass does not exceed `min_mass` or is zero.
    pub fn centroid_x(&self, min_mass: f64) -> Option<usize> {
        if self.m00 == 0 || self.mass() <= min_mass {
            return None;
        }
        Some((self.m10 / self.m00) as usize)
    }
}
