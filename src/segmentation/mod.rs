//! Color segmentation producing the binary line mask from an RGB frame.
//!
//! Rows above `roi_top` are dropped, the rest is thresholded in HSV and closed
//! with a square kernel to patch small holes from glare and tape seams.

pub mod hsv;
pub mod morphology;

pub use hsv::{rgb_to_hsv, ColorThreshold};
pub use morphology::close;

use crate::image::GrayImageU8;
use image::RgbImage;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SegmentationOptions {
    pub threshold: ColorThreshold,
    /// First frame row kept in the mask.
    pub roi_top: usize,
    /// Side of the closing rectangle; `0` or `1` disables closing.
    pub close_kernel: usize,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            threshold: ColorThreshold::default(),
            roi_top: 80,
            close_kernel: 5,
        }
    }
}

/// Threshold and close the region of interest of `frame`.
pub fn frame_to_mask(frame: &RgbImage, options: &SegmentationOptions) -> GrayImageU8 {
    let raw = options.threshold.apply(frame, options.roi_top);
    close(&raw, options.close_kernel)
}
