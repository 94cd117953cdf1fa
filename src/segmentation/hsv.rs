//! RGB → HSV conversion and in-range thresholding.
//!
//! HSV follows the common 8-bit convention: hue is halved to fit `[0, 180)`,
//! saturation and value span `[0, 255]`.
use crate::image::{GrayImageU8, ImageViewMut};
use image::RgbImage;
use serde::Deserialize;

/// Convert one RGB pixel to 8-bit HSV.
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb.map(|c| c as f32);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v > 0.0 { diff * 255.0 / v } else { 0.0 };
    let mut h = if diff == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / diff
    } else if v == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }

    let h = (h / 2.0).round() as u32 % 180;
    [h as u8, s.round() as u8, v as u8]
}

/// Inclusive HSV box marking foreground pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColorThreshold {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl Default for ColorThreshold {
    /// Yellow tape, loose on saturation and value to keep shadowed parts.
    fn default() -> Self {
        Self {
            lower: [18, 50, 50],
            upper: [30, 255, 255],
        }
    }
}

impl ColorThreshold {
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| self.lower[i] <= hsv[i] && hsv[i] <= self.upper[i])
    }

    /// 0/255 mask of rows `roi_top..` of `frame`.
    pub fn apply(&self, frame: &RgbImage, roi_top: usize) -> GrayImageU8 {
        let w = frame.width() as usize;
        let top = roi_top.min(frame.height() as usize);
        let h = frame.height() as usize - top;
        let mut mask = GrayImageU8::zeros(w, h);
        for y in 0..h {
            let row = mask.row_mut(y);
            for (x, px) in row.iter_mut().enumerate() {
                let rgb = frame.get_pixel(x as u32, (y + top) as u32).0;
                if self.contains(rgb_to_hsv(rgb)) {
                    *px = 255;
                }
            }
        }
        mask
    }
}
