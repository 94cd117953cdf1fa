//! Rectangular grayscale morphology on 8-bit masks.
//!
//! A `k × k` rectangle is separable, so dilation and erosion run as a row pass
//! followed by a column pass. Samples outside the image are ignored rather
//! than padded, so borders neither grow nor shrink the foreground.
use crate::image::{GrayImageU8, ImageView, ImageViewMut};

/// Dilation followed by erosion: fills gaps narrower than the kernel.
pub fn close(mask: &GrayImageU8, kernel: usize) -> GrayImageU8 {
    if kernel <= 1 {
        return mask.clone();
    }
    erode(&dilate(mask, kernel), kernel)
}

pub fn dilate(mask: &GrayImageU8, kernel: usize) -> GrayImageU8 {
    rank_filter(mask, kernel, u8::max)
}

pub fn erode(mask: &GrayImageU8, kernel: usize) -> GrayImageU8 {
    rank_filter(mask, kernel, u8::min)
}

/// Kernel reach `(before, after)` around the anchor at `kernel / 2`.
fn reach(kernel: usize) -> (usize, usize) {
    let before = kernel / 2;
    (before, kernel.saturating_sub(1) - before)
}

fn rank_filter(src: &GrayImageU8, kernel: usize, pick: fn(u8, u8) -> u8) -> GrayImageU8 {
    let (w, h) = (src.width(), src.height());
    if kernel <= 1 || w == 0 || h == 0 {
        return src.clone();
    }
    let (before, after) = reach(kernel);

    let mut horiz = GrayImageU8::zeros(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let lo = x.saturating_sub(before);
            let hi = (x + after).min(w - 1);
            *dst = src_row[lo..=hi]
                .iter()
                .copied()
                .reduce(pick)
                .unwrap_or(src_row[x]);
        }
    }

    let mut out = GrayImageU8::zeros(w, h);
    for y in 0..h {
        let lo = y.saturating_sub(before);
        let hi = (y + after).min(h - 1);
        let dst_row = out.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut acc = horiz.get(x, lo);
            for yy in lo + 1..=hi {
                acc = pick(acc, horiz.get(x, yy));
            }
            *dst = acc;
        }
    }
    out
}
