use line_tracker::image::GrayImageU8;

/// Full-height vertical stripe covering columns `[x0 - half, x0 + half]`.
pub fn vertical_stripe(width: usize, height: usize, x0: usize, half: usize) -> GrayImageU8 {
    assert!(x0 + half < width, "stripe must fit in the image");
    let mut mask = GrayImageU8::zeros(width, height);
    mask.fill_rect(x0 - half, 0, x0 + half + 1, height, 255);
    mask
}

/// Stripe of `2 * half + 1` columns whose centre moves `slope` pixels per row
/// when walking up from `x_bottom` at the last row.
pub fn slanted_stripe(
    width: usize,
    height: usize,
    x_bottom: f64,
    slope: f64,
    half: usize,
) -> GrayImageU8 {
    let mut mask = GrayImageU8::zeros(width, height);
    for y in 0..height {
        let rows_up = (height - 1 - y) as f64;
        let cx = (x_bottom + slope * rows_up).round() as i64;
        let lo = (cx - half as i64).max(0) as usize;
        let hi = (cx + half as i64 + 1).clamp(0, width as i64) as usize;
        mask.fill_rect(lo, y, hi, y + 1, 255);
    }
    mask
}

/// Erase rows `[y0, y1)`.
pub fn clear_rows(mask: &mut GrayImageU8, y0: usize, y1: usize) {
    let w = mask.width();
    mask.fill_rect(0, y0, w, y1, 0);
}
