//! Debug overlay drawn onto the full RGB frame.
//!
//! Path coordinates are mask coordinates; `roi_top` shifts them back into the
//! frame. Everything is clipped to the frame bounds.
use crate::types::{FrameReport, LockStatus, Point};
use image::{Rgb, RgbImage};

pub const PATH_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
pub const LOCKED_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const LOST_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

pub fn status_color(status: LockStatus) -> Rgb<u8> {
    match status {
        LockStatus::Locked => LOCKED_COLOR,
        LockStatus::Lost => LOST_COLOR,
    }
}

#[inline]
fn put(frame: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < frame.width() && (y as u32) < frame.height() {
        frame.put_pixel(x as u32, y as u32, color);
    }
}

/// Filled disc of `radius` pixels centred on `(cx, cy)`.
pub fn draw_disc(frame: &mut RgbImage, cx: i64, cy: i64, radius: i64, color: Rgb<u8>) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put(frame, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Bresenham segment; `thickness > 1` stamps a disc at every step.
pub fn draw_line(
    frame: &mut RgbImage,
    a: (i64, i64),
    b: (i64, i64),
    thickness: i64,
    color: Rgb<u8>,
) {
    let (mut x, mut y) = a;
    let dx = (b.0 - a.0).abs();
    let dy = -(b.1 - a.1).abs();
    let sx = if a.0 < b.0 { 1 } else { -1 };
    let sy = if a.1 < b.1 { 1 } else { -1 };
    let mut err = dx + dy;
    let radius = thickness / 2;
    loop {
        if radius > 0 {
            draw_disc(frame, x, y, radius, color);
        } else {
            put(frame, x, y, color);
        }
        if x == b.0 && y == b.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// One-pixel rectangle outline with inclusive corners.
pub fn draw_rect(
    frame: &mut RgbImage,
    top_left: (i64, i64),
    bottom_right: (i64, i64),
    color: Rgb<u8>,
) {
    let (x0, y0) = top_left;
    let (x1, y1) = bottom_right;
    draw_line(frame, (x0, y0), (x1, y0), 1, color);
    draw_line(frame, (x1, y0), (x1, y1), 1, color);
    draw_line(frame, (x1, y1), (x0, y1), 1, color);
    draw_line(frame, (x0, y1), (x0, y0), 1, color);
}

/// Polyline through `path`, shifted down by `roi_top` rows.
pub fn draw_path(frame: &mut RgbImage, path: &[Point], roi_top: usize, color: Rgb<u8>) {
    let shift = roi_top as i64;
    for pair in path.windows(2) {
        let a = (pair[0].x as i64, pair[0].y as i64 + shift);
        let b = (pair[1].x as i64, pair[1].y as i64 + shift);
        draw_line(frame, a, b, 2, color);
    }
}

pub const PATH_END_COLOR: Rgb<u8> = LOST_COLOR;

/// Search tunnel, traced path and seed marker for one frame. With
/// `mark_path_end` the topmost traced point also gets a red disc.
pub fn draw_report(
    frame: &mut RgbImage,
    report: &FrameReport,
    roi_top: usize,
    band_height: usize,
    mark_path_end: bool,
) {
    let color = status_color(report.seed.status);
    let h = frame.height() as i64;
    let (x1, x2) = report.seed.window;
    draw_rect(
        frame,
        (x1 as i64, h - band_height as i64),
        (x2 as i64, h - 5),
        color,
    );

    if report.path.len() > 1 {
        draw_path(frame, &report.path, roi_top, PATH_COLOR);
        let first = report.path[0];
        let (cx, cy) = (first.x as i64, first.y as i64 + roi_top as i64);
        draw_disc(frame, cx, cy, 6, color);
        if mark_path_end {
            if let Some(last) = report.path.last() {
                let (ex, ey) = (last.x as i64, last.y as i64 + roi_top as i64);
                draw_disc(frame, ex, ey, 6, PATH_END_COLOR);
            }
        }
    }
}
