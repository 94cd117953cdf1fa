mod common;

use common::synthetic_mask::vertical_stripe;
use line_tracker::image::GrayImageU8;
use line_tracker::seed::{selector_for, FullWidthSelector, SeedMode, SeedOptions};
use line_tracker::{LaneLockSelector, LockStatus, SeedSelector, TrackerState};

const W: usize = 320;
const H: usize = 160;

#[test]
fn lane_lock_does_not_jump_to_line_outside_tunnel() {
    let mask = vertical_stripe(W, H, 280, 3);
    let mut state = TrackerState { last_x: 60 };
    let seed = LaneLockSelector::default().select(&mask.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Lost);
    assert_eq!(seed.x, 60);
    assert_eq!(state.last_x, 60);
    assert_eq!(seed.window, (10, 110));
}

#[test]
fn lane_lock_reacquires_once_line_drifts_into_tunnel() {
    let selector = LaneLockSelector::default();
    let mut state = TrackerState::centered(W);
    assert_eq!(state.last_x, 160);

    // Line 60 px right of centre: just outside the ±50 tunnel.
    let far = vertical_stripe(W, H, 220, 2);
    assert_eq!(
        selector.select(&far.as_view(), &mut state).status,
        LockStatus::Lost
    );
    assert_eq!(state.last_x, 160);

    // Drifts to 45 px: inside the tunnel, lock and recentre.
    let near = vertical_stripe(W, H, 205, 2);
    let seed = selector.select(&near.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Locked);
    assert_eq!(seed.x, 205);
    assert_eq!(state.last_x, 205);

    // Back at 220 it is now 15 px away and followed.
    let seed = selector.select(&far.as_view(), &mut state);
    assert!(seed.is_locked());
    assert_eq!(state.last_x, 220);
}

#[test]
fn only_bottom_band_is_searched() {
    let mut mask = GrayImageU8::zeros(W, H);
    // Line visible only above the 40-row seed band.
    mask.fill_rect(150, 0, 156, H - 40, 255);
    let mut state = TrackerState::centered(W);
    let seed = LaneLockSelector::default().select(&mask.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Lost);

    mask.fill_rect(150, H - 1, 152, H, 255);
    let seed = LaneLockSelector::default().select(&mask.as_view(), &mut state);
    // Two pixels: 510 > 400.
    assert_eq!(seed.status, LockStatus::Locked);
    assert_eq!(seed.x, 150);
}

#[test]
fn single_pixel_is_below_seed_mass_floor() {
    let mut mask = GrayImageU8::zeros(W, H);
    mask.set(170, H - 3, 255);
    let mut state = TrackerState::centered(W);
    let seed = LaneLockSelector::default().select(&mask.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Lost);
    assert_eq!(state.last_x, 160);
}

#[test]
fn full_width_finds_line_anywhere_in_band() {
    let mask = vertical_stripe(W, H, 290, 2);
    let mut state = TrackerState { last_x: 30 };
    let seed = FullWidthSelector::default().select(&mask.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Locked);
    assert_eq!(seed.x, 290);
    assert_eq!(state.last_x, 290);
    assert_eq!(seed.window, (0, W as i32));
}

#[test]
fn full_width_holds_last_x_on_empty_mask() {
    let mask = GrayImageU8::zeros(W, H);
    let mut state = TrackerState { last_x: 77 };
    let seed = FullWidthSelector::default().select(&mask.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Lost);
    assert_eq!(seed.x, 77);
    assert_eq!(state.last_x, 77);
}

#[test]
fn full_width_band_is_shallower_than_lane_lock() {
    let mut mask = GrayImageU8::zeros(W, H);
    // Two pixels 35 rows above the bottom: inside the lane-lock band only.
    mask.fill_rect(100, H - 35, 102, H - 34, 255);

    let mut state = TrackerState { last_x: 100 };
    let seed = FullWidthSelector::default().select(&mask.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Lost);

    let seed = LaneLockSelector::default().select(&mask.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Locked);
    assert_eq!(seed.x, 100);
}

#[test]
fn full_width_needs_mass_above_500() {
    let mut mask = GrayImageU8::zeros(W, H);
    mask.set(200, H - 2, 255);
    mask.set(200, H - 3, 200);
    let mut state = TrackerState { last_x: 200 };

    // 455 clears the lane-lock floor but not the full-width one.
    let seed = FullWidthSelector::default().select(&mask.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Lost);
    let seed = LaneLockSelector::default().select(&mask.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Locked);

    mask.set(200, H - 4, 255);
    let seed = FullWidthSelector::default().select(&mask.as_view(), &mut state);
    assert_eq!(seed.status, LockStatus::Locked);
    assert_eq!(seed.x, 200);
}

#[test]
fn seed_mode_picks_its_own_defaults() {
    assert_eq!(SeedMode::LaneLock.default_options(), SeedOptions::default());
    let full = SeedMode::FullWidth.default_options();
    assert_eq!((full.band_height, full.min_mass), (30, 500.0));
}

#[test]
fn selector_for_mode_builds_matching_strategy() {
    let options = SeedOptions::default();
    assert_eq!(selector_for(SeedMode::LaneLock, options).name(), "lane-lock");
    assert_eq!(selector_for(SeedMode::FullWidth, options).name(), "full-width");
}

#[test]
fn last_x_stays_inside_mask_over_a_sweep() {
    let selector = LaneLockSelector::new(SeedOptions {
        half_width: 60,
        ..Default::default()
    });
    let mut state = TrackerState::centered(W);
    for x0 in (3..W - 3).rev().step_by(20) {
        let mask = vertical_stripe(W, H, x0, 2);
        selector.select(&mask.as_view(), &mut state);
        assert!((0..W as i32).contains(&state.last_x));
    }
}
