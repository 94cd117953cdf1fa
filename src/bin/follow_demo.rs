use line_tracker::config::follow::{load_config, FollowDemoConfig};
use line_tracker::image::io::{
    list_frames, load_rgb_image, resize_rgb, save_grayscale_u8, save_rgb_image, write_json_file,
};
use line_tracker::overlay::draw_report;
use line_tracker::seed::SeedMode;
use line_tracker::segmentation::frame_to_mask;
use line_tracker::{FrameReport, LineFollower, LockStatus};
use log::{info, warn};
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let frames = list_frames(&config.input_dir)?;
    if frames.is_empty() {
        return Err(format!("No frames found in {}", config.input_dir.display()));
    }

    let mut follower = LineFollower::new(config.follower, config.width as usize);
    info!(
        "Following line through {} frames from {} ({} seeding)",
        frames.len(),
        config.input_dir.display(),
        follower.selector_name()
    );
    let start = Instant::now();
    let mut reports = Vec::with_capacity(frames.len());

    for path in &frames {
        let frame = resize_rgb(load_rgb_image(path)?, config.width, config.height);
        let mask = frame_to_mask(&frame, &config.segmentation);
        let report = follower.process(&mask.as_view());
        if report.seed.status == LockStatus::Lost {
            warn!(
                "frame {} ({}): line lost, holding x={}",
                report.frame_index,
                path.display(),
                report.seed.x
            );
        }
        save_frame_artifacts(&config, &report, frame, &mask)?;
        reports.push(report);
    }

    let elapsed = start.elapsed().as_secs_f64();
    let summary = RunReport::new(reports, elapsed);
    write_json_file(&config.output.report_json, &summary)?;

    println!(
        "Processed {} frames ({} locked, {} lost) at {:.1} fps",
        summary.frames, summary.locked_frames, summary.lost_frames, summary.average_fps
    );
    println!("Report written to {}", config.output.report_json.display());
    Ok(())
}

fn save_frame_artifacts(
    config: &FollowDemoConfig,
    report: &FrameReport,
    mut frame: image::RgbImage,
    mask: &line_tracker::image::GrayImageU8,
) -> Result<(), String> {
    let Some(dir) = &config.output.dir else {
        return Ok(());
    };
    if config.output.save_masks {
        save_grayscale_u8(mask, &dir.join(format!("mask_{:05}.png", report.frame_index)))?;
    }
    if config.output.save_overlays {
        draw_report(
            &mut frame,
            report,
            config.segmentation.roi_top,
            config.follower.seed_options().band_height,
            config.follower.seed_mode == SeedMode::FullWidth,
        );
        save_rgb_image(&frame, &dir.join(format!("frame_{:05}.png", report.frame_index)))?;
    }
    Ok(())
}

fn usage() -> String {
    "Usage: follow_demo <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport {
    frames: usize,
    locked_frames: usize,
    lost_frames: usize,
    elapsed_s: f64,
    average_fps: f64,
    reports: Vec<FrameReport>,
}

impl RunReport {
    fn new(reports: Vec<FrameReport>, elapsed_s: f64) -> Self {
        let locked_frames = reports.iter().filter(|r| r.seed.is_locked()).count();
        let frames = reports.len();
        Self {
            frames,
            locked_frames,
            lost_frames: frames - locked_frames,
            elapsed_s,
            average_fps: frames as f64 / elapsed_s.max(1e-9),
            reports,
        }
    }
}
