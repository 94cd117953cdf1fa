use crate::follower::FollowerParams;
use crate::segmentation::SegmentationOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of `follow_demo`.
///
/// Only `input_dir` and `output` are required; everything else falls back to
/// the values the robot was tuned with (320×240 frames, ROI from row 80,
/// yellow tape).
#[derive(Clone, Debug, Deserialize)]
pub struct FollowDemoConfig {
    /// Directory with the frame sequence (PNG/JPEG, processed in name order).
    pub input_dir: PathBuf,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub segmentation: SegmentationOptions,
    #[serde(default)]
    pub follower: FollowerParams,
    pub output: FollowOutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FollowOutputConfig {
    /// Run report with one entry per frame.
    pub report_json: PathBuf,
    /// Directory for per-frame images; required by the two flags below.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub save_overlays: bool,
    #[serde(default)]
    pub save_masks: bool,
}

fn default_width() -> u32 {
    320
}

fn default_height() -> u32 {
    240
}

impl FollowDemoConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Frame size must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if self.segmentation.roi_top >= self.height as usize {
            return Err(format!(
                "roi_top {} leaves no rows in a {}-row frame",
                self.segmentation.roi_top, self.height
            ));
        }
        if (self.output.save_overlays || self.output.save_masks) && self.output.dir.is_none() {
            return Err("output.dir is required when saving overlays or masks".to_string());
        }
        Ok(())
    }
}

pub fn parse_config(json: &str) -> Result<FollowDemoConfig, String> {
    let config: FollowDemoConfig =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<FollowDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{} ({})", e, path.display()))
}
