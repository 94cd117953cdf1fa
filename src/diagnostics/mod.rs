//! Diagnostics attached to follower reports.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};
