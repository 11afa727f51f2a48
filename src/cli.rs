use std::path::PathBuf;

use boxsieve_nms::SuppressionMode;
use clap::{Parser, ValueEnum};

/// Command line configuration for the suppression runner.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about,
    long_about = "Greedy non-maximum suppression over detector output stored as JSON."
)]
pub struct AppArgs {
    /// JSON detection file to read.
    #[arg(long)]
    pub input: PathBuf,
    /// Where to write the kept detections (stdout when omitted).
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Optional JSON run configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the IoU threshold, in (0, 1].
    #[arg(long)]
    pub iou_threshold: Option<f64>,
    /// Override the suppression mode.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Drop detections below this objectness before suppression.
    #[arg(long)]
    pub min_objectness: Option<f64>,
    /// Keep at most this many detections per image.
    #[arg(long)]
    pub max_detections: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Joint,
    PerClass,
}

impl From<ModeArg> for SuppressionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Joint => SuppressionMode::Joint,
            ModeArg::PerClass => SuppressionMode::PerClass,
        }
    }
}
