use anyhow::Result;
use boxsieve_core::DetectionFile;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod runner;

use cli::AppArgs;
use config::AppConfig;

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    let args = AppArgs::parse();
    let config = AppConfig::resolve(&args)?;
    let input = DetectionFile::load(&args.input)?;

    let (output, summary) = runner::run(&config, &input)?;

    match &args.output {
        Some(path) => output.save(path)?,
        None => println!("{}", output.to_json_pretty()?),
    }

    info!(
        images = summary.images,
        input = summary.input_detections,
        prefiltered = summary.prefiltered,
        kept = summary.kept_detections,
        mode = ?config.suppression.mode,
        iou_threshold = config.suppression.iou_threshold,
        "done"
    );
    Ok(())
}
