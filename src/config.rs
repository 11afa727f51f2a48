//! Run configuration: JSON file plus command line overrides

use anyhow::{Context, Result, ensure};
use boxsieve_nms::SuppressionConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::AppArgs;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub suppression: SuppressionConfig,
    /// Upstream confidence gate, applied before suppression when set
    pub min_objectness: Option<f64>,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;

        serde_json::from_str(&text).with_context(|| format!("Failed to parse config: {:?}", path))
    }

    /// Config file (or defaults) with command line flags layered on top
    pub fn resolve(args: &AppArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(threshold) = args.iou_threshold {
            config.suppression.iou_threshold = threshold;
        }
        if let Some(mode) = args.mode {
            config.suppression.mode = mode.into();
        }
        if let Some(max) = args.max_detections {
            config.suppression.max_detections = Some(max);
        }
        if args.min_objectness.is_some() {
            config.min_objectness = args.min_objectness;
        }

        config
            .suppression
            .validate()
            .context("Invalid suppression settings")?;

        if let Some(min) = config.min_objectness {
            ensure!(
                (0.0..=1.0).contains(&min),
                "min_objectness must lie in [0, 1], got {}",
                min
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ModeArg;
    use boxsieve_nms::SuppressionMode;
    use clap::Parser;

    #[test]
    fn test_flags_override_defaults() -> Result<()> {
        let args = AppArgs::try_parse_from([
            "boxsieve",
            "--input",
            "in.json",
            "--iou-threshold",
            "0.3",
            "--mode",
            "per-class",
            "--min-objectness",
            "0.5",
        ])?;
        assert_eq!(args.mode, Some(ModeArg::PerClass));

        let config = AppConfig::resolve(&args)?;
        assert_eq!(config.suppression.iou_threshold, 0.3);
        assert_eq!(config.suppression.mode, SuppressionMode::PerClass);
        assert_eq!(config.min_objectness, Some(0.5));
        Ok(())
    }

    #[test]
    fn test_invalid_threshold_is_rejected() -> Result<()> {
        let args = AppArgs::try_parse_from([
            "boxsieve",
            "--input",
            "in.json",
            "--iou-threshold",
            "1.5",
        ])?;
        assert!(AppConfig::resolve(&args).is_err());
        Ok(())
    }

    #[test]
    fn test_min_objectness_domain() -> Result<()> {
        let parse = |flag: &str| AppArgs::try_parse_from(["boxsieve", "--input", "in.json", flag]);

        for flag in ["--min-objectness=1.5", "--min-objectness=-0.1", "--min-objectness=NaN"] {
            let err = AppConfig::resolve(&parse(flag)?).unwrap_err();
            assert!(err.to_string().contains("min_objectness"), "{}", flag);
        }

        for flag in ["--min-objectness=0", "--min-objectness=1"] {
            assert!(AppConfig::resolve(&parse(flag)?).is_ok());
        }
        Ok(())
    }

    #[test]
    fn test_partial_config_json() -> Result<()> {
        let config: AppConfig =
            serde_json::from_str(r#"{ "suppression": { "iou_threshold": 0.7 } }"#)?;
        assert_eq!(config.suppression.iou_threshold, 0.7);
        assert_eq!(config.suppression.mode, SuppressionMode::Joint);
        assert_eq!(config.min_objectness, None);
        Ok(())
    }
}
