//! Command-line argument parsing for the demo host
//!
//! Supports:
//! - Item labels as positional arguments
//! - An explicit config file
//! - Slot width and animation duration overrides

use clap::Parser;
use std::path::PathBuf;

use crate::animation::Easing;
use crate::config::DockConfig;
use crate::geometry::SlotMetrics;

/// Labels shown when none are given on the command line
pub const DEFAULT_LABELS: [&str; 5] = ["A", "B", "C", "D", "E"];

/// A dock strip with drag-to-reorder
#[derive(Parser, Debug)]
#[command(name = "slotdock", version, about = "A dock strip with drag-to-reorder")]
pub struct CliArgs {
    /// Item labels, left to right
    #[arg(value_name = "LABELS")]
    pub labels: Vec<String>,

    /// Read config from this file instead of the default location
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Full slot width in logical pixels, margins included
    #[arg(long, value_name = "PX")]
    pub slot_width: Option<f32>,

    /// Forward animation duration in milliseconds
    #[arg(long, value_name = "MS")]
    pub duration_ms: Option<u64>,

    /// Easing curve: linear, ease_out or smoothstep
    #[arg(long, value_name = "CURVE", value_parser = parse_easing)]
    pub easing: Option<Easing>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub labels: Vec<String>,
    pub dock: DockConfig,
}

fn parse_easing(value: &str) -> Result<Easing, String> {
    match value {
        "linear" => Ok(Easing::Linear),
        "ease_out" | "ease-out" => Ok(Easing::EaseOut),
        "smoothstep" => Ok(Easing::Smoothstep),
        other => Err(format!("unknown easing '{}'", other)),
    }
}

impl CliArgs {
    /// Merge parsed CLI args over a base config
    ///
    /// The base is the file named by `--config` when given, otherwise `base`.
    pub fn into_config(self, base: DockConfig) -> Result<StartupConfig, String> {
        let mut dock = match &self.config {
            Some(path) => DockConfig::load_from(path).map_err(|e| e.to_string())?,
            None => base,
        };

        if let Some(width) = self.slot_width {
            let margin = dock.slot.margin;
            dock.slot = if width > 2.0 * margin {
                SlotMetrics {
                    content_width: width - 2.0 * margin,
                    ..dock.slot
                }
            } else {
                SlotMetrics {
                    height: dock.slot.height,
                    ..SlotMetrics::uniform(width)
                }
            };
        }
        if let Some(ms) = self.duration_ms {
            dock.animation.duration_ms = ms;
        }
        if let Some(easing) = self.easing {
            dock.animation.easing = easing;
        }

        dock.validate().map_err(|e| e.to_string())?;

        let labels = if self.labels.is_empty() {
            DEFAULT_LABELS.iter().map(|s| s.to_string()).collect()
        } else {
            self.labels
        };

        Ok(StartupConfig { labels, dock })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            labels: vec![],
            config: None,
            slot_width: None,
            duration_ms: None,
            easing: None,
        }
    }

    #[test]
    fn test_empty_args_use_default_labels() {
        let config = args().into_config(DockConfig::default()).unwrap();
        assert_eq!(config.labels, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(config.dock, DockConfig::default());
    }

    #[test]
    fn test_labels_kept_in_order() {
        let config = CliArgs {
            labels: vec!["x".into(), "y".into()],
            ..args()
        }
        .into_config(DockConfig::default())
        .unwrap();
        assert_eq!(config.labels, vec!["x", "y"]);
    }

    #[test]
    fn test_slot_width_override_keeps_margin() {
        let config = CliArgs {
            slot_width: Some(80.0),
            ..args()
        }
        .into_config(DockConfig::default())
        .unwrap();
        assert_eq!(config.dock.slot.slot_width(), 80.0);
        assert_eq!(config.dock.slot.margin, 8.0);
    }

    #[test]
    fn test_narrow_slot_width_drops_margin() {
        let config = CliArgs {
            slot_width: Some(10.0),
            ..args()
        }
        .into_config(DockConfig::default())
        .unwrap();
        assert_eq!(config.dock.slot.slot_width(), 10.0);
        assert_eq!(config.dock.slot.margin, 0.0);
    }

    #[test]
    fn test_invalid_slot_width_rejected() {
        let result = CliArgs {
            slot_width: Some(-4.0),
            ..args()
        }
        .into_config(DockConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_duration_and_easing_override() {
        let config = CliArgs {
            duration_ms: Some(350),
            easing: Some(Easing::Smoothstep),
            ..args()
        }
        .into_config(DockConfig::default())
        .unwrap();
        assert_eq!(config.dock.animation.duration_ms, 350);
        assert_eq!(config.dock.animation.easing, Easing::Smoothstep);
    }

    #[test]
    fn test_parse_easing_names() {
        assert_eq!(parse_easing("ease-out"), Ok(Easing::EaseOut));
        assert!(parse_easing("bounce").is_err());
    }
}
