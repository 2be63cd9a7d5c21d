use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::alerts::{AlertThresholds, DEFAULT_CRITICAL_RATIO, DEFAULT_WARNING_RATIO};
use crate::routing::graph::{DEFAULT_MAX_CELLS, NetworkOptions};
use crate::routing::types::DEFAULT_CAPACITY;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "trayroute";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner: Option<PlannerConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts: Option<AlertConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Capacity given to suggested trays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_geometry: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cells: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `trayroute config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# trayroute configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn default_capacity(&self) -> u32 {
        self.defaults
            .as_ref()
            .and_then(|d| d.capacity)
            .unwrap_or(DEFAULT_CAPACITY)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.defaults
            .as_ref()
            .and_then(|d| d.format)
            .unwrap_or_default()
    }

    pub fn network_options(&self) -> NetworkOptions {
        let planner = self.planner.as_ref();
        NetworkOptions {
            strict: planner.and_then(|p| p.strict_geometry).unwrap_or(false),
            max_cells: planner.and_then(|p| p.max_cells).unwrap_or(DEFAULT_MAX_CELLS),
        }
    }

    pub fn alert_thresholds(&self) -> AlertThresholds {
        let alerts = self.alerts.as_ref();
        AlertThresholds {
            warning: alerts
                .and_then(|a| a.warning)
                .unwrap_or(DEFAULT_WARNING_RATIO),
            critical: alerts
                .and_then(|a| a.critical)
                .unwrap_or(DEFAULT_CRITICAL_RATIO),
        }
    }

    /// Fill every unset key with its default, for display.
    pub fn effective(&self) -> Self {
        let thresholds = self.alert_thresholds();
        let options = self.network_options();
        Self {
            defaults: Some(DefaultsConfig {
                capacity: Some(self.default_capacity()),
                format: Some(self.output_format()),
            }),
            planner: Some(PlannerConfig {
                strict_geometry: Some(options.strict),
                max_cells: Some(options.max_cells),
            }),
            alerts: Some(AlertConfig {
                warning: Some(thresholds.warning),
                critical: Some(thresholds.critical),
            }),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.capacity" => {
                let capacity: u32 = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid capacity: {value}. Must be a non-negative integer.")
                })?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .capacity = Some(capacity);
            }
            "defaults.format" => {
                let format = match value {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    _ => anyhow::bail!("Invalid format: {value}. Must be 'text' or 'json'."),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .format = Some(format);
            }
            "planner.strict_geometry" => {
                let strict = match value {
                    "true" => true,
                    "false" => false,
                    _ => anyhow::bail!(
                        "Invalid strict_geometry: {value}. Must be 'true' or 'false'."
                    ),
                };
                self.planner
                    .get_or_insert_with(PlannerConfig::default)
                    .strict_geometry = Some(strict);
            }
            "planner.max_cells" => {
                let max_cells: u64 = match value.parse() {
                    Ok(n) if n > 0 => n,
                    _ => anyhow::bail!("Invalid max_cells: {value}. Must be a positive integer."),
                };
                self.planner
                    .get_or_insert_with(PlannerConfig::default)
                    .max_cells = Some(max_cells);
            }
            "alerts.warning" | "alerts.critical" => {
                let ratio: f64 = match value.parse() {
                    Ok(r) if (0.0..=1.0).contains(&r) => r,
                    _ => anyhow::bail!(
                        "Invalid ratio: {value}. Must be a number between 0 and 1."
                    ),
                };
                let thresholds = self.alert_thresholds();
                let (warning, critical) = if key == "alerts.warning" {
                    (ratio, thresholds.critical)
                } else {
                    (thresholds.warning, ratio)
                };
                if warning >= critical {
                    anyhow::bail!(
                        "Warning threshold ({warning}) must be below the critical threshold ({critical})."
                    );
                }
                let alerts = self.alerts.get_or_insert_with(AlertConfig::default);
                if key == "alerts.warning" {
                    alerts.warning = Some(ratio);
                } else {
                    alerts.critical = Some(ratio);
                }
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.capacity, defaults.format, planner.strict_geometry, planner.max_cells, alerts.warning, alerts.critical"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::default();
        assert_eq!(config.default_capacity(), 100);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(!config.network_options().strict);
        assert_eq!(config.network_options().max_cells, DEFAULT_MAX_CELLS);
        assert_eq!(config.alert_thresholds(), AlertThresholds::default());
    }

    #[test]
    fn set_known_keys() {
        let mut config = Config::default();
        config.set("defaults.capacity", "250").unwrap();
        config.set("defaults.format", "json").unwrap();
        config.set("planner.strict_geometry", "true").unwrap();
        config.set("planner.max_cells", "5000").unwrap();
        config.set("alerts.warning", "0.7").unwrap();
        assert_eq!(config.default_capacity(), 250);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.network_options().strict);
        assert_eq!(config.network_options().max_cells, 5000);
        assert_eq!(config.alert_thresholds().warning, 0.7);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.capacity", "-1").is_err());
        assert!(config.set("defaults.format", "xml").is_err());
        assert!(config.set("planner.strict_geometry", "yes").is_err());
        assert!(config.set("planner.max_cells", "0").is_err());
        assert!(config.set("alerts.critical", "1.5").is_err());
        assert!(config.set("nope", "1").is_err());
    }

    #[test]
    fn warning_must_stay_below_critical() {
        let mut config = Config::default();
        assert!(config.set("alerts.warning", "0.96").is_err());
        config.set("alerts.critical", "0.99").unwrap();
        config.set("alerts.warning", "0.96").unwrap();
        assert!(config.set("alerts.critical", "0.9").is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.capacity", "42").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_capacity(), 42);
        assert!(loaded.planner.is_none());
    }

    #[test]
    fn effective_config_fills_everything() {
        let effective = Config::default().effective();
        let yaml = serde_yaml::to_string(&effective).unwrap();
        assert!(yaml.contains("capacity: 100"));
        assert!(yaml.contains("format: text"));
        assert!(yaml.contains("strict_geometry: false"));
        assert!(yaml.contains("critical: 0.95"));
    }
}
