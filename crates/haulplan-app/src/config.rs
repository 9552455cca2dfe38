//! Configuration management for haulplan
//!
//! Config stored at: ~/.config/haulplan/config.json

use haulplan_domain::constants::regulations::DEFAULT_STATE_DISTANCE_MILES;
use haulplan_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default power-unit weight added to a load's gross weight
pub const DEFAULT_TRACTOR_WEIGHT_LBS: f64 = 17_000.0;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Truck catalog file (JSON or TOML); built-in catalog when unset
    #[serde(default)]
    pub truck_catalog: Option<PathBuf>,

    /// State permit table file (JSON or TOML); fallback estimates when unset
    #[serde(default)]
    pub permit_table: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Miles charged for a route state with no supplied distance
    #[serde(default = "default_state_distance")]
    pub default_state_distance_miles: f64,

    /// Tractor weight in pounds
    #[serde(default = "default_tractor_weight")]
    pub tractor_weight_lbs: f64,

    /// Pack strategy loads onto shared trucks by default
    #[serde(default)]
    pub pack_loads: bool,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_state_distance() -> f64 {
    DEFAULT_STATE_DISTANCE_MILES
}

fn default_tractor_weight() -> f64 {
    DEFAULT_TRACTOR_WEIGHT_LBS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            truck_catalog: None,
            permit_table: None,
            output_format: default_output_format(),
            default_state_distance_miles: default_state_distance(),
            tractor_weight_lbs: default_tractor_weight(),
            pack_loads: false,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulplan");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)).into())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulplan Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Truck catalog:     {}",
            self.truck_catalog
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Permit table:      {}",
            self.permit_table
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none, estimates only)".to_string())
        )?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(
            f,
            "State distance:    {:.0} mi (default)",
            self.default_state_distance_miles
        )?;
        writeln!(f, "Tractor weight:    {:.0} lbs", self.tractor_weight_lbs)?;
        writeln!(f, "Pack loads:        {}", self.pack_loads)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
