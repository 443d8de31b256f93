//! Configuration management

use crate::domain::csv::{validate_date_format, MEDIUM_DATE_FORMAT};
use crate::domain::ExportOptions;
use crate::error::{MealTrackError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-root data directory
pub const DATA_DIR: &str = ".mealtrack";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    /// strftime pattern for the date column of CSV exports
    #[serde(default = "default_export_date_format")]
    pub export_date_format: String,
}

fn default_export_date_format() -> String {
    MEDIUM_DATE_FORMAT.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            export_date_format: default_export_date_format(),
        }
    }

    /// Load config from .mealtrack/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MealTrackError::NotMealTrackDirectory(path.to_path_buf())
            } else {
                MealTrackError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .mealtrack/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(data_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Export options derived from this config
    pub fn export_options(&self) -> Result<ExportOptions> {
        ExportOptions::with_date_format(&self.export_date_format)
    }

    /// Read a single value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "created" => Ok(self.created.to_rfc3339()),
            "export_date_format" => Ok(self.export_date_format.clone()),
            _ => Err(MealTrackError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: created, export_date_format",
                key
            ))),
        }
    }

    /// Update a single value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "export_date_format" => {
                validate_date_format(value)?;
                self.export_date_format = value.to_string();
                Ok(())
            }
            "created" => Err(MealTrackError::Config(
                "Cannot modify 'created' field (read-only)".to_string(),
            )),
            _ => Err(MealTrackError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: export_date_format",
                key
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
