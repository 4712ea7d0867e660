//! Dashboard configuration.
//!
//! Values resolve in three layers: built-in defaults, an optional JSON file,
//! then command line overrides applied by the binary.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, Result};
use crate::types::CacheKey;

const APP_DIR: &str = "hotones-dashboard";
const CONFIG_FILE: &str = "config.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the three input files
    pub data_dir: PathBuf,
    pub episodes_file: String,
    pub seasons_file: String,
    pub sauces_file: String,
    /// Address for `serve`
    pub bind_addr: String,
    /// Number of guests shown in the popularity chart
    pub top_guests: usize,
    /// Minimum completion rate for a guest to count as `Completed`
    pub outcome_threshold: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            episodes_file: "episodes.csv".to_string(),
            seasons_file: "seasons.csv".to_string(),
            sauces_file: "sauces.csv".to_string(),
            bind_addr: "127.0.0.1:8501".to_string(),
            top_guests: 15,
            outcome_threshold: 0.5,
        }
    }
}

/// Resolved locations of the three input files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    pub episodes: PathBuf,
    pub seasons: PathBuf,
    pub sauces: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: &Path) -> Self {
        let defaults = DashboardConfig::default();
        Self {
            episodes: dir.join(defaults.episodes_file),
            seasons: dir.join(defaults.seasons_file),
            sauces: dir.join(defaults.sauces_file),
        }
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            episodes: self.episodes.clone(),
            seasons: self.seasons.clone(),
            sauces: self.sauces.clone(),
        }
    }
}

impl DashboardConfig {
    /// Default location of the user config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from `explicit`, or from the default location when
    /// it exists, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DashboardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.outcome_threshold) {
            return Err(DashboardError::Config(format!(
                "outcome_threshold must be within 0..=1, got {}",
                self.outcome_threshold
            )));
        }
        if self.top_guests == 0 {
            return Err(DashboardError::Config(
                "top_guests must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn data_paths(&self) -> DataPaths {
        DataPaths {
            episodes: self.data_dir.join(&self.episodes_file),
            seasons: self.data_dir.join(&self.seasons_file),
            sauces: self.data_dir.join(&self.sauces_file),
        }
    }
}
