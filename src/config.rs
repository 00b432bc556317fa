//! Optional TOML configuration for session defaults.
//!
//! Every field has a default, so a partial file (or none at all) is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, TrackerError};
use crate::models::{Calories, MealName};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ledger: LedgerConfig,
    pub display: DisplayConfig,
}

/// Initial ledger state for a new session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Meal selected when the session starts.
    pub default_meal: MealName,
    /// Daily goal applied at startup, if any.
    pub default_goal: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix each listed entry with its position.
    pub show_indices: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show_indices: true }
    }
}

impl Config {
    /// Load from `path` when given, otherwise return defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        info!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(goal) = self.ledger.default_goal {
            Calories::try_from(goal).map_err(|_| {
                TrackerError::InvalidInput(format!("default_goal must be a finite number, got {}", goal))
            })?;
        }
        Ok(())
    }
}
