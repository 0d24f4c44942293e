//! User settings for the budget planner
//!
//! Manages user preferences: startup theme, currency symbol, where budgets
//! are saved, and the advisory thresholds.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::PlannerPaths;
use crate::error::BudgetError;
use crate::services::AdvisoryThresholds;
use crate::storage::DEFAULT_FILE_NAME;

/// Light or dark colour scheme
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// User settings for the budget planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Theme the interactive form starts in
    #[serde(default)]
    pub theme: ThemeMode,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Where budgets are saved when no path is given
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,

    /// Share-of-income limits for the rent and food advisories
    #[serde(default)]
    pub thresholds: AdvisoryThresholds,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_save_path() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            theme: ThemeMode::default(),
            currency_symbol: default_currency(),
            save_path: default_save_path(),
            thresholds: AdvisoryThresholds::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load settings, falling back to defaults if the file can't be used
    pub fn load_or_default(paths: &PlannerPaths) -> Self {
        Self::load_or_create(paths).unwrap_or_else(|err| {
            warn!(
                path = %paths.settings_file().display(),
                "ignoring unusable settings: {}", err
            );
            Self::default()
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlannerPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
