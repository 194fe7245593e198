//! Application settings

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::FieldNames;
use crate::transfer::TransferProps;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Field names read from source items
    pub fields: FieldNames,

    /// Left pane header
    pub source_title: String,

    /// Right pane header
    pub target_title: String,

    /// Show the search boxes
    pub show_search: bool,

    /// Theme name ("dark" or "light")
    pub theme: String,

    /// Log level used when RUST_LOG is unset
    pub log_level: String,

    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fields: FieldNames::default(),
            source_title: "Source".to_string(),
            target_title: "Target".to_string(),
            show_search: true,
            theme: "default".to_string(),
            log_level: "info".to_string(),
            tick_rate_ms: 100,
        }
    }
}

impl Settings {
    /// Load settings from file or create default
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("reading {}", config_path.display()))?;
            let settings: Self = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", config_path.display()))?;
            tracing::info!("Loaded settings from {}", config_path.display());
            Ok(settings)
        } else {
            tracing::debug!("No settings at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to file
    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);

        self.write_to(&config_path)
    }

    fn write_to(&self, config_path: &Path) -> Result<()> {
        // Create parent directory if needed
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)
            .with_context(|| format!("writing {}", config_path.display()))?;
        Ok(())
    }

    /// Write default settings when no file exists yet. Returns whether a file was written.
    pub fn init_default(path: Option<&str>) -> Result<bool> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);
        if config_path.exists() {
            return Ok(false);
        }
        Self::default().write_to(&config_path)?;
        tracing::info!("Wrote default settings to {}", config_path.display());
        Ok(true)
    }

    /// Props for a control built from these settings
    pub fn props(&self) -> TransferProps {
        TransferProps {
            fields: self.fields.clone(),
            source_title: self.source_title.clone(),
            target_title: self.target_title.clone(),
            show_search: self.show_search,
            class_name: Some(self.theme.clone()),
            ..TransferProps::default()
        }
    }

    /// Get default config directory
    pub fn config_dir() -> PathBuf {
        ProjectDirs::from("com", "tree-transfer", "tree-transfer")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
                    .join("tree-transfer")
            })
    }

    /// Get default config file path
    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Get default log file path
    pub fn default_log_path() -> PathBuf {
        Self::config_dir().join("tree-transfer.log")
    }
}
