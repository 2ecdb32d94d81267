//! Application Configuration
//!
//! YAML-backed settings shared by the passform desktop apps. A missing file
//! is not an error: the manager starts from defaults and only persists when
//! asked. A malformed file is surfaced to the caller so the app can show a
//! startup error instead of silently reverting the user's settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SharedResult;
use crate::validation::StrengthPolicy;

/// Main application configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// User interface configuration
    pub ui: UiConfig,

    /// Password policy configuration
    pub policy: PolicyConfig,
}

/// User interface configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Base font size in points
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// Password policy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Minimum password length in characters
    pub min_password_length: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_password_length: StrengthPolicy::default().min_length,
        }
    }
}

impl PolicyConfig {
    /// Build the strength policy this configuration describes
    pub fn strength_policy(&self) -> StrengthPolicy {
        StrengthPolicy {
            min_length: self.min_password_length,
            ..StrengthPolicy::default()
        }
    }
}

/// Configuration manager handling load and save of [`AppConfig`]
#[derive(Debug)]
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
    loaded: bool,
}

impl ConfigManager {
    /// Create a new configuration manager for the given file path
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config: AppConfig::default(),
            config_path,
            loaded: false,
        }
    }

    /// Create a manager pointing at the standard per-user config file
    pub fn with_default_path() -> Self {
        Self::new(default_config_file())
    }

    /// Load configuration from the file, keeping defaults if it is absent
    pub fn load(&mut self) -> SharedResult<()> {
        if !self.config_path.exists() {
            debug!(
                "No config file at {:?}, using defaults",
                self.config_path
            );
            self.loaded = true;
            return Ok(());
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.config = serde_yaml::from_str(&content)?;
        self.loaded = true;

        info!("Configuration loaded from {:?}", self.config_path);
        Ok(())
    }

    /// Save the current configuration to disk
    pub fn save(&self) -> SharedResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(&self.config)?;
        fs::write(&self.config_path, content)?;

        debug!("Configuration saved to {:?}", self.config_path);
        Ok(())
    }

    /// Get the current configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get mutable reference to the configuration
    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// Whether `load` has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Path of the backing file
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

/// Per-user configuration directory for passform
pub fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        })
        .join("passform")
}

/// Standard location of the configuration file
pub fn default_config_file() -> PathBuf {
    app_config_dir().join("config.yml")
}

/// Sanity-check a loaded configuration, returning human-readable findings
pub fn validate_app_config(config: &AppConfig) -> Vec<String> {
    let mut findings = Vec::new();

    if config.ui.font_size < 8.0 || config.ui.font_size > 32.0 {
        findings.push(format!(
            "ui.font_size {} outside the usable range 8-32",
            config.ui.font_size
        ));
    }

    if config.policy.min_password_length == 0 {
        findings.push("policy.min_password_length must be at least 1".to_string());
    }

    findings
}
