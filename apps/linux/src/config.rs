//! Configuration management for the passform Linux app
//!
//! Thin wrapper around the shared configuration manager, pinning it to the
//! per-user config file and adapting errors to the app boundary.

use anyhow::Result;
use tracing::{debug, info, warn};

pub use passform_shared::AppConfig;
use passform_shared::{config::validate_app_config, ConfigManager as SharedConfigManager};

/// Linux app configuration manager
pub struct ConfigManager {
    shared_manager: SharedConfigManager,
}

impl ConfigManager {
    /// Create a configuration manager and load the per-user config file
    pub fn new() -> Result<Self> {
        debug!("Creating Linux app configuration manager");

        let mut shared_manager = SharedConfigManager::with_default_path();
        debug!("Config file path: {:?}", shared_manager.config_path());

        shared_manager
            .load()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        for finding in validate_app_config(shared_manager.config()) {
            warn!("Configuration issue: {}", finding);
        }

        info!("Configuration manager initialized successfully");
        Ok(Self { shared_manager })
    }

    /// Get the current configuration
    pub fn config(&self) -> &AppConfig {
        self.shared_manager.config()
    }

    /// Get mutable reference to the configuration
    #[allow(dead_code)] // Public API for future use
    pub fn config_mut(&mut self) -> &mut AppConfig {
        self.shared_manager.config_mut()
    }

    /// Save the current configuration to disk
    #[allow(dead_code)] // Public API for future use
    pub fn save(&self) -> Result<()> {
        self.shared_manager
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to save config: {}", e))
    }
}
