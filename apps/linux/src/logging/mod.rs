//! Logging configuration for the passform Linux app
//!
//! Structured logging with console and rotating-file output. Levels and
//! destinations differ between development and production; the environment is
//! picked up from `PASSFORM_ENV` / `RUST_ENV` with a debug-build fallback.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Logging configuration for the application
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory where log files will be stored
    pub log_dir: PathBuf,
    /// Base name for log files
    pub log_file_name: String,
    /// Log level for console output
    pub console_level: String,
    /// Log level for file output
    pub file_level: String,
    /// Whether to enable console logging
    pub enable_console: bool,
    /// Whether to enable file logging
    pub enable_file: bool,
    /// Whether to include thread IDs in logs
    pub include_thread_ids: bool,
    /// Whether to include source code locations in logs
    pub include_source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: get_default_log_dir(),
            log_file_name: "passform".to_string(),
            console_level: "INFO".to_string(),
            file_level: "DEBUG".to_string(),
            enable_console: true,
            enable_file: true,
            include_thread_ids: false,
            include_source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration with a custom log directory
    pub fn new(log_dir: PathBuf) -> Self {
        Self {
            log_dir,
            ..Default::default()
        }
    }

    /// Create development configuration with more verbose logging
    pub fn development() -> Self {
        Self {
            console_level: "DEBUG".to_string(),
            file_level: "TRACE".to_string(),
            include_thread_ids: true,
            include_source_location: true,
            ..Default::default()
        }
    }

    /// Create production configuration with quieter console output
    pub fn production() -> Self {
        Self {
            console_level: "WARN".to_string(),
            file_level: "INFO".to_string(),
            include_thread_ids: false,
            include_source_location: false,
            ..Default::default()
        }
    }

    /// Get the full path to the current log file
    pub fn current_log_file(&self) -> PathBuf {
        self.log_dir.join(format!("{}.log", self.log_file_name))
    }
}

/// Initialize logging with the given configuration
pub fn initialize_logging(config: LoggingConfig) -> Result<()> {
    if config.enable_file {
        fs::create_dir_all(&config.log_dir)
            .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;
    }

    let mut layers = Vec::new();

    // Console layer
    if config.enable_console {
        let console_filter =
            EnvFilter::try_new(&config.console_level).unwrap_or_else(|_| EnvFilter::new("INFO"));

        let console_layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_writer(std::io::stdout)
            .with_filter(console_filter);

        layers.push(console_layer.boxed());
    }

    // File layer with daily rotation
    if config.enable_file {
        let file_filter =
            EnvFilter::try_new(&config.file_level).unwrap_or_else(|_| EnvFilter::new("DEBUG"));

        let file_appender =
            tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(file_filter);

        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    info!("Passform logging initialized");
    info!(
        "Console logging: {} (level: {})",
        config.enable_console, config.console_level
    );
    info!(
        "File logging: {} (level: {}) at {:?}",
        config.enable_file, config.file_level, config.log_dir
    );

    Ok(())
}

/// Initialize logging using the environment's default configuration
pub fn initialize_default_logging() -> Result<()> {
    initialize_logging(default_config_for_environment(&get_environment()))
}

/// Get the current environment name
pub fn get_environment() -> String {
    std::env::var("PASSFORM_ENV")
        .or_else(|_| std::env::var("RUST_ENV"))
        .unwrap_or_else(|_| {
            if is_development_environment() {
                "development".to_string()
            } else {
                "production".to_string()
            }
        })
}

/// Get default configuration for an environment
fn default_config_for_environment(environment: &str) -> LoggingConfig {
    match environment {
        "development" | "dev" => LoggingConfig::development(),
        "production" | "prod" => LoggingConfig::production(),
        "testing" | "test" => LoggingConfig {
            console_level: "DEBUG".to_string(),
            file_level: "DEBUG".to_string(),
            log_dir: PathBuf::from("./target/test-logs"),
            include_thread_ids: true,
            include_source_location: true,
            ..Default::default()
        },
        _ => LoggingConfig::default(),
    }
}

/// Get the default log directory
pub fn get_default_log_dir() -> PathBuf {
    if let Some(cache_dir) = dirs::cache_dir() {
        cache_dir.join("passform").join("logs")
    } else {
        PathBuf::from("/tmp/passform/logs")
    }
}

/// Check if we're running in a development environment
pub fn is_development_environment() -> bool {
    std::env::var("PASSFORM_ENV").unwrap_or_default() == "development"
        || std::env::var("RUST_ENV").unwrap_or_default() == "development"
        || cfg!(debug_assertions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_logging_config() {
        let config = LoggingConfig::default();
        assert!(config.enable_console);
        assert!(config.enable_file);
        assert_eq!(config.console_level, "INFO");
        assert_eq!(config.file_level, "DEBUG");
    }

    #[test]
    fn test_development_config() {
        let config = LoggingConfig::development();
        assert_eq!(config.console_level, "DEBUG");
        assert_eq!(config.file_level, "TRACE");
        assert!(config.include_thread_ids);
        assert!(config.include_source_location);
    }

    #[test]
    fn test_production_config() {
        let config = LoggingConfig::production();
        assert_eq!(config.console_level, "WARN");
        assert_eq!(config.file_level, "INFO");
        assert!(!config.include_thread_ids);
        assert!(!config.include_source_location);
    }

    #[test]
    fn test_log_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let config = LoggingConfig::new(temp_dir.path().to_path_buf());

        let expected_path = temp_dir.path().join("passform.log");
        assert_eq!(config.current_log_file(), expected_path);
    }

    #[test]
    fn test_log_directory_creation() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");

        let config = LoggingConfig::new(log_dir.clone());
        assert!(!log_dir.exists());

        initialize_logging(config).unwrap();
        assert!(log_dir.exists());
    }

    #[test]
    fn test_environment_detection() {
        let env = get_environment();
        assert!(!env.is_empty());
    }
}
