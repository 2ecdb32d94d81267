//! Passform Shared Library
//!
//! This crate contains the logic behind the passform sign-up form: password
//! strength classification, confirm-password matching, per-field validity
//! state, and application configuration. The GUI crates render what this
//! library computes and never re-implement any of the rules.
//!
//! # Features
//!
//! - **Strength Evaluation**: Three-state password classification with
//!   human-readable feedback
//! - **Form Controller**: Field state tracking with a submission gate that
//!   mirrors browser constraint validation
//! - **Configuration**: YAML-backed application settings with sane defaults
//!
//! # Usage
//!
//! ```rust
//! use passform_shared::{PasswordForm, Strength};
//!
//! let mut form = PasswordForm::new();
//! form.password_changed("abc123".to_string());
//! form.confirm_changed("abc123".to_string());
//!
//! let assessment = form.assessment();
//! assert_eq!(assessment.strength, Strength::Strong);
//! assert!(assessment.password.is_valid());
//! assert!(assessment.confirm.is_valid());
//! ```

pub mod config;
pub mod form;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ConfigManager, PolicyConfig, UiConfig};
pub use form::{assess, FieldValidity, FormAssessment, HelpMessage, PasswordForm, Visibility};
pub use validation::{HelpTone, Strength, StrengthEvaluator, StrengthPolicy};

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types used throughout the library
pub mod error {
    use thiserror::Error;

    /// Common error type for shared library operations
    #[derive(Error, Debug)]
    pub enum SharedError {
        #[error("Validation error: {message}")]
        Validation { message: String },

        #[error("Configuration error: {message}")]
        Config { message: String },

        #[error("Serialization error: {0}")]
        Serialization(#[from] serde_yaml::Error),

        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),
    }

    /// Result type alias for shared library operations
    pub type SharedResult<T> = Result<T, SharedError>;
}

pub use error::{SharedError, SharedResult};
