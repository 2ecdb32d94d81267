//! UI Module for the passform Linux app
//!
//! This module contains the user interface for the sign-up form, including
//! the theme and the individual views.

pub mod theme;
pub mod views;

// Re-export commonly used UI items
pub use theme::{button_styles, create_passform_theme, text_input_styles, utils};
pub use views::{SignUpMessage, SignUpView};
