//! Views for the passform Linux app

pub mod sign_up;

pub use sign_up::{SignUpMessage, SignUpView};
