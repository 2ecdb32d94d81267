//! Theme and styling for the passform Linux app
//!
//! Custom theme implementation with the passform palette and the style
//! functions shared by all views.
//!
//! ## Icon Attribution
//! Icons used in this application follow Iconoir (https://iconoir.com/),
//! a collection of free SVG icons by Luca Burgio and contributors.
//! Licensed under MIT License.

use iced::{
    widget::{button, svg, text_input},
    Background, Border, Color, Shadow, Theme,
};

use passform_shared::HelpTone;

/// Embedded passform logo SVG for use across all views
pub const PASSFORM_LOGO_SVG: &[u8] = include_bytes!("../../resources/icons/passform-logo.svg");

/// Embedded eye icon SVG for the password visibility toggle
pub const EYE_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/eye.svg");

/// Embedded eye-off icon SVG for the password visibility toggle
pub const EYE_OFF_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/eye-off.svg");

/// Embedded check icon SVG for the completion view
pub const CHECK_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/check.svg");

/// Embedded error icon SVG for the startup error view
pub const ERROR_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/error.svg");

// Icon helper functions
pub fn passform_logo() -> svg::Handle {
    svg::Handle::from_memory(PASSFORM_LOGO_SVG)
}

pub fn eye_icon() -> svg::Handle {
    svg::Handle::from_memory(EYE_ICON_SVG)
}

pub fn eye_off_icon() -> svg::Handle {
    svg::Handle::from_memory(EYE_OFF_ICON_SVG)
}

pub fn check_icon() -> svg::Handle {
    svg::Handle::from_memory(CHECK_ICON_SVG)
}

pub fn error_icon() -> svg::Handle {
    svg::Handle::from_memory(ERROR_ICON_SVG)
}

// Passform palette (#0d6efd / #dc3545 / #198754 family)
/// Accent blue (#0d6efd)
pub const ACCENT_BLUE: Color = Color::from_rgb(0.051, 0.431, 0.992);

/// Accent blue hover state (slightly darker)
pub const ACCENT_BLUE_HOVER: Color = Color::from_rgb(0.043, 0.369, 0.875);

/// Accent blue pressed state (even darker)
pub const ACCENT_BLUE_PRESSED: Color = Color::from_rgb(0.039, 0.322, 0.761);

/// Accent blue with low opacity for hover backgrounds
pub const ACCENT_BLUE_LIGHT: Color = Color::from_rgba(0.051, 0.431, 0.992, 0.1);

/// Accent blue with very light opacity for subtle backgrounds
pub const ACCENT_BLUE_SUBTLE: Color = Color::from_rgba(0.051, 0.431, 0.992, 0.05);

/// Success/valid color (#198754)
pub const SUCCESS_GREEN: Color = Color::from_rgb(0.098, 0.529, 0.329);

/// Error/invalid color (#dc3545)
pub const ERROR_RED: Color = Color::from_rgb(0.863, 0.208, 0.271);

/// Light background color (#f8f9fa)
pub const LIGHT_BACKGROUND: Color = Color::from_rgb(0.973, 0.976, 0.98);

/// Dark text color (#212529)
pub const DARK_TEXT: Color = Color::from_rgb(0.129, 0.145, 0.161);

/// White color constant
pub const WHITE: Color = Color::WHITE;

/// Transparent color constant
pub const TRANSPARENT: Color = Color::TRANSPARENT;

/// Disabled background color (light gray)
pub const DISABLED_BACKGROUND: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Disabled text color (medium gray)
pub const DISABLED_TEXT: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Disabled border color (darker gray)
pub const DISABLED_BORDER: Color = Color::from_rgb(0.7, 0.7, 0.7);

/// Standard shadow color (black with low opacity)
pub const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.1);

/// Light gray text color for hint text
pub const LIGHT_GRAY_TEXT: Color = Color::from_rgb(0.6, 0.6, 0.6);

/// Light gray border color for text inputs
pub const LIGHT_GRAY_BORDER: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Medium gray color for icons and placeholders
pub const MEDIUM_GRAY: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Very light gray background for disabled inputs
pub const VERY_LIGHT_GRAY: Color = Color::from_rgb(0.95, 0.95, 0.95);

/// Theme color for a help message tone
pub fn help_tone_color(tone: HelpTone) -> Color {
    match tone {
        HelpTone::Error => ERROR_RED,
        HelpTone::Success => SUCCESS_GREEN,
    }
}

/// Creates the passform custom theme
pub fn create_passform_theme() -> Theme {
    Theme::custom(
        "Passform".to_string(),
        iced::theme::Palette {
            background: LIGHT_BACKGROUND,
            text: DARK_TEXT,
            primary: ACCENT_BLUE,
            success: SUCCESS_GREEN,
            danger: ERROR_RED,
        },
    )
}

/// Custom button style functions for consistent styling across views
pub mod button_styles {
    use super::*;

    /// Primary button style using the accent blue
    pub fn primary() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| match status {
            button::Status::Active => button::Style {
                background: Some(Background::Color(ACCENT_BLUE)),
                text_color: WHITE,
                border: Border {
                    color: ACCENT_BLUE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: iced::Vector::new(0.0, 2.0),
                    blur_radius: 4.0,
                },
            },
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(ACCENT_BLUE_HOVER)),
                text_color: WHITE,
                border: Border {
                    color: ACCENT_BLUE_HOVER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: iced::Vector::new(0.0, 2.0),
                    blur_radius: 4.0,
                },
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(ACCENT_BLUE_PRESSED)),
                text_color: WHITE,
                border: Border {
                    color: ACCENT_BLUE_PRESSED,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: iced::Vector::new(0.0, 1.0),
                    blur_radius: 2.0,
                },
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(DISABLED_BACKGROUND)),
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
        }
    }

    /// Secondary button style with an accent-blue border
    pub fn secondary() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| match status {
            button::Status::Active => button::Style {
                background: Some(Background::Color(TRANSPARENT)),
                text_color: ACCENT_BLUE,
                border: Border {
                    color: ACCENT_BLUE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(ACCENT_BLUE_LIGHT)),
                text_color: ACCENT_BLUE,
                border: Border {
                    color: ACCENT_BLUE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(ACCENT_BLUE_LIGHT)),
                text_color: ACCENT_BLUE_PRESSED,
                border: Border {
                    color: ACCENT_BLUE_PRESSED,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(TRANSPARENT)),
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
        }
    }

    /// Password toggle button style for the masked state (password hidden)
    pub fn password_toggle_inactive() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| match status {
            button::Status::Active => button::Style {
                background: Some(Background::Color(VERY_LIGHT_GRAY)),
                text_color: ACCENT_BLUE,
                border: Border {
                    color: LIGHT_GRAY_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(ACCENT_BLUE_SUBTLE)),
                text_color: ACCENT_BLUE,
                border: Border {
                    color: ACCENT_BLUE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(ACCENT_BLUE_LIGHT)),
                text_color: ACCENT_BLUE,
                border: Border {
                    color: ACCENT_BLUE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(DISABLED_BACKGROUND)),
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
        }
    }

    /// Password toggle button style for the plain state (password shown)
    pub fn password_toggle_active() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| match status {
            button::Status::Active => button::Style {
                background: Some(Background::Color(ACCENT_BLUE)),
                text_color: WHITE,
                border: Border {
                    color: ACCENT_BLUE,
                    width: 2.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(ACCENT_BLUE_HOVER)),
                text_color: WHITE,
                border: Border {
                    color: ACCENT_BLUE_HOVER,
                    width: 2.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(ACCENT_BLUE_PRESSED)),
                text_color: WHITE,
                border: Border {
                    color: ACCENT_BLUE_PRESSED,
                    width: 2.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(DISABLED_BACKGROUND)),
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

/// Custom text input styles for validation states
pub mod text_input_styles {
    use super::*;

    /// Standard text input style
    pub fn standard() -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
        |_theme, status| match status {
            text_input::Status::Active => text_input::Style {
                background: Background::Color(WHITE),
                border: Border {
                    color: LIGHT_GRAY_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DARK_TEXT,
                selection: ACCENT_BLUE,
            },
            text_input::Status::Hovered => text_input::Style {
                background: Background::Color(WHITE),
                border: Border {
                    color: ACCENT_BLUE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DARK_TEXT,
                selection: ACCENT_BLUE,
            },
            text_input::Status::Focused => text_input::Style {
                background: Background::Color(WHITE),
                border: Border {
                    color: ACCENT_BLUE,
                    width: 2.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DARK_TEXT,
                selection: ACCENT_BLUE,
            },
            text_input::Status::Disabled => text_input::Style {
                background: Background::Color(VERY_LIGHT_GRAY),
                border: Border {
                    color: LIGHT_GRAY_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DISABLED_TEXT,
                selection: DISABLED_TEXT,
            },
        }
    }

    /// Valid text input style (green border)
    pub fn valid() -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
        |_theme, status| match status {
            text_input::Status::Active => text_input::Style {
                background: Background::Color(WHITE),
                border: Border {
                    color: SUCCESS_GREEN,
                    width: 2.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DARK_TEXT,
                selection: SUCCESS_GREEN,
            },
            text_input::Status::Hovered => text_input::Style {
                background: Background::Color(WHITE),
                border: Border {
                    color: SUCCESS_GREEN,
                    width: 2.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DARK_TEXT,
                selection: SUCCESS_GREEN,
            },
            text_input::Status::Focused => text_input::Style {
                background: Background::Color(WHITE),
                border: Border {
                    color: SUCCESS_GREEN,
                    width: 3.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DARK_TEXT,
                selection: SUCCESS_GREEN,
            },
            text_input::Status::Disabled => text_input::Style {
                background: Background::Color(VERY_LIGHT_GRAY),
                border: Border {
                    color: LIGHT_GRAY_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DISABLED_TEXT,
                selection: DISABLED_TEXT,
            },
        }
    }

    /// Invalid text input style (red border)
    pub fn invalid() -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
        |_theme, status| match status {
            text_input::Status::Active => text_input::Style {
                background: Background::Color(WHITE),
                border: Border {
                    color: ERROR_RED,
                    width: 2.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DARK_TEXT,
                selection: ERROR_RED,
            },
            text_input::Status::Hovered => text_input::Style {
                background: Background::Color(WHITE),
                border: Border {
                    color: ERROR_RED,
                    width: 2.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DARK_TEXT,
                selection: ERROR_RED,
            },
            text_input::Status::Focused => text_input::Style {
                background: Background::Color(WHITE),
                border: Border {
                    color: ERROR_RED,
                    width: 3.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DARK_TEXT,
                selection: ERROR_RED,
            },
            text_input::Status::Disabled => text_input::Style {
                background: Background::Color(VERY_LIGHT_GRAY),
                border: Border {
                    color: LIGHT_GRAY_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                icon: MEDIUM_GRAY,
                placeholder: MEDIUM_GRAY,
                value: DISABLED_TEXT,
                selection: DISABLED_TEXT,
            },
        }
    }
}

/// Utility functions for consistent spacing, sizing, and styling
pub mod utils {
    use iced::Padding;

    use passform_shared::Visibility;

    /// Creates a consistent spacing value for UI elements
    pub fn standard_spacing() -> u16 {
        20
    }

    /// Creates a consistent padding value for buttons
    pub fn button_padding() -> Padding {
        Padding::from([10, 20])
    }

    /// Creates a consistent padding value for text inputs
    pub fn text_input_padding() -> Padding {
        Padding::from([10, 15])
    }

    /// Creates a consistent padding value for password visibility toggle buttons
    pub fn password_toggle_padding() -> Padding {
        Padding::from([8, 12])
    }

    /// Creates a consistent border radius for UI elements
    pub fn border_radius() -> f32 {
        10.0
    }

    /// Creates a password visibility toggle button with the paired eye icon
    ///
    /// The icon and style swap together: plain text shows the open eye on an
    /// accent background, masked text shows the slashed eye on a neutral one.
    pub fn password_visibility_toggle<'a, Message: Clone + 'a>(
        visibility: Visibility,
        on_toggle: Message,
    ) -> iced::widget::Button<'a, Message> {
        use iced::widget::{button, svg};

        let icon = if visibility.is_masked() {
            super::eye_off_icon()
        } else {
            super::eye_icon()
        };

        button(
            svg(icon)
                .width(iced::Length::Fixed(16.0))
                .height(iced::Length::Fixed(16.0)),
        )
        .on_press(on_toggle)
        .style(move |theme, status| {
            if visibility.is_masked() {
                super::button_styles::password_toggle_inactive()(theme, status)
            } else {
                super::button_styles::password_toggle_active()(theme, status)
            }
        })
        .padding(password_toggle_padding())
    }

    /// Typography utilities for consistent font sizing
    pub mod typography {
        use std::sync::OnceLock;

        static FONT_SIZE: OnceLock<f32> = OnceLock::new();

        /// Initialize the global font size
        pub fn init_font_size(size: f32) {
            let _ = FONT_SIZE.set(size);
        }

        /// Get the base font size, defaulting to 14.0 if not set
        fn base_font_size() -> f32 {
            *FONT_SIZE.get().unwrap_or(&14.0)
        }

        /// Get normal text size
        pub fn normal_text_size() -> f32 {
            base_font_size()
        }

        /// Get text input size
        pub fn text_input_size() -> f32 {
            base_font_size()
        }

        /// Get small text size (smaller than normal)
        pub fn small_text_size() -> f32 {
            base_font_size() - 2.0
        }

        /// Get medium text size (slightly larger than normal)
        pub fn medium_text_size() -> f32 {
            base_font_size() + 2.0
        }

        /// Get header text size (larger than medium)
        pub fn header_text_size() -> f32 {
            base_font_size() + 4.0
        }

        /// Get large text size (for view titles)
        pub fn large_text_size() -> f32 {
            base_font_size() + 10.0
        }
    }
}
