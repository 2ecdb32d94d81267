//! Sign-Up View for the passform Linux app
//!
//! The form view wires the shared [`PasswordForm`] controller to the iced
//! widgets: identity inputs, the password pair with live strength feedback,
//! the visibility toggle, and a submit button gated on field validity.

use iced::{
    widget::{button, column, container, row, scrollable, svg, text, text_input, Space},
    Alignment, Element, Length, Task, Theme,
};
use tracing::{debug, info, warn};

use passform_shared::{PasswordForm, StrengthEvaluator};

use crate::ui::theme::{self, button_styles, text_input_styles, utils};

/// Messages for the sign-up view
#[derive(Debug, Clone)]
pub enum SignUpMessage {
    // Identity fields
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),

    // Password pair
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    ToggleVisibility,
    FocusConfirmField,

    // Submission
    Submit,
    StartOver,
}

/// Steps of the sign-up flow
#[derive(Debug, Clone, PartialEq)]
enum SignUpStep {
    Form,
    Complete,
}

/// Sign-up view state
#[derive(Debug)]
pub struct SignUpView {
    step: SignUpStep,

    // Identity fields
    first_name: String,
    last_name: String,
    email: String,

    // Password pair controller
    password: PasswordForm,
}

impl Default for SignUpView {
    fn default() -> Self {
        Self {
            step: SignUpStep::Form,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: PasswordForm::new(),
        }
    }
}

impl SignUpView {
    /// Create a sign-up view with the given strength evaluator
    pub fn new(evaluator: StrengthEvaluator) -> Self {
        Self {
            password: PasswordForm::with_evaluator(evaluator),
            ..Self::default()
        }
    }

    /// Update view state based on message
    pub fn update(&mut self, message: SignUpMessage) -> Task<SignUpMessage> {
        match message {
            SignUpMessage::FirstNameChanged(value) => {
                self.first_name = value;
                Task::none()
            }

            SignUpMessage::LastNameChanged(value) => {
                self.last_name = value;
                Task::none()
            }

            SignUpMessage::EmailChanged(value) => {
                self.email = value;
                Task::none()
            }

            SignUpMessage::PasswordChanged(value) => {
                self.password.password_changed(value);
                Task::none()
            }

            SignUpMessage::ConfirmPasswordChanged(value) => {
                self.password.confirm_changed(value);
                Task::none()
            }

            SignUpMessage::ToggleVisibility => {
                self.password.toggle_visibility();
                debug!("Password visibility toggled to {:?}", self.password.visibility());
                Task::none()
            }

            SignUpMessage::FocusConfirmField => {
                text_input::focus(text_input::Id::new("confirm_password"))
            }

            SignUpMessage::Submit => {
                if self.can_submit() {
                    info!("Sign-up form submitted for {}", self.email);
                    self.step = SignUpStep::Complete;
                } else {
                    warn!("Attempted to submit sign-up form with invalid fields");
                }
                Task::none()
            }

            SignUpMessage::StartOver => {
                debug!("Resetting sign-up form");
                *self = Self::new(self.password.evaluator().clone());
                text_input::focus(text_input::Id::new("first_name"))
            }
        }
    }

    /// Render the view
    pub fn view(&self) -> Element<'_, SignUpMessage> {
        let content = match self.step {
            SignUpStep::Form => self.view_form(),
            SignUpStep::Complete => self.view_complete(),
        };

        scrollable(
            container(
                column![self.view_header(), content]
                    .spacing(utils::standard_spacing())
                    .padding(30)
                    .max_width(480),
            )
            .width(Length::Fill)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// Whether the form is on the completion step
    pub fn is_complete(&self) -> bool {
        self.step == SignUpStep::Complete
    }

    /// Whether every field clears the submission gate
    fn can_submit(&self) -> bool {
        self.password.is_submittable()
            && !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
    }

    fn view_header(&self) -> Element<'_, SignUpMessage> {
        row![
            svg(theme::passform_logo())
                .width(Length::Fixed(32.0))
                .height(Length::Fixed(32.0)),
            Space::with_width(Length::Fixed(10.0)),
            text("Create Your Account").size(utils::typography::large_text_size()),
        ]
        .align_y(Alignment::Center)
        .into()
    }

    fn view_form(&self) -> Element<'_, SignUpMessage> {
        let min_length = self.password.evaluator().policy().min_length;

        column![
            labeled_input(
                "First Name",
                "Enter your first name",
                &self.first_name,
                "first_name",
                SignUpMessage::FirstNameChanged,
            ),
            labeled_input(
                "Last Name",
                "Enter your last name",
                &self.last_name,
                "last_name",
                SignUpMessage::LastNameChanged,
            ),
            labeled_input(
                "Email",
                "Enter your email address",
                &self.email,
                "email",
                SignUpMessage::EmailChanged,
            ),
            // Password with strength help and visibility toggle
            column![
                text("Password").size(utils::typography::normal_text_size()),
                text_input("Enter your password", self.password.password())
                    .on_input(SignUpMessage::PasswordChanged)
                    .secure(self.password.visibility().is_masked())
                    .width(Length::Fill)
                    .padding(utils::text_input_padding())
                    .size(utils::typography::text_input_size())
                    .style(self.password_input_style())
                    .id(text_input::Id::new("password"))
                    .on_submit(SignUpMessage::FocusConfirmField),
                row![
                    self.view_password_help(min_length),
                    Space::with_width(Length::Fill),
                    utils::password_visibility_toggle(
                        self.password.visibility(),
                        SignUpMessage::ToggleVisibility,
                    ),
                ]
                .align_y(Alignment::Center),
            ]
            .spacing(5),
            // Confirmation with its validity message
            column![
                text("Confirm Password").size(utils::typography::normal_text_size()),
                text_input("Repeat your password", self.password.confirm())
                    .on_input(SignUpMessage::ConfirmPasswordChanged)
                    .secure(self.password.visibility().is_masked())
                    .width(Length::Fill)
                    .padding(utils::text_input_padding())
                    .size(utils::typography::text_input_size())
                    .style(self.confirm_input_style())
                    .id(text_input::Id::new("confirm_password"))
                    .on_submit(SignUpMessage::Submit),
                self.view_confirm_feedback(),
            ]
            .spacing(5),
            Space::with_height(Length::Fixed(10.0)),
            row![
                Space::with_width(Length::Fill),
                button("Create Account")
                    .on_press_maybe(self.can_submit().then_some(SignUpMessage::Submit))
                    .padding(utils::button_padding())
                    .style(button_styles::primary()),
            ],
        ]
        .spacing(utils::standard_spacing())
        .into()
    }

    /// Help row under the password field, hidden until the field is edited
    fn view_password_help(&self, min_length: usize) -> Element<'_, SignUpMessage> {
        if self.password.show_help() {
            let help = self.password.assessment().help;
            text(help.text)
                .size(utils::typography::small_text_size())
                .color(theme::help_tone_color(help.tone))
                .into()
        } else {
            text(format!(
                "Use at least {} characters, mixing letters and numbers.",
                min_length
            ))
            .size(utils::typography::small_text_size())
            .color(theme::LIGHT_GRAY_TEXT)
            .into()
        }
    }

    /// The confirm field's blocking message, once the field has been edited
    fn view_confirm_feedback(&self) -> Element<'_, SignUpMessage> {
        let assessment = self.password.assessment();

        if self.password.show_confirm_feedback() {
            if let Some(message) = assessment.confirm.message() {
                return text(message.to_string())
                    .size(utils::typography::small_text_size())
                    .color(theme::ERROR_RED)
                    .into();
            }
        }

        Space::with_height(Length::Shrink).into()
    }

    fn view_complete(&self) -> Element<'_, SignUpMessage> {
        column![
            svg(theme::check_icon())
                .width(Length::Fixed(64.0))
                .height(Length::Fixed(64.0)),
            Space::with_height(Length::Fixed(10.0)),
            text("Account created successfully!")
                .size(utils::typography::header_text_size()),
            text(format!(
                "Welcome, {} {}. You can now sign in with your email address.",
                self.first_name.trim(),
                self.last_name.trim()
            ))
            .size(utils::typography::normal_text_size()),
            Space::with_height(Length::Fixed(20.0)),
            button("Start Over")
                .on_press(SignUpMessage::StartOver)
                .padding(utils::button_padding())
                .style(button_styles::secondary()),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .into()
    }

    /// Border style for the password field, driven by its validity
    fn password_input_style(
        &self,
    ) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
        let show = self.password.show_help();
        let acceptable = self.password.assessment().password.is_valid();

        move |theme, status| {
            if !show {
                text_input_styles::standard()(theme, status)
            } else if acceptable {
                text_input_styles::valid()(theme, status)
            } else {
                text_input_styles::invalid()(theme, status)
            }
        }
    }

    /// Border style for the confirm field, driven by its validity
    fn confirm_input_style(
        &self,
    ) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
        let show = self.password.show_confirm_feedback();
        let matches = self.password.assessment().confirm.is_valid();

        move |theme, status| {
            if !show {
                text_input_styles::standard()(theme, status)
            } else if matches {
                text_input_styles::valid()(theme, status)
            } else {
                text_input_styles::invalid()(theme, status)
            }
        }
    }
}

/// A labelled single-line text input with the standard style
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    id: &'static str,
    on_input: impl Fn(String) -> SignUpMessage + 'a,
) -> Element<'a, SignUpMessage> {
    column![
        text(label).size(utils::typography::normal_text_size()),
        text_input(placeholder, value)
            .on_input(on_input)
            .width(Length::Fill)
            .padding(utils::text_input_padding())
            .size(utils::typography::text_input_size())
            .style(text_input_styles::standard())
            .id(text_input::Id::new(id)),
    ]
    .spacing(5)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use passform_shared::Visibility;

    fn filled_view() -> SignUpView {
        let mut view = SignUpView::default();
        let _ = view.update(SignUpMessage::FirstNameChanged("Ada".to_string()));
        let _ = view.update(SignUpMessage::LastNameChanged("Lovelace".to_string()));
        let _ = view.update(SignUpMessage::EmailChanged("ada@example.com".to_string()));
        let _ = view.update(SignUpMessage::PasswordChanged("abc123".to_string()));
        let _ = view.update(SignUpMessage::ConfirmPasswordChanged("abc123".to_string()));
        view
    }

    #[test]
    fn test_gate_requires_identity_fields() {
        let mut view = SignUpView::default();
        let _ = view.update(SignUpMessage::PasswordChanged("abc123".to_string()));
        let _ = view.update(SignUpMessage::ConfirmPasswordChanged("abc123".to_string()));
        assert!(!view.can_submit());

        let _ = view.update(SignUpMessage::FirstNameChanged("Ada".to_string()));
        let _ = view.update(SignUpMessage::LastNameChanged("Lovelace".to_string()));
        let _ = view.update(SignUpMessage::EmailChanged("ada@example.com".to_string()));
        assert!(view.can_submit());
    }

    #[test]
    fn test_submit_with_invalid_form_stays_on_form() {
        let mut view = filled_view();
        let _ = view.update(SignUpMessage::ConfirmPasswordChanged("abc124".to_string()));

        let _ = view.update(SignUpMessage::Submit);
        assert!(!view.is_complete());
        assert_matches!(view.step, SignUpStep::Form);
    }

    #[test]
    fn test_submit_with_valid_form_completes() {
        let mut view = filled_view();
        assert!(view.can_submit());

        let _ = view.update(SignUpMessage::Submit);
        assert!(view.is_complete());
    }

    #[test]
    fn test_password_edit_after_match_blocks_submit() {
        let mut view = filled_view();
        assert!(view.can_submit());

        let _ = view.update(SignUpMessage::PasswordChanged("abc124".to_string()));
        assert!(!view.can_submit());
    }

    #[test]
    fn test_visibility_round_trip() {
        let mut view = SignUpView::default();
        assert_eq!(view.password.visibility(), Visibility::Masked);

        let _ = view.update(SignUpMessage::ToggleVisibility);
        assert_eq!(view.password.visibility(), Visibility::Plain);

        let _ = view.update(SignUpMessage::ToggleVisibility);
        assert_eq!(view.password.visibility(), Visibility::Masked);
    }

    #[test]
    fn test_start_over_resets_fields() {
        let mut view = filled_view();
        let _ = view.update(SignUpMessage::Submit);
        assert!(view.is_complete());

        let _ = view.update(SignUpMessage::StartOver);
        assert!(!view.is_complete());
        assert!(view.first_name.is_empty());
        assert!(view.password.password().is_empty());
        assert!(!view.can_submit());
    }
}
