//! Password Form Controller
//!
//! State tracking for the password / confirm-password pair on the sign-up
//! form. The controller owns the raw field values and the visibility state;
//! everything the UI displays is derived through [`assess`], a pure function
//! over the current values. Deriving rather than caching keeps the confirm
//! field's validity consistent with the password after any keystroke in
//! either field.

use crate::validation::{HelpTone, Strength, StrengthEvaluator};

/// Validity state of a single form field
///
/// Mirrors the constraint-validation model: a field carries a human-readable
/// reason string while invalid and an empty message while valid. The
/// submission gate only opens when every field's message is clear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValidity(String);

impl FieldValidity {
    /// A field with no outstanding validation message
    pub fn valid() -> Self {
        Self(String::new())
    }

    /// A field blocked by the given message
    pub fn invalid(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// The blocking message, if any
    pub fn message(&self) -> Option<&str> {
        if self.0.is_empty() {
            None
        } else {
            Some(&self.0)
        }
    }
}

/// Help text displayed under the password field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpMessage {
    pub text: &'static str,
    pub tone: HelpTone,
}

/// Everything the UI needs to render the password pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormAssessment {
    /// Strength classification of the password
    pub strength: Strength,
    /// Help text and tone derived from the strength
    pub help: HelpMessage,
    /// Validity of the password field
    pub password: FieldValidity,
    /// Validity of the confirm field
    pub confirm: FieldValidity,
}

impl FormAssessment {
    /// Whether both fields clear the submission gate
    pub fn is_submittable(&self) -> bool {
        self.password.is_valid() && self.confirm.is_valid()
    }
}

/// Display mode of the password inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Characters are obscured
    #[default]
    Masked,
    /// Characters are shown as typed
    Plain,
}

impl Visibility {
    /// The opposite mode; flipping twice restores the original
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Plain,
            Visibility::Plain => Visibility::Masked,
        }
    }

    pub fn is_masked(self) -> bool {
        matches!(self, Visibility::Masked)
    }
}

/// Classify the password and check the confirmation in one pass
///
/// The confirm check runs unconditionally: a password edit can invalidate a
/// confirmation that matched the previous value without the confirm field
/// ever being touched.
pub fn assess(evaluator: &StrengthEvaluator, password: &str, confirm: &str) -> FormAssessment {
    let strength = evaluator.evaluate(password);

    let password_validity = if strength.is_acceptable() {
        FieldValidity::valid()
    } else {
        FieldValidity::invalid(strength.message())
    };

    FormAssessment {
        strength,
        help: HelpMessage {
            text: strength.message(),
            tone: strength.tone(),
        },
        password: password_validity,
        confirm: confirm_validity(password, confirm),
    }
}

/// Exact string comparison, case-sensitive, no trimming
fn confirm_validity(password: &str, confirm: &str) -> FieldValidity {
    if password == confirm {
        FieldValidity::valid()
    } else {
        FieldValidity::invalid("Passwords do not match.")
    }
}

/// Controller for the password pair on the sign-up form
///
/// Holds the field values, the visibility state, and per-field touched flags
/// the view uses to decide when feedback becomes visible.
#[derive(Debug, Clone, Default)]
pub struct PasswordForm {
    evaluator: StrengthEvaluator,
    password: String,
    confirm: String,
    visibility: Visibility,
    password_touched: bool,
    confirm_touched: bool,
}

impl PasswordForm {
    /// Create a controller with the default strength policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with a specific evaluator
    pub fn with_evaluator(evaluator: StrengthEvaluator) -> Self {
        Self {
            evaluator,
            ..Self::default()
        }
    }

    /// Record a new password value
    pub fn password_changed(&mut self, value: String) {
        self.password = value;
        self.password_touched = true;
    }

    /// Record a new confirmation value
    pub fn confirm_changed(&mut self, value: String) {
        self.confirm = value;
        self.confirm_touched = true;
    }

    /// Flip between masked and plain-text display
    pub fn toggle_visibility(&mut self) {
        self.visibility = self.visibility.flipped();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm(&self) -> &str {
        &self.confirm
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The evaluator backing this form
    pub fn evaluator(&self) -> &StrengthEvaluator {
        &self.evaluator
    }

    /// Whether the help row should be rendered yet
    pub fn show_help(&self) -> bool {
        self.password_touched
    }

    /// Whether confirm-field feedback should be rendered yet
    pub fn show_confirm_feedback(&self) -> bool {
        self.confirm_touched
    }

    /// Derive the current assessment from the field values
    pub fn assessment(&self) -> FormAssessment {
        assess(&self.evaluator, &self.password, &self.confirm)
    }

    /// Whether the password pair clears the submission gate
    pub fn is_submittable(&self) -> bool {
        self.assessment().is_submittable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::StrengthPolicy;

    fn default_assess(password: &str, confirm: &str) -> FormAssessment {
        assess(&StrengthEvaluator::default(), password, confirm)
    }

    #[test]
    fn test_worked_examples() {
        let a = default_assess("ab", "");
        assert_eq!(a.strength, Strength::TooShort);
        assert_eq!(a.help.text, "Password is too short.");
        assert_eq!(a.help.tone, HelpTone::Error);
        assert!(!a.password.is_valid());

        let a = default_assess("abcdef", "");
        assert_eq!(a.strength, Strength::MissingCharacterClass);
        assert_eq!(a.help.text, "Password must contain both letters and numbers.");
        assert_eq!(a.help.tone, HelpTone::Error);
        assert!(!a.password.is_valid());

        let a = default_assess("abc123", "abc123");
        assert_eq!(a.strength, Strength::Strong);
        assert_eq!(a.help.text, "Strong password.");
        assert_eq!(a.help.tone, HelpTone::Success);
        assert!(a.password.is_valid());
    }

    #[test]
    fn test_password_validity_carries_strength_message() {
        let a = default_assess("ab", "");
        assert_eq!(a.password.message(), Some("Password is too short."));

        let a = default_assess("abcdef", "");
        assert_eq!(
            a.password.message(),
            Some("Password must contain both letters and numbers.")
        );
    }

    #[test]
    fn test_confirm_match_including_both_empty() {
        assert!(default_assess("", "").confirm.is_valid());
        assert!(default_assess("abc123", "abc123").confirm.is_valid());
    }

    #[test]
    fn test_confirm_mismatch() {
        let a = default_assess("abc123", "abc124");
        assert!(!a.confirm.is_valid());
        assert_eq!(a.confirm.message(), Some("Passwords do not match."));

        // Case-sensitive, no trimming
        assert!(!default_assess("abc123", "ABC123").confirm.is_valid());
        assert!(!default_assess("abc123", "abc123 ").confirm.is_valid());
    }

    #[test]
    fn test_password_edit_revalidates_confirm() {
        let mut form = PasswordForm::new();
        form.password_changed("ab12".to_string());
        form.confirm_changed("ab12".to_string());
        assert!(form.assessment().confirm.is_valid());

        // Editing only the password flips the untouched confirm field
        form.password_changed("ab13".to_string());
        let a = form.assessment();
        assert!(!a.confirm.is_valid());
        assert_eq!(a.confirm.message(), Some("Passwords do not match."));
    }

    #[test]
    fn test_submission_gate() {
        let mut form = PasswordForm::new();
        assert!(!form.is_submittable());

        form.password_changed("abc123".to_string());
        form.confirm_changed("abc123".to_string());
        assert!(form.is_submittable());

        form.confirm_changed("abc12".to_string());
        assert!(!form.is_submittable());

        // A matching pair still fails the gate while the password is weak
        form.password_changed("abcdef".to_string());
        form.confirm_changed("abcdef".to_string());
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_visibility_double_toggle_restores_state() {
        let mut form = PasswordForm::new();
        assert_eq!(form.visibility(), Visibility::Masked);

        form.toggle_visibility();
        assert_eq!(form.visibility(), Visibility::Plain);
        assert!(!form.visibility().is_masked());

        form.toggle_visibility();
        assert_eq!(form.visibility(), Visibility::Masked);
    }

    #[test]
    fn test_toggle_leaves_values_and_validity_alone() {
        let mut form = PasswordForm::new();
        form.password_changed("abc123".to_string());
        form.confirm_changed("abc123".to_string());
        let before = form.assessment();

        form.toggle_visibility();
        assert_eq!(form.password(), "abc123");
        assert_eq!(form.confirm(), "abc123");
        assert_eq!(form.assessment(), before);
    }

    #[test]
    fn test_feedback_hidden_until_touched() {
        let mut form = PasswordForm::new();
        assert!(!form.show_help());
        assert!(!form.show_confirm_feedback());

        form.password_changed("a".to_string());
        assert!(form.show_help());
        assert!(!form.show_confirm_feedback());

        // Deleting back to empty keeps the help row visible
        form.password_changed(String::new());
        assert!(form.show_help());
        assert_eq!(form.assessment().strength, Strength::TooShort);

        form.confirm_changed("a".to_string());
        assert!(form.show_confirm_feedback());
    }

    #[test]
    fn test_custom_policy_flows_through_controller() {
        let evaluator = StrengthEvaluator::new(StrengthPolicy {
            min_length: 8,
            require_letter_and_digit: true,
        });
        let mut form = PasswordForm::with_evaluator(evaluator);

        form.password_changed("abc123".to_string());
        form.confirm_changed("abc123".to_string());
        assert_eq!(form.assessment().strength, Strength::TooShort);
        assert!(!form.is_submittable());

        form.password_changed("abcd1234".to_string());
        form.confirm_changed("abcd1234".to_string());
        assert!(form.is_submittable());
    }
}
