//! Password Flow Integration Test
//!
//! This test walks the password pair through the sequences a user actually
//! produces on the sign-up page: typing a password character by character,
//! confirming it, editing the original afterwards, and toggling visibility
//! along the way. Each step checks the derived assessment as a whole rather
//! than individual rules.

use passform_shared::{
    HelpTone, PasswordForm, PolicyConfig, Strength, StrengthEvaluator, Visibility,
};

#[test]
fn typing_a_password_walks_through_all_three_states() {
    let mut form = PasswordForm::new();

    // "a" -> "ab": still too short
    for value in ["a", "ab"] {
        form.password_changed(value.to_string());
        let a = form.assessment();
        assert_eq!(a.strength, Strength::TooShort);
        assert_eq!(a.help.text, "Password is too short.");
        assert_eq!(a.help.tone, HelpTone::Error);
        assert!(!a.password.is_valid());
    }

    // "abc" -> "abcdef": long enough, letters only
    for value in ["abc", "abcdef"] {
        form.password_changed(value.to_string());
        let a = form.assessment();
        assert_eq!(a.strength, Strength::MissingCharacterClass);
        assert_eq!(a.help.tone, HelpTone::Error);
        assert!(!a.password.is_valid());
    }

    // First digit flips the classification
    form.password_changed("abcdef1".to_string());
    let a = form.assessment();
    assert_eq!(a.strength, Strength::Strong);
    assert_eq!(a.help.text, "Strong password.");
    assert_eq!(a.help.tone, HelpTone::Success);
    assert!(a.password.is_valid());
}

#[test]
fn confirmation_tracks_password_edits() {
    let mut form = PasswordForm::new();

    form.password_changed("ab12".to_string());
    form.confirm_changed("ab1".to_string());
    assert!(!form.assessment().confirm.is_valid());

    form.confirm_changed("ab12".to_string());
    assert!(form.assessment().confirm.is_valid());
    assert!(form.is_submittable());

    // The user goes back to the password field; the confirm field is stale
    // without being touched
    form.password_changed("ab13".to_string());
    let a = form.assessment();
    assert!(!a.confirm.is_valid());
    assert_eq!(a.confirm.message(), Some("Passwords do not match."));
    assert!(!form.is_submittable());
}

#[test]
fn visibility_toggle_is_independent_of_validation() {
    let mut form = PasswordForm::new();
    form.password_changed("abc123".to_string());
    form.confirm_changed("abc123".to_string());

    assert_eq!(form.visibility(), Visibility::Masked);
    form.toggle_visibility();
    assert_eq!(form.visibility(), Visibility::Plain);
    assert!(form.is_submittable());

    form.toggle_visibility();
    assert_eq!(form.visibility(), Visibility::Masked);
    assert!(form.is_submittable());
}

#[test]
fn configured_minimum_length_applies_end_to_end() {
    let policy = PolicyConfig {
        min_password_length: 10,
    };
    let mut form = PasswordForm::with_evaluator(StrengthEvaluator::new(policy.strength_policy()));

    form.password_changed("abc123".to_string());
    form.confirm_changed("abc123".to_string());
    assert_eq!(form.assessment().strength, Strength::TooShort);
    assert!(!form.is_submittable());

    form.password_changed("abc1234567".to_string());
    form.confirm_changed("abc1234567".to_string());
    assert_eq!(form.assessment().strength, Strength::Strong);
    assert!(form.is_submittable());
}
