//! Password Strength Validation
//!
//! Shared strength classification for the sign-up form. Both the live help
//! text and the password field's validity state are derived from the single
//! classification performed here, so the feedback a user reads always agrees
//! with what the submission gate enforces.

use serde::{Deserialize, Serialize};

/// Strength policy applied to the password field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrengthPolicy {
    /// Minimum length in characters
    pub min_length: usize,
    /// Require at least one ASCII letter and one ASCII digit
    pub require_letter_and_digit: bool,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self {
            min_length: 3,
            require_letter_and_digit: true,
        }
    }
}

impl StrengthPolicy {
    /// Policy used on the sign-up page (default)
    pub fn sign_up() -> Self {
        Self::default()
    }

    /// Length-only policy, for callers that accept any character mix
    pub fn length_only(min_length: usize) -> Self {
        Self {
            min_length,
            require_letter_and_digit: false,
        }
    }
}

/// Strength classification of a password
///
/// Exactly one state applies at a time; the evaluator checks them in order
/// and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    /// Shorter than the policy minimum
    TooShort,
    /// Long enough but missing a letter or a digit
    MissingCharacterClass,
    /// Meets every rule
    Strong,
}

impl Strength {
    /// Help text shown next to the password field
    pub fn message(&self) -> &'static str {
        match self {
            Strength::TooShort => "Password is too short.",
            Strength::MissingCharacterClass => "Password must contain both letters and numbers.",
            Strength::Strong => "Strong password.",
        }
    }

    /// The tone the help text is rendered in
    pub fn tone(&self) -> HelpTone {
        match self {
            Strength::TooShort | Strength::MissingCharacterClass => HelpTone::Error,
            Strength::Strong => HelpTone::Success,
        }
    }

    /// Whether this state clears the password field for submission
    pub fn is_acceptable(&self) -> bool {
        matches!(self, Strength::Strong)
    }
}

/// Tone of a help message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTone {
    Error,
    Success,
}

impl HelpTone {
    /// Get the color associated with this tone (RGB hex)
    pub fn color_hex(&self) -> &'static str {
        match self {
            HelpTone::Error => "#dc3545",
            HelpTone::Success => "#198754",
        }
    }
}

/// Password strength evaluator
#[derive(Debug, Clone, Default)]
pub struct StrengthEvaluator {
    policy: StrengthPolicy,
}

impl StrengthEvaluator {
    /// Create a new evaluator with the given policy
    pub fn new(policy: StrengthPolicy) -> Self {
        Self { policy }
    }

    /// Create an evaluator with a configured minimum length
    pub fn from_config(min_length: usize) -> Self {
        Self::new(StrengthPolicy {
            min_length,
            ..StrengthPolicy::default()
        })
    }

    /// Get the current policy
    pub fn policy(&self) -> &StrengthPolicy {
        &self.policy
    }

    /// Classify a password, first match wins
    pub fn evaluate(&self, password: &str) -> Strength {
        if password.chars().count() < self.policy.min_length {
            return Strength::TooShort;
        }

        if self.policy.require_letter_and_digit {
            let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
            let has_digit = password.chars().any(|c| c.is_ascii_digit());

            if !has_letter || !has_digit {
                return Strength::MissingCharacterClass;
            }
        }

        Strength::Strong
    }

    /// Quick check that a password classifies as acceptable
    pub fn is_acceptable(&self, password: &str) -> bool {
        self.evaluate(password).is_acceptable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_policy() {
        let policy = StrengthPolicy::default();
        assert_eq!(policy.min_length, 3);
        assert!(policy.require_letter_and_digit);
    }

    #[test]
    fn test_short_passwords() {
        let evaluator = StrengthEvaluator::default();

        assert_matches!(evaluator.evaluate(""), Strength::TooShort);
        assert_matches!(evaluator.evaluate("a"), Strength::TooShort);
        assert_matches!(evaluator.evaluate("a1"), Strength::TooShort);
    }

    #[test]
    fn test_short_check_counts_characters_not_bytes() {
        let evaluator = StrengthEvaluator::default();

        // Two characters, six bytes
        assert_eq!(evaluator.evaluate("äö"), Strength::TooShort);
    }

    #[test]
    fn test_missing_character_class() {
        let evaluator = StrengthEvaluator::default();

        assert_eq!(evaluator.evaluate("abcdef"), Strength::MissingCharacterClass);
        assert_eq!(evaluator.evaluate("123456"), Strength::MissingCharacterClass);
        assert_eq!(evaluator.evaluate("!!!???"), Strength::MissingCharacterClass);
    }

    #[test]
    fn test_strong_passwords() {
        let evaluator = StrengthEvaluator::default();

        assert_eq!(evaluator.evaluate("abc123"), Strength::Strong);
        assert_eq!(evaluator.evaluate("ab1"), Strength::Strong);
        // Extra symbols never disqualify a strong password
        assert_eq!(evaluator.evaluate("a1!@#$%^&*"), Strength::Strong);
        assert_eq!(evaluator.evaluate("pässword1"), Strength::Strong);
    }

    #[test]
    fn test_precedence_short_wins_over_character_class() {
        let evaluator = StrengthEvaluator::default();

        // "!?" is both too short and missing both classes; length is reported
        assert_eq!(evaluator.evaluate("!?"), Strength::TooShort);
    }

    #[test]
    fn test_messages_and_tones() {
        assert_eq!(Strength::TooShort.message(), "Password is too short.");
        assert_eq!(
            Strength::MissingCharacterClass.message(),
            "Password must contain both letters and numbers."
        );
        assert_eq!(Strength::Strong.message(), "Strong password.");

        assert_eq!(Strength::TooShort.tone(), HelpTone::Error);
        assert_eq!(Strength::MissingCharacterClass.tone(), HelpTone::Error);
        assert_eq!(Strength::Strong.tone(), HelpTone::Success);

        assert!(!Strength::TooShort.is_acceptable());
        assert!(!Strength::MissingCharacterClass.is_acceptable());
        assert!(Strength::Strong.is_acceptable());
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(HelpTone::Error.color_hex(), "#dc3545");
        assert_eq!(HelpTone::Success.color_hex(), "#198754");
    }

    #[test]
    fn test_from_config() {
        let evaluator = StrengthEvaluator::from_config(8);
        assert_eq!(evaluator.policy().min_length, 8);
        assert!(evaluator.policy().require_letter_and_digit);

        assert_eq!(evaluator.evaluate("abc123"), Strength::TooShort);
        assert_eq!(evaluator.evaluate("abcd1234"), Strength::Strong);
    }

    #[test]
    fn test_length_only_policy() {
        let evaluator = StrengthEvaluator::new(StrengthPolicy::length_only(4));

        assert_eq!(evaluator.evaluate("!!!!"), Strength::Strong);
        assert_eq!(evaluator.evaluate("!!!"), Strength::TooShort);
    }
}
