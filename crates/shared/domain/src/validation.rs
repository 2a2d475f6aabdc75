//! Signup form validation rules.
//!
//! The composite predicates and the derived [`ValidationState`] are pure
//! functions of settled field values. The reactive pipeline decides *when*
//! they run; this module decides *what* they compute.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::constants::{
    MIN_USERNAME_LENGTH, PASSWORDS_DONT_MATCH_MESSAGE, PASSWORD_EMPTY_MESSAGE,
    PASSWORD_NOT_STRONG_ENOUGH_MESSAGE, USERNAME_TOO_SHORT_MESSAGE,
};
use crate::strength::{grade_or_weakest, StrengthClassifier, StrengthLevel};

/// Outcome of evaluating the password field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordCheck {
    Valid,
    Empty,
    NoMatch,
    NotStrongEnough,
}

impl PasswordCheck {
    /// Resolve the password predicates with fixed precedence:
    /// empty, then mismatch, then strength.
    pub fn evaluate(is_empty: bool, are_equal: bool, is_strong_enough: bool) -> Self {
        if is_empty {
            PasswordCheck::Empty
        } else if !are_equal {
            PasswordCheck::NoMatch
        } else if !is_strong_enough {
            PasswordCheck::NotStrongEnough
        } else {
            PasswordCheck::Valid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, PasswordCheck::Valid)
    }

    /// User-facing message, empty when valid
    pub fn message(&self) -> &'static str {
        match self {
            PasswordCheck::Empty => PASSWORD_EMPTY_MESSAGE,
            PasswordCheck::NoMatch => PASSWORDS_DONT_MATCH_MESSAGE,
            PasswordCheck::NotStrongEnough => PASSWORD_NOT_STRONG_ENOUGH_MESSAGE,
            PasswordCheck::Valid => "",
        }
    }
}

/// Externally observable form state.
///
/// Always published as a whole so the messages and `is_form_valid` never
/// disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationState {
    pub username_message: String,
    pub password_message: String,
    pub is_form_valid: bool,
}

impl ValidationState {
    /// Derive the aggregate from username validity and the password check
    pub fn derive(username_is_valid: bool, password_check: PasswordCheck) -> Self {
        Self {
            username_message: if username_is_valid {
                String::new()
            } else {
                USERNAME_TOO_SHORT_MESSAGE.to_string()
            },
            password_message: password_check.message().to_string(),
            is_form_valid: username_is_valid && password_check.is_valid(),
        }
    }
}

/// Snapshot of the three settled field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettledFields {
    pub username: String,
    pub password: String,
    pub confirmation: String,
}

impl SettledFields {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            confirmation: confirmation.into(),
        }
    }
}

/// Tunable parts of the validation rules.
///
/// Username length is always [`MIN_USERNAME_LENGTH`], the length its
/// message names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Weakest grade that still counts as strong enough
    pub strength_threshold: StrengthLevel,
}

impl ValidationRules {
    pub fn username_is_valid(&self, username: &str) -> bool {
        username.graphemes(true).count() >= MIN_USERNAME_LENGTH
    }

    pub fn password_is_empty(password: &str) -> bool {
        password.is_empty()
    }

    pub fn passwords_are_equal(password: &str, confirmation: &str) -> bool {
        password == confirmation
    }

    pub fn is_strong_enough(&self, grade: StrengthLevel) -> bool {
        grade.meets(self.strength_threshold)
    }

    /// Grade a password and compare it to the threshold, failing closed.
    pub fn password_is_strong_enough(
        &self,
        classifier: &dyn StrengthClassifier,
        password: &str,
    ) -> bool {
        self.is_strong_enough(grade_or_weakest(classifier, password))
    }

    /// Evaluate the password predicates over a snapshot
    pub fn check_password(
        &self,
        fields: &SettledFields,
        classifier: &dyn StrengthClassifier,
    ) -> PasswordCheck {
        PasswordCheck::evaluate(
            Self::password_is_empty(&fields.password),
            Self::passwords_are_equal(&fields.password, &fields.confirmation),
            self.password_is_strong_enough(classifier, &fields.password),
        )
    }

    /// Compute the full state for a snapshot of settled values.
    pub fn evaluate(
        &self,
        fields: &SettledFields,
        classifier: &dyn StrengthClassifier,
    ) -> ValidationState {
        ValidationState::derive(
            self.username_is_valid(&fields.username),
            self.check_password(fields, classifier),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::strength::{EntropyClassifier, MockStrengthClassifier};
    use proptest::prelude::*;

    fn classifier_grading(level: StrengthLevel) -> MockStrengthClassifier {
        let mut classifier = MockStrengthClassifier::new();
        classifier.expect_grade().returning(move |_| Ok(level));
        classifier
    }

    #[test]
    fn test_short_username() {
        let state = ValidationRules::default().evaluate(
            &SettledFields::new("ab", "Tr0ub4dor&3", "Tr0ub4dor&3"),
            &EntropyClassifier::new(),
        );
        assert_eq!(state.username_message, USERNAME_TOO_SHORT_MESSAGE);
        assert!(!state.is_form_valid);
    }

    #[test]
    fn test_empty_password() {
        let state = ValidationRules::default()
            .evaluate(&SettledFields::new("abc", "", ""), &EntropyClassifier::new());
        assert_eq!(state.username_message, "");
        assert_eq!(state.password_message, "Password must not be empty");
        assert!(!state.is_form_valid);
    }

    #[test]
    fn test_mismatched_passwords() {
        let state = ValidationRules::default().evaluate(
            &SettledFields::new("abc", "abc123", "abc124"),
            &EntropyClassifier::new(),
        );
        assert_eq!(state.password_message, "Passwords don't match");
        assert!(!state.is_form_valid);
    }

    #[test]
    fn test_weak_password() {
        let state = ValidationRules::default().evaluate(
            &SettledFields::new("abc", "abc123", "abc123"),
            &EntropyClassifier::new(),
        );
        assert_eq!(state.password_message, "Password not strong enough");
        assert!(!state.is_form_valid);
    }

    #[test]
    fn test_valid_form() {
        let state = ValidationRules::default().evaluate(
            &SettledFields::new("alice", "Tr0ub4dor&3", "Tr0ub4dor&3"),
            &EntropyClassifier::new(),
        );
        assert_eq!(state, ValidationState::derive(true, PasswordCheck::Valid));
        assert_eq!(state.username_message, "");
        assert_eq!(state.password_message, "");
        assert!(state.is_form_valid);
    }

    #[test]
    fn test_username_counts_graphemes() {
        let rules = ValidationRules::default();
        // "e" followed by a combining acute accent is one character
        assert!(!rules.username_is_valid("ae\u{301}"));
        assert!(rules.username_is_valid("ae\u{301}b"));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert!(!ValidationRules::passwords_are_equal("Secret", "secret"));
    }

    #[test]
    fn test_precedence_table() {
        use PasswordCheck::*;
        let cases = [
            ((true, false, false), Empty),
            ((true, true, true), Empty),
            ((false, false, true), NoMatch),
            ((false, false, false), NoMatch),
            ((false, true, false), NotStrongEnough),
            ((false, true, true), Valid),
        ];
        for ((empty, equal, strong), expected) in cases {
            assert_eq!(PasswordCheck::evaluate(empty, equal, strong), expected);
        }
    }

    #[test]
    fn test_username_message_states_enforced_length() {
        let rules = ValidationRules::default();
        assert!(USERNAME_TOO_SHORT_MESSAGE.contains(&MIN_USERNAME_LENGTH.to_string()));

        let just_short = "a".repeat(MIN_USERNAME_LENGTH - 1);
        let just_long_enough = "a".repeat(MIN_USERNAME_LENGTH);
        assert!(!rules.username_is_valid(&just_short));
        assert!(rules.username_is_valid(&just_long_enough));
    }

    #[test]
    fn test_classifier_failure_is_not_strong_enough() {
        let mut classifier = MockStrengthClassifier::new();
        classifier
            .expect_grade()
            .returning(|_| Err(DomainError::classifier("offline")));

        let check = ValidationRules::default()
            .check_password(&SettledFields::new("abc", "pw", "pw"), &classifier);
        assert_eq!(check, PasswordCheck::NotStrongEnough);
    }

    fn any_level() -> impl Strategy<Value = StrengthLevel> {
        prop::sample::select(StrengthLevel::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_username_message_tracks_length(username in "\\PC{0,8}") {
            let rules = ValidationRules::default();
            let state = ValidationState::derive(rules.username_is_valid(&username), PasswordCheck::Valid);
            let long_enough = username.graphemes(true).count() >= 3;
            prop_assert_eq!(state.username_message.is_empty(), long_enough);
        }

        #[test]
        fn prop_empty_password_masks_everything(confirmation in ".*", level in any_level()) {
            let check = ValidationRules::default()
                .check_password(&SettledFields::new("abc", "", confirmation), &classifier_grading(level));
            prop_assert_eq!(check, PasswordCheck::Empty);
        }

        #[test]
        fn prop_mismatch_beats_strength(password in ".+", confirmation in ".+", level in any_level()) {
            prop_assume!(password != confirmation);
            let check = ValidationRules::default()
                .check_password(&SettledFields::new("abc", password, confirmation), &classifier_grading(level));
            prop_assert_eq!(check, PasswordCheck::NoMatch);
        }

        #[test]
        fn prop_matching_pair_graded_by_threshold(password in ".+", level in any_level()) {
            let rules = ValidationRules::default();
            let check = rules
                .check_password(&SettledFields::new("abc", password.clone(), password), &classifier_grading(level));
            if level >= rules.strength_threshold {
                prop_assert_eq!(check, PasswordCheck::Valid);
            } else {
                prop_assert_eq!(check, PasswordCheck::NotStrongEnough);
            }
        }

        #[test]
        fn prop_form_valid_iff_no_messages(
            username in ".{0,6}",
            password in ".{0,6}",
            confirmation in ".{0,6}",
            level in any_level(),
        ) {
            let state = ValidationRules::default()
                .evaluate(&SettledFields::new(username, password, confirmation), &classifier_grading(level));
            prop_assert_eq!(
                state.is_form_valid,
                state.username_message.is_empty() && state.password_message.is_empty()
            );
        }

        #[test]
        fn prop_evaluation_is_idempotent(
            username in ".{0,6}",
            password in ".{0,12}",
        ) {
            let rules = ValidationRules::default();
            let classifier = EntropyClassifier::new();
            let fields = SettledFields::new(username, password.clone(), password);
            prop_assert_eq!(rules.evaluate(&fields, &classifier), rules.evaluate(&fields, &classifier));
        }
    }
}
