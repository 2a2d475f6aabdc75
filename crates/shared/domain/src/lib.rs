//! Domain layer - Signup form rules and value objects.
//!
//! This crate contains the pure validation rules of the signup form with no
//! timing or runtime dependencies. The reactive pipeline in `signup-form`
//! applies these rules to settled field values.

pub mod constants;
pub mod error;
pub mod field;
pub mod strength;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use field::Field;
pub use strength::{grade_or_weakest, EntropyClassifier, StrengthClassifier, StrengthLevel};
pub use validation::{PasswordCheck, SettledFields, ValidationRules, ValidationState};

#[cfg(any(test, feature = "test-utils"))]
pub use strength::MockStrengthClassifier;
