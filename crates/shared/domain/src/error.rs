//! Domain-level errors.
//!
//! Validation outcomes (short username, empty or weak password) are not
//! errors; they are expressed by [`crate::PasswordCheck`] and
//! [`crate::ValidationState`]. These errors cover the collaborator seams
//! and malformed field or strength names only.

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field name or rule value is malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// The strength classifier could not grade a password
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// A strength level name could not be parsed
    #[error("Unknown strength level: {0}")]
    UnknownStrength(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        DomainError::Classifier(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
