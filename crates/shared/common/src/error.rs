//! Unified application error handling.
//!
//! Form validation outcomes are not errors; they are published through
//! `domain::ValidationState`. `AppError` covers the submission gate, the
//! session lifecycle, configuration and I/O at the edges.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Submission gate
    #[error("Submit is disabled while the form is invalid")]
    SubmitDisabled,

    #[error("Signup session is closed")]
    SessionClosed,

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    // Collaborators
    #[error("Strength classifier error: {0}")]
    Classifier(String),

    // I/O at the edges (terminal adapter)
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get a stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::SubmitDisabled => "SUBMIT_DISABLED",
            AppError::SessionClosed => "SESSION_CLOSED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Classifier(_) => "CLASSIFIER_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "An I/O error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Classifier(msg) => AppError::Classifier(msg),
            DomainError::UnknownStrength(name) => {
                AppError::Config(format!("unknown strength level '{}'", name))
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
