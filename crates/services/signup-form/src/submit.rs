//! Submission collaborator.

use async_trait::async_trait;
use tracing::info;

use common::AppResult;
use domain::WELCOME_MESSAGE;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Action run when an enabled submit is triggered.
///
/// The form has already gated the call on its latest validity; implementors
/// do not validate again.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SubmitAction: Send + Sync {
    /// Present the confirmation for `username` and return its text
    async fn on_submit(&self, username: &str) -> AppResult<String>;
}

/// Default action: a welcome confirmation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WelcomeScreen;

#[async_trait]
impl SubmitAction for WelcomeScreen {
    async fn on_submit(&self, username: &str) -> AppResult<String> {
        info!(username = %username, "Presenting welcome screen");
        Ok(WELCOME_MESSAGE.to_string())
    }
}
