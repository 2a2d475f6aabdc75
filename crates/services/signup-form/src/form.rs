//! Signup form session.
//!
//! A [`SignupForm`] owns the raw inputs and one task that drives the whole
//! pipeline and publishes [`ValidationState`] through a watch channel.
//! Aborting that task drops every node and timer at once.

use std::sync::Arc;

use futures::StreamExt;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use common::{AppError, AppResult, FormConfig};
use domain::{EntropyClassifier, Field, StrengthClassifier, ValidationState};

use crate::input::FormInputs;
use crate::pipeline::{self, Edge};
use crate::submit::{SubmitAction, WelcomeScreen};

/// Builder for a [`SignupForm`] session.
pub struct SignupFormBuilder {
    config: FormConfig,
    classifier: Arc<dyn StrengthClassifier>,
    submit_action: Arc<dyn SubmitAction>,
}

impl SignupFormBuilder {
    fn new(config: FormConfig) -> Self {
        Self {
            config,
            classifier: Arc::new(EntropyClassifier::new()),
            submit_action: Arc::new(WelcomeScreen),
        }
    }

    /// Replace the default entropy classifier
    pub fn classifier(mut self, classifier: Arc<dyn StrengthClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the default welcome screen
    pub fn on_submit(mut self, action: Arc<dyn SubmitAction>) -> Self {
        self.submit_action = action;
        self
    }

    /// Start the session on the current tokio runtime.
    pub fn spawn(self) -> AppResult<SignupForm> {
        let handle = Handle::try_current()
            .map_err(|e| AppError::internal(format!("No tokio runtime: {}", e)))?;
        self.spawn_on(&handle)
    }

    /// Start the session on an explicit executor.
    pub fn spawn_on(self, handle: &Handle) -> AppResult<SignupForm> {
        self.config.validate()?;

        let mut inputs = FormInputs::new();
        let states = pipeline::build(&mut inputs, &self.config, self.classifier);
        let (publisher, state) = watch::channel(ValidationState::default());
        let task = handle.spawn(drive(states, publisher));

        info!(
            username_debounce_ms = self.config.debounce.username_ms,
            password_debounce_ms = self.config.debounce.password_ms,
            "Signup session started"
        );

        Ok(SignupForm {
            inputs,
            state,
            task,
            submit_action: self.submit_action,
            closed: false,
        })
    }
}

/// Poll the root stream and publish every changed aggregate in one write.
async fn drive(mut states: Edge<ValidationState>, publisher: watch::Sender<ValidationState>) {
    while let Some(next) = states.next().await {
        let changed = publisher.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next.clone();
                true
            }
        });

        if changed {
            debug!(
                username_message = %next.username_message,
                password_message = %next.password_message,
                is_form_valid = next.is_form_valid,
                "Validation state published"
            );
        }
    }
    debug!("Validation pipeline finished");
}

/// A live signup form session.
pub struct SignupForm {
    inputs: FormInputs,
    state: watch::Receiver<ValidationState>,
    task: JoinHandle<()>,
    submit_action: Arc<dyn SubmitAction>,
    closed: bool,
}

impl SignupForm {
    pub fn builder(config: FormConfig) -> SignupFormBuilder {
        SignupFormBuilder::new(config)
    }

    /// Start a session with the default collaborators
    pub fn spawn(config: FormConfig) -> AppResult<Self> {
        Self::builder(config).spawn()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.inputs.get_mut(field).set(value);
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.set(Field::Username, value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.set(Field::Password, value);
    }

    pub fn set_confirmation(&mut self, value: impl Into<String>) {
        self.set(Field::Confirmation, value);
    }

    /// Current raw value of a field
    pub fn value(&self, field: Field) -> &str {
        self.inputs.get(field).value()
    }

    /// Latest published state
    pub fn state(&self) -> ValidationState {
        self.state.borrow().clone()
    }

    /// Receiver notified whenever the published state changes
    pub fn subscribe(&self) -> watch::Receiver<ValidationState> {
        self.state.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the submit action is currently enabled
    pub fn is_submit_enabled(&self) -> bool {
        !self.closed && self.state.borrow().is_form_valid
    }

    /// Trigger the submit action, gated on the latest `is_form_valid`.
    pub async fn submit(&self) -> AppResult<String> {
        if self.closed {
            return Err(AppError::SessionClosed);
        }
        if !self.state.borrow().is_form_valid {
            return Err(AppError::SubmitDisabled);
        }

        let username = self.inputs.username.value();
        info!(username = %username, "Signup submitted");
        self.submit_action.on_submit(username).await
    }

    /// End the session: cancel the pipeline task and detach all inputs.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.task.abort();
        self.inputs.close();
        self.closed = true;
        info!("Signup session closed");
    }
}

impl Drop for SignupForm {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("username", &self.inputs.username.value())
            .field("password", &"[REDACTED]")
            .field("confirmation", &"[REDACTED]")
            .field("state", &*self.state.borrow())
            .field("closed", &self.closed)
            .finish()
    }
}
