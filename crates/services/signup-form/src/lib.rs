//! Signup Form Library
//!
//! Derives real-time validity state and user-facing messages for a signup
//! form from three raw text inputs, using a debounced dataflow pipeline.
//!
//! # Layers
//!
//! - **stream**: debounce, remove-duplicates and combine-latest nodes
//! - **input**: writable raw field inputs fanning out to pipeline edges
//! - **pipeline**: the node graph from raw inputs to [`domain::ValidationState`]
//! - **form**: the session handle (setters, published state, submit gate)
//! - **submit**: the submission collaborator
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut form = SignupForm::spawn(FormConfig::from_env())?;
//! form.set_username("alice");
//! form.set_password("Tr0ub4dor&3");
//! form.set_confirmation("Tr0ub4dor&3");
//!
//! let mut states = form.subscribe();
//! states.changed().await?;
//! if form.is_submit_enabled() {
//!     println!("{}", form.submit().await?);
//! }
//! ```

pub mod form;
pub mod input;
pub mod pipeline;
pub mod stream;
pub mod submit;

pub use form::{SignupForm, SignupFormBuilder};
pub use input::{FieldInput, FormInputs};
pub use submit::{SubmitAction, WelcomeScreen};

#[cfg(any(test, feature = "test-utils"))]
pub use submit::MockSubmitAction;
