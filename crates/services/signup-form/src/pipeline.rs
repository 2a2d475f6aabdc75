//! Validation pipeline graph.
//!
//! ```text
//!  username ──debounce(0.8)──dedup──► username_is_valid ─────────────────┐
//!  password ──debounce(0.8)──dedup──► password_is_empty ──────┐          │
//!  password ─┐                                                ├─► check ─┼─► state
//!  confirm ──┴─combine──debounce(0.2)──► passwords_are_equal ─┤          │
//!  password ──debounce(0.2)──dedup──► is_strong_enough ───────┘          │
//! ```
//!
//! Each node is built by one function below so it can be tested on its own.
//! [`build`] subscribes the edges to the raw inputs and returns the root
//! stream; polling it drives every node.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::BoxStream;
use futures::{Stream, StreamExt};

use common::FormConfig;
use domain::{PasswordCheck, StrengthClassifier, ValidationRules, ValidationState};

use crate::input::FormInputs;
use crate::stream::{combine_latest, combine_latest3, PipelineStreamExt};

/// Type-erased pipeline edge.
pub type Edge<T> = BoxStream<'static, T>;

/// Settled username length check.
pub fn username_is_valid<S>(username: S, delay: Duration, rules: ValidationRules) -> Edge<bool>
where
    S: Stream<Item = String> + Send + Unpin + 'static,
{
    username
        .debounce(delay)
        .remove_duplicates()
        .map(move |username| rules.username_is_valid(&username))
        .boxed()
}

/// Settled password emptiness check.
pub fn password_is_empty<S>(password: S, delay: Duration) -> Edge<bool>
where
    S: Stream<Item = String> + Send + Unpin + 'static,
{
    password
        .debounce(delay)
        .remove_duplicates()
        .map(|password| ValidationRules::password_is_empty(&password))
        .boxed()
}

/// Password/confirmation equality, debounced as a pair.
pub fn passwords_are_equal<P, C>(password: P, confirmation: C, delay: Duration) -> Edge<bool>
where
    P: Stream<Item = String> + Send + Unpin + 'static,
    C: Stream<Item = String> + Send + Unpin + 'static,
{
    combine_latest(password, confirmation)
        .debounce(delay)
        .map(|(password, confirmation)| {
            ValidationRules::passwords_are_equal(&password, &confirmation)
        })
        .boxed()
}

/// Settled password graded against the threshold, failing closed.
pub fn password_is_strong_enough<S>(
    password: S,
    delay: Duration,
    rules: ValidationRules,
    classifier: Arc<dyn StrengthClassifier>,
) -> Edge<bool>
where
    S: Stream<Item = String> + Send + Unpin + 'static,
{
    password
        .debounce(delay)
        .remove_duplicates()
        .map(move |password| rules.password_is_strong_enough(classifier.as_ref(), &password))
        .boxed()
}

/// Resolve the three password predicates into one [`PasswordCheck`].
pub fn password_check(
    is_empty: Edge<bool>,
    are_equal: Edge<bool>,
    is_strong_enough: Edge<bool>,
) -> Edge<PasswordCheck> {
    combine_latest3(is_empty, are_equal, is_strong_enough)
        .map(|(is_empty, are_equal, is_strong_enough)| {
            PasswordCheck::evaluate(is_empty, are_equal, is_strong_enough)
        })
        .boxed()
}

/// Aggregate form state; all three outputs come from one recomputation.
pub fn validation_state(
    username_is_valid: Edge<bool>,
    password_check: Edge<PasswordCheck>,
) -> Edge<ValidationState> {
    combine_latest(username_is_valid, password_check)
        .map(|(username_is_valid, check)| ValidationState::derive(username_is_valid, check))
        .boxed()
}

/// Subscribe the pipeline to `inputs` and return its root stream.
pub fn build(
    inputs: &mut FormInputs,
    config: &FormConfig,
    classifier: Arc<dyn StrengthClassifier>,
) -> Edge<ValidationState> {
    let debounce = config.debounce;
    let rules = config.rules;

    let username = username_is_valid(inputs.username.subscribe(), debounce.username(), rules);
    let is_empty = password_is_empty(inputs.password.subscribe(), debounce.password());
    let are_equal = passwords_are_equal(
        inputs.password.subscribe(),
        inputs.confirmation.subscribe(),
        debounce.comparison(),
    );
    let is_strong_enough = password_is_strong_enough(
        inputs.password.subscribe(),
        debounce.strength(),
        rules,
        classifier,
    );

    validation_state(
        username,
        password_check(is_empty, are_equal, is_strong_enough),
    )
}
