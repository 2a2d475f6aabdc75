//! Raw field inputs.
//!
//! A [`FieldInput`] is the only writable state of a form session. It fans
//! every written value out to the pipeline edges subscribed to it; the
//! pipeline never writes back.

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use domain::Field;

/// Edge carrying raw values of one field into the pipeline.
pub type RawEdge = UnboundedReceiver<String>;

/// Writable source for one form field.
#[derive(Debug)]
pub struct FieldInput {
    field: Field,
    value: String,
    edges: Vec<UnboundedSender<String>>,
}

impl FieldInput {
    /// Create an input holding the empty string
    pub fn new(field: Field) -> Self {
        Self {
            field,
            value: String::new(),
            edges: Vec::new(),
        }
    }

    /// Current raw value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of live pipeline edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Attach a new edge. The current value is replayed to it first.
    pub fn subscribe(&mut self) -> RawEdge {
        let (tx, rx) = mpsc::unbounded();
        if tx.unbounded_send(self.value.clone()).is_ok() {
            self.edges.push(tx);
        }
        rx
    }

    /// Write a new raw value and push it to every live edge.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        let value = &self.value;
        self.edges
            .retain(|edge| edge.unbounded_send(value.clone()).is_ok());

        if self.field.is_secret() {
            debug!(field = %self.field, chars = value.chars().count(), "Raw value written");
        } else {
            debug!(field = %self.field, value = %value, "Raw value written");
        }
    }

    /// Detach every edge; downstream streams observe end of input.
    pub fn close(&mut self) {
        self.edges.clear();
    }
}

/// The three raw inputs of a signup form.
#[derive(Debug)]
pub struct FormInputs {
    pub username: FieldInput,
    pub password: FieldInput,
    pub confirmation: FieldInput,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self::new()
    }
}

impl FormInputs {
    pub fn new() -> Self {
        Self {
            username: FieldInput::new(Field::Username),
            password: FieldInput::new(Field::Password),
            confirmation: FieldInput::new(Field::Confirmation),
        }
    }

    pub fn get(&self, field: Field) -> &FieldInput {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::Confirmation => &self.confirmation,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut FieldInput {
        match field {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
            Field::Confirmation => &mut self.confirmation,
        }
    }

    /// Detach all edges of all three inputs
    pub fn close(&mut self) {
        self.username.close();
        self.password.close();
        self.confirmation.close();
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use super::*;

    #[tokio::test]
    async fn test_subscribe_replays_current_value() {
        let mut input = FieldInput::new(Field::Username);
        input.set("alice");

        let mut edge = input.subscribe();
        assert_eq!(edge.next().await.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_set_fans_out_to_every_edge() {
        let mut input = FieldInput::new(Field::Password);
        let mut first = input.subscribe();
        let mut second = input.subscribe();

        input.set("secret");

        for edge in [&mut first, &mut second] {
            assert_eq!(edge.next().await.as_deref(), Some(""));
            assert_eq!(edge.next().await.as_deref(), Some("secret"));
        }
    }

    #[tokio::test]
    async fn test_dropped_edges_are_pruned() {
        let mut input = FieldInput::new(Field::Confirmation);
        let kept = input.subscribe();
        drop(input.subscribe());
        assert_eq!(input.edge_count(), 2);

        input.set("x");
        assert_eq!(input.edge_count(), 1);
        drop(kept);
    }

    #[tokio::test]
    async fn test_close_ends_edges() {
        let mut inputs = FormInputs::new();
        let mut edge = inputs.get_mut(Field::Username).subscribe();
        inputs.close();

        assert_eq!(edge.next().await.as_deref(), Some(""));
        assert_eq!(edge.next().await, None);
        assert_eq!(inputs.get(Field::Username).edge_count(), 0);
    }
}
