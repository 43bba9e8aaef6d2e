use tokio::sync::mpsc;

use crate::domain::{DomainError, Message};

/// A form submission, carrying the input field's value at the moment the
/// form was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    value: String,
}

impl SubmitEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

pub type SubmitEvents = mpsc::UnboundedReceiver<SubmitEvent>;

/// The UI elements the chat widget needs: a form to subscribe to, a text
/// input, and a scrollable log.
///
/// The surface owns the chat log. Appending scrolls the log to the newest
/// entry.
pub trait ChatSurface: Send + Sync {
    /// Hands out the stream of form submissions. Only one subscription is
    /// allowed per surface; later calls return [`DomainError::AlreadySubscribed`].
    fn subscribe_submit(&self) -> Result<SubmitEvents, DomainError>;

    fn input_value(&self) -> String;

    fn clear_input(&self);

    fn append_message(&self, message: &Message);
}
