use std::sync::{Mutex, MutexGuard};

use tokio::sync::mpsc;
use tracing::debug;

use crate::application::{ChatSurface, SubmitEvent, SubmitEvents};
use crate::connector::adapter::render_html;
use crate::domain::{ChatLog, DomainError, Message};

#[derive(Default)]
struct SurfaceState {
    input: String,
    log: ChatLog,
    rendered: Vec<String>,
    /// Index of the block the log is scrolled to.
    scroll_position: Option<usize>,
    submit_tx: Option<mpsc::UnboundedSender<SubmitEvent>>,
    subscribed: bool,
}

/// A chat surface kept entirely in memory: an input field, the chat log, and
/// the log rendered as HTML blocks.
///
/// Drives the widget without a real UI, e.g. from tests or one-shot commands.
#[derive(Default)]
pub struct InMemoryChatSurface {
    state: Mutex<SurfaceState>,
}

impl InMemoryChatSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Types `text` into the input field without submitting.
    pub fn set_input(&self, text: &str) {
        self.state().input = text.to_string();
    }

    /// Types `text` into the input field and submits the form.
    ///
    /// Without a subscriber the submission goes nowhere, like a form with no
    /// listener attached.
    pub fn type_and_submit(&self, text: &str) {
        let mut state = self.state();
        state.input = text.to_string();

        match &state.submit_tx {
            Some(tx) => {
                if tx.send(SubmitEvent::new(text)).is_err() {
                    debug!("Submit listener dropped; submission ignored");
                }
            }
            None => debug!("No submit listener; submission ignored"),
        }
    }

    /// Closes the submit stream. A mounted widget finishes its pending replies
    /// and stops.
    pub fn close(&self) {
        self.state().submit_tx = None;
    }

    /// Snapshot of the chat log.
    pub fn log(&self) -> ChatLog {
        self.state().log.clone()
    }

    /// The rendered HTML blocks, one per message.
    pub fn rendered(&self) -> Vec<String> {
        self.state().rendered.clone()
    }

    /// The whole log as HTML.
    pub fn html(&self) -> String {
        self.state().rendered.join("\n")
    }

    pub fn scroll_position(&self) -> Option<usize> {
        self.state().scroll_position
    }
}

impl ChatSurface for InMemoryChatSurface {
    fn subscribe_submit(&self) -> Result<SubmitEvents, DomainError> {
        let mut state = self.state();
        if state.subscribed {
            return Err(DomainError::AlreadySubscribed);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        state.submit_tx = Some(tx);
        state.subscribed = true;
        Ok(rx)
    }

    fn input_value(&self) -> String {
        self.state().input.clone()
    }

    fn clear_input(&self) {
        self.state().input.clear();
    }

    fn append_message(&self, message: &Message) {
        let mut state = self.state();
        let index = state.log.append(message.clone());
        state.rendered.push(render_html(message));
        state.scroll_position = Some(index);
    }
}
