use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tracing::{debug, error};

use crate::application::{ChatSurface, ChatTransport};
use crate::domain::{Message, FALLBACK_TEXT};

/// The asynchronous half of a submission: sends the message and appends the
/// bot reply (or the error text) once the exchange settles.
pub type PendingReply = BoxFuture<'static, ()>;

/// Use case for submitting one user message.
pub struct SubmitMessageUseCase {
    surface: Arc<dyn ChatSurface>,
    transport: Arc<dyn ChatTransport>,
}

impl SubmitMessageUseCase {
    pub fn new(surface: Arc<dyn ChatSurface>, transport: Arc<dyn ChatTransport>) -> Self {
        Self { surface, transport }
    }

    /// Submits `raw_input`.
    ///
    /// Whitespace-only input is ignored and returns `None`. Otherwise the user
    /// message is appended and the input cleared before this returns; the
    /// returned future performs the request and always appends exactly one
    /// bot message.
    pub fn submit(&self, raw_input: &str) -> Option<PendingReply> {
        let text = raw_input.trim();
        if text.is_empty() {
            debug!("Ignoring empty submission");
            return None;
        }

        let text = text.to_string();
        self.surface.append_message(&Message::user(text.as_str()));
        self.surface.clear_input();

        let surface = Arc::clone(&self.surface);
        let transport = Arc::clone(&self.transport);

        Some(
            async move {
                let reply = match transport.send(&text).await {
                    Ok(reply) => Message::bot(reply.text_or(FALLBACK_TEXT)),
                    Err(e) => {
                        error!("Chat request failed: {e}");
                        Message::bot_error()
                    }
                };
                surface.append_message(&reply);
            }
            .boxed(),
        )
    }

    /// Submits whatever is currently in the surface's input field.
    pub fn submit_input(&self) -> Option<PendingReply> {
        let raw = self.surface.input_value();
        self.submit(&raw)
    }
}
