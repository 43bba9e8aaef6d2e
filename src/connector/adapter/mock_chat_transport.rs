use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatTransport;
use crate::domain::{ChatReply, DomainError};

/// Offline transport. Replays scripted outcomes in order, then echoes.
pub struct MockChatTransport {
    script: Mutex<VecDeque<Result<ChatReply, DomainError>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockChatTransport {
    /// Replies with the submitted message.
    pub fn echo() -> Self {
        Self::scripted(Vec::new())
    }

    pub fn scripted(outcomes: Vec<Result<ChatReply, DomainError>>) -> Self {
        Self {
            script: Mutex::new(outcomes.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Messages sent so far, in call order.
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

impl Default for MockChatTransport {
    fn default() -> Self {
        Self::echo()
    }
}

#[async_trait]
impl ChatTransport for MockChatTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, DomainError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());

        let scripted = self
            .script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        match scripted {
            Some(outcome) => outcome,
            None => {
                debug!("Mock transport echoing message");
                Ok(ChatReply::new(message))
            }
        }
    }
}
