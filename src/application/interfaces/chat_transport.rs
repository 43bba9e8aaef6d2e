use async_trait::async_trait;

use crate::domain::{ChatReply, DomainError};

/// Carries one user message to the chat endpoint and brings back its reply.
///
/// Implementors own transport and serialization details. Any non-success
/// status, transport failure or undecodable body is reported as an error;
/// a decodable body without reply text is a successful, empty [`ChatReply`].
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, message: &str) -> Result<ChatReply, DomainError>;
}
