use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ChatTransport;
use crate::domain::{ChatReply, ChatRequest, DomainError, CHAT_PATH};

/// Default target: a chat server running locally on Flask's standard port.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// HTTP transport posting `{"message": ...}` to `{base_url}/chat`.
///
/// Requests carry no timeout: an exchange runs until the server answers or
/// the connection fails.
///
/// ```text
/// CHATBOX_BASE_URL=http://chat.internal:8080
/// ```
pub struct HttpChatTransport {
    client: reqwest::Client,
    /// Full endpoint URL (base + CHAT_PATH).
    url: String,
}

impl HttpChatTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), CHAT_PATH);
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Construct from `CHATBOX_BASE_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(Self::configured_base_url())
    }

    pub fn configured_base_url() -> String {
        std::env::var("CHATBOX_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, DomainError> {
        debug!("POST {} ({} chars)", self.url, message.len());

        let response = self
            .client
            .post(&self.url)
            .json(&ChatRequest::new(message))
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Chat endpoint returned {status}: {body}");
            return Err(DomainError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("failed to read response body: {e}")))?;

        ChatReply::from_json(&body)
    }
}
