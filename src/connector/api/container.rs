use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatSurface, ChatTransport, ChatWidget, SubmitMessageUseCase};
use crate::connector::adapter::{HttpChatTransport, MockChatTransport};
use crate::domain::DomainError;

pub struct ContainerConfig {
    /// Base URL of the chat server. `None` reads `CHATBOX_BASE_URL` or the default.
    pub base_url: Option<String>,
    /// Use the offline echo transport instead of HTTP.
    pub mock_transport: bool,
}

/// Builds the transport once and hands it to every widget or use case.
pub struct Container {
    transport: Arc<dyn ChatTransport>,
    description: String,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let (transport, description): (Arc<dyn ChatTransport>, String) = if config.mock_transport {
            debug!("Using mock chat transport");
            (Arc::new(MockChatTransport::echo()), "mock (echo)".to_string())
        } else {
            let transport = match config.base_url {
                Some(base) => HttpChatTransport::new(base),
                None => HttpChatTransport::from_env(),
            };
            debug!("Using HTTP chat transport at {}", transport.url());
            let description = transport.url().to_string();
            (Arc::new(transport), description)
        };

        Self {
            transport,
            description,
        }
    }

    pub fn transport(&self) -> Arc<dyn ChatTransport> {
        Arc::clone(&self.transport)
    }

    /// Where submissions go, for display.
    pub fn endpoint_description(&self) -> &str {
        &self.description
    }

    pub fn mount_widget(&self, surface: Arc<dyn ChatSurface>) -> Result<ChatWidget, DomainError> {
        ChatWidget::mount(surface, self.transport())
    }

    pub fn submit_use_case(&self, surface: Arc<dyn ChatSurface>) -> SubmitMessageUseCase {
        SubmitMessageUseCase::new(surface, self.transport())
    }
}
