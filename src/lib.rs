pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    ChatSurface, ChatTransport, ChatWidget, PendingReply, SubmitEvent, SubmitEvents,
    SubmitMessageUseCase,
};

pub use connector::{
    render_html, render_plain, Container, ContainerConfig, HttpChatTransport,
    InMemoryChatSurface, MockChatTransport, SharedBuffer, TerminalChatSurface,
};

pub use domain::{
    ChatLog, ChatReply, ChatRequest, DomainError, Message, Sender, CHAT_PATH, ERROR_TEXT,
    FALLBACK_TEXT,
};
