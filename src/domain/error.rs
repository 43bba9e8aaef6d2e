use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Submit events already subscribed")]
    AlreadySubscribed,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::IoError(_))
    }

    /// The HTTP status carried by a [`DomainError::Status`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}
