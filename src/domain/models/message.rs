use serde::{Deserialize, Serialize};

/// Shown when the endpoint answers successfully but without reply text.
pub const FALLBACK_TEXT: &str = "🤖 No response received.";

/// Shown for any failed exchange. Failure detail goes to the log, never here.
pub const ERROR_TEXT: &str = "❌ An error occurred while trying to talk to the bot.";

/// Who authored a message in the chat log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    /// Label rendered in front of the message text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Bot",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry of the chat log. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    /// The bot message shown after a failed exchange.
    pub fn bot_error() -> Self {
        Self::bot(ERROR_TEXT)
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_from_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Sender::User.display_name(), "You");
        assert_eq!(Sender::Bot.display_name(), "Bot");
    }

    #[test]
    fn test_constructors_set_sender() {
        let user = Message::user("hello");
        assert!(user.is_from_user());
        assert_eq!(user.text(), "hello");

        let bot = Message::bot_error();
        assert!(bot.is_from_bot());
        assert_eq!(bot.text(), ERROR_TEXT);
    }

    #[test]
    fn test_sender_serializes_snake_case() {
        let json = serde_json::to_string(&Message::bot("hi")).unwrap();
        assert_eq!(json, r#"{"sender":"bot","text":"hi"}"#);
    }
}
