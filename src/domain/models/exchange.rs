use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::DomainError;

/// Path of the chat endpoint, relative to the configured base URL.
pub const CHAT_PATH: &str = "/chat";

/// Request body posted to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Decoded body of a successful chat response.
///
/// Only the optional `response` field is read. Everything else the server
/// sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    response: Option<String>,
}

impl ChatReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a reply from an already parsed JSON body.
    ///
    /// A top-level `null` is rejected, as is a `response` that carries
    /// content but is not a string. An absent or empty `response` yields a
    /// reply without text.
    pub fn from_value(body: Value) -> Result<Self, DomainError> {
        if body.is_null() {
            return Err(DomainError::decode("response body is null"));
        }

        let response = match body.get("response") {
            Some(value) => content_text(value)?,
            None => None,
        };
        Ok(Self { response })
    }

    /// Parses a raw response body.
    pub fn from_json(body: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| DomainError::decode(format!("invalid JSON body: {e}")))?;
        Self::from_value(value)
    }

    /// Reply text, or `None` when the server sent nothing worth showing.
    pub fn text(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Reply text, or `fallback` when the reply carries no content.
    pub fn text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.text().unwrap_or(fallback)
    }
}

// Empty strings, null, false and zero count as "no content".
fn content_text(value: &Value) -> Result<Option<String>, DomainError> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        other => Err(DomainError::decode(format!(
            "`response` is not a string: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_message_field() {
        let body = serde_json::to_value(ChatRequest::new("hello")).unwrap();
        assert_eq!(body, json!({ "message": "hello" }));
    }

    #[test]
    fn test_reply_with_text() {
        let reply = ChatReply::from_value(json!({ "response": "hi" })).unwrap();
        assert_eq!(reply.text(), Some("hi"));
    }

    #[test]
    fn test_reply_missing_field_has_no_text() {
        let reply = ChatReply::from_value(json!({})).unwrap();
        assert_eq!(reply.text(), None);
        assert_eq!(reply.text_or("fallback"), "fallback");
    }

    #[test]
    fn test_reply_empty_and_falsy_values_have_no_text() {
        for body in [
            json!({ "response": "" }),
            json!({ "response": null }),
            json!({ "response": false }),
            json!({ "response": 0 }),
        ] {
            let reply = ChatReply::from_value(body.clone()).unwrap();
            assert_eq!(reply.text(), None, "body {body} should have no text");
        }
    }

    #[test]
    fn test_reply_non_string_content_is_decode_error() {
        for body in [
            json!({ "response": 42 }),
            json!({ "response": true }),
            json!({ "response": {} }),
            json!({ "response": [] }),
        ] {
            let err = ChatReply::from_value(body.clone()).unwrap_err();
            assert!(err.is_decode(), "body {body} should be rejected");
        }
    }

    #[test]
    fn test_reply_ignores_other_fields() {
        let reply = ChatReply::from_value(json!({ "error": "boom" })).unwrap();
        assert_eq!(reply.text(), None);
    }

    #[test]
    fn test_non_object_body_has_no_text() {
        let reply = ChatReply::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(reply.text(), None);
    }

    #[test]
    fn test_null_body_is_decode_error() {
        let err = ChatReply::from_value(Value::Null).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        let err = ChatReply::from_json("<html>oops</html>").unwrap_err();
        assert!(err.is_decode());
    }
}
