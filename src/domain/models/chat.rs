use serde::{Deserialize, Serialize};

/// Outgoing payload for the chat endpoint, built fresh for every call.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub text: String,
}

impl ChatRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The backend's reply shape. Only the `response` field is consumed; a reply
/// that omits it deserializes to `None` instead of failing.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<String>,
}

impl ChatResponse {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
        }
    }

    pub fn empty() -> Self {
        Self { response: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_text_field() {
        let request = ChatRequest::new("who won the last world cup?");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "text": "who won the last world cup?" })
        );
    }

    #[test]
    fn test_response_parses_text() {
        let reply: ChatResponse = serde_json::from_str(r#"{"response":"hi there"}"#).unwrap();

        assert_eq!(reply.response.as_deref(), Some("hi there"));
    }

    #[test]
    fn test_response_tolerates_missing_field() {
        let reply: ChatResponse = serde_json::from_str("{}").unwrap();

        assert!(reply.response.is_none());
    }
}
