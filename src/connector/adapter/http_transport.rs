use async_trait::async_trait;
use tracing::warn;

use crate::application::ChatTransport;
use crate::domain::{ChatError, ChatRequest, ChatResponse};

/// Default target: the chatbot API server running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const CHAT_PATH: &str = "/chat";
const HEALTH_PATH: &str = "/api/v1/health";

/// HTTP transport for the chatbot API.
///
/// POSTs `{"text": ...}` as JSON to `{base}/chat` and expects
/// `{"response": ...}` back. No retries, no backoff, and no request timeout:
/// a hung server hangs the call.
pub struct HttpTransport {
    client: reqwest::Client,
    chat_url: String,
    health_url: String,
}

impl HttpTransport {
    /// Transport against the compiled-in local endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Transport against an explicit base URL (primarily for tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let trimmed = base.trim_end_matches('/');
        Self {
            client: reqwest::Client::new(),
            chat_url: format!("{trimmed}{CHAT_PATH}"),
            health_url: format!("{trimmed}{HEALTH_PATH}"),
        }
    }

    async fn parse_reply(response: reqwest::Response) -> Result<ChatResponse, ChatError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("chatbot API returned {status}: {body}");
            return Err(ChatError::transport(format!("server returned {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| ChatError::malformed(format!("failed to parse response body: {e}")))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let response = self
            .client
            .post(&self.chat_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                ChatError::transport(format!("request to {} failed: {e}", self.chat_url))
            })?;

        Self::parse_reply(response).await
    }

    async fn health(&self) -> Result<ChatResponse, ChatError> {
        let response = self.client.get(&self.health_url).send().await.map_err(|e| {
            ChatError::transport(format!("request to {} failed: {e}", self.health_url))
        })?;

        Self::parse_reply(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_normalized() {
        let transport = HttpTransport::with_base_url("http://127.0.0.1:8000/");

        assert_eq!(transport.chat_url, "http://127.0.0.1:8000/chat");
        assert_eq!(transport.health_url, "http://127.0.0.1:8000/api/v1/health");
    }
}
