use async_trait::async_trait;

use crate::domain::{ChatError, ChatRequest, ChatResponse};

/// A single round trip to the chatbot backend.
///
/// Implementors encapsulate transport and serialization details. Consumers
/// ([`crate::application::ChatbotClient`]) stay decoupled from any particular
/// HTTP client library, and tests can substitute a scripted transport.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Deliver the user's message to the chat endpoint and return the reply.
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;

    /// Probe the backend's health endpoint.
    async fn health(&self) -> Result<ChatResponse, ChatError>;
}
