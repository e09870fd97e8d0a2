use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ChatTransport;
use crate::domain::{ChatError, ChatRequest};

/// Canned reply for the first chat call on any client instance.
const GREETING: &str = "Hello";

/// Client for the chatbot backend.
///
/// The first chat call on an instance returns a canned greeting without
/// touching the network; every later call performs exactly one round trip
/// through the injected [`ChatTransport`]. The greeting flag is a per-instance
/// field, so tests can construct independent clients with independent
/// greeting state.
pub struct ChatbotClient {
    transport: Arc<dyn ChatTransport>,
    greeted: AtomicBool,
}

impl ChatbotClient {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            transport,
            greeted: AtomicBool::new(false),
        }
    }

    /// Send a message and return the assistant's reply text.
    ///
    /// `Ok(None)` means the server answered with valid JSON that carries no
    /// `response` field. The original frontend propagated that case as an
    /// unset value rather than an error, and that behavior is kept.
    pub async fn send(&self, message: &str) -> Result<Option<String>, ChatError> {
        // swap is a single read-modify-write, so two racing first calls
        // cannot both win the greeting.
        if !self.greeted.swap(true, Ordering::SeqCst) {
            debug!("first call, returning canned greeting");
            return Ok(Some(GREETING.to_string()));
        }

        let request = ChatRequest::new(message);
        let reply = self.transport.send_chat(&request).await?;
        Ok(reply.response)
    }

    /// Presentation-edge variant of [`send`](Self::send) that never fails.
    ///
    /// Errors are logged and collapsed to `None`, so callers only ever
    /// observe "a reply" or "no answer available" and cannot distinguish a
    /// network failure from a server-side one.
    pub async fn get_response(&self, message: &str) -> Option<String> {
        match self.send(message).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("chat request failed: {e}");
                None
            }
        }
    }

    /// Ask the backend whether it is up; returns its status text.
    ///
    /// Health probes do not consume the one-shot greeting.
    pub async fn health(&self) -> Result<String, ChatError> {
        let reply = self.transport.health().await?;
        Ok(reply.response.unwrap_or_default())
    }
}
