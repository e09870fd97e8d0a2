use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ChatTransport;
use crate::domain::{ChatError, ChatRequest, ChatResponse};

/// Scripted transport for tests and offline development.
///
/// Outcomes are served in FIFO order; once the script is exhausted every
/// further call fails with a transport error. A call counter and a log of
/// delivered payloads let tests assert exactly how many round trips a client
/// performed and what it sent.
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Result<ChatResponse, ChatError>>>,
    sent: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply carrying `text`.
    pub fn push_reply(&self, text: impl Into<String>) {
        self.push(Ok(ChatResponse::with_text(text)));
    }

    /// Queue a successful reply whose body has no `response` field.
    pub fn push_empty_reply(&self) {
        self.push(Ok(ChatResponse::empty()));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: ChatError) {
        self.push(Err(error));
    }

    fn push(&self, outcome: Result<ChatResponse, ChatError>) {
        self.script.lock().unwrap().push_back(outcome);
    }

    /// Number of round trips performed so far (chat and health combined).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Message texts delivered through [`ChatTransport::send_chat`], in order.
    pub fn sent_messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    fn next(&self) -> Result<ChatResponse, ChatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::transport("mock script exhausted")))
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        self.sent.lock().unwrap().push(request.text.clone());
        self.next()
    }

    async fn health(&self) -> Result<ChatResponse, ChatError> {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_script_in_order() {
        let transport = MockTransport::new();
        transport.push_reply("first");
        transport.push_reply("second");

        let a = transport
            .send_chat(&ChatRequest::new("one"))
            .await
            .unwrap();
        let b = transport
            .send_chat(&ChatRequest::new("two"))
            .await
            .unwrap();

        assert_eq!(a.response.as_deref(), Some("first"));
        assert_eq!(b.response.as_deref(), Some("second"));
        assert_eq!(transport.calls(), 2);
        assert_eq!(transport.sent_messages(), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_exhausted_script_fails_with_transport_error() {
        let transport = MockTransport::new();

        let err = transport
            .send_chat(&ChatRequest::new("anyone there?"))
            .await
            .unwrap_err();

        assert!(err.is_transport());
    }
}
