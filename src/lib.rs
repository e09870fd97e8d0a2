pub mod application;
pub mod connector;
pub mod domain;

pub use application::{ChatTransport, ChatbotClient};
pub use connector::{HttpTransport, MockTransport, DEFAULT_BASE_URL};
pub use domain::{ChatError, ChatRequest, ChatResponse};
