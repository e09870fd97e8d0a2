//! # Domain Layer
//!
//! Error taxonomy and the request/response models exchanged with the chatbot
//! backend. This layer is independent of any transport or HTTP library.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
