//! # Application Layer
//!
//! The [`ChatbotClient`] component and the transport interface it depends on.

pub mod client;
pub mod interfaces;

pub use client::*;
pub use interfaces::*;
