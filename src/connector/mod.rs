//! # Connector Layer
//!
//! Transport implementations behind the `ChatTransport` seam:
//! - HTTP (reqwest, the real backend)
//! - Mock (scripted, for tests and offline use)

pub mod adapter;

pub use adapter::*;
