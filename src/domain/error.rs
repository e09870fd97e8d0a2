use thiserror::Error;

/// Everything that can go wrong during a chat round trip.
///
/// A reply whose JSON is valid but carries no `response` field is *not* an
/// error; it surfaces as `Ok(None)` from the client, matching the backend's
/// observed behavior.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Connection could not be established, or the server answered with a
    /// non-success status.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// A body was received but could not be parsed as the expected JSON shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ChatError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}
