use thiserror::Error;

/// Domain-level errors shared across application components.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// A required form field was blank or malformed; nothing was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// No bearer token was available for an admin call.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The request never produced an HTTP response (DNS, connect, bad URL).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    /// The backend answered 2xx but flagged the call as unsuccessful.
    #[error("rejected by backend: {0}")]
    Rejected(String),

    /// The response body could not be parsed.
    #[error("decode error: {0}")]
    Decode(String),

    /// Local credential storage failed.
    #[error("storage failure: {0}")]
    Storage(String),

    /// Any other unexpected failure.
    #[error("unexpected error: {0}")]
    Other(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn status(code: u16, msg: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: msg.into(),
        }
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// True when the failure happened on the wire or at the backend, as
    /// opposed to locally before any request was made.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status { .. } | Self::Rejected(_) | Self::Decode(_)
        )
    }
}
