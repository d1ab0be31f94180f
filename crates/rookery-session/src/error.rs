//! Session errors.

use rookery_core::EngineError;

/// Errors raised while creating, looking up, or playing in a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No open session has this identifier.
    #[error("session not found: {id}")]
    SessionNotFound { id: String },

    /// The text is not a session identifier.
    #[error("malformed session id: {id}")]
    MalformedId { id: String },

    /// Creating another session would exceed the configured cap.
    #[error("session limit reached ({limit} open)")]
    SessionLimitReached { limit: usize },

    /// A previous call panicked while holding the session's lock.
    #[error("session {id} is poisoned")]
    Poisoned { id: String },

    /// The rule engine rejected the request.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
