//! Registry configuration.

/// Knobs for a [`Registry`](crate::Registry), adjustable between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Most sessions that may be open at once.
    pub max_sessions: usize,
    /// Also play the suggested reply on the session's board.
    pub auto_apply_reply: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_sessions: 1024,
            auto_apply_reply: false,
        }
    }
}
