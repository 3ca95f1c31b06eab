//! Session lifecycle.

use std::fmt;

/// Where a session is in its lifecycle.
///
/// Transitions only move forward: `Uninitialized -> Ready` on a successful
/// `initialize`, and any state `-> Closed` when the transport ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Ready,
    Closed,
}

impl SessionState {
    pub fn is_ready(self) -> bool {
        self == SessionState::Ready
    }

    pub fn is_closed(self) -> bool {
        self == SessionState::Closed
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Ready => "ready",
            SessionState::Closed => "closed",
        };
        f.write_str(name)
    }
}
