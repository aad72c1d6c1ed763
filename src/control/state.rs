use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,   // Resting state, nothing pending
    Copied, // Transient: last attempt succeeded
    Failed, // Transient: last attempt failed
}

impl CopyState {
    /// Transient states carry a pending revert back to `Idle`.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl fmt::Display for CopyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Copied => write!(f, "COPIED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

impl Default for CopyState {
    fn default() -> Self {
        CopyState::Idle
    }
}
