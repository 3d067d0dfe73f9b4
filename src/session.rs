//! Session lifecycle shared by both mini-games.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a game session. Gameplay operations only have an
/// effect while `Running`; everything else is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    NotStarted,
    Running,
    Paused,
    Ended,
}

impl SessionPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionPhase::Running)
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, SessionPhase::Ended)
    }

    /// `NotStarted -> Running`. Any other phase is unchanged.
    pub fn started(self) -> SessionPhase {
        match self {
            SessionPhase::NotStarted => SessionPhase::Running,
            other => other,
        }
    }

    /// `Running -> Paused`. Any other phase is unchanged.
    pub fn paused(self) -> SessionPhase {
        match self {
            SessionPhase::Running => SessionPhase::Paused,
            other => other,
        }
    }

    /// `Paused -> Running`. Any other phase is unchanged.
    pub fn resumed(self) -> SessionPhase {
        match self {
            SessionPhase::Paused => SessionPhase::Running,
            other => other,
        }
    }
}
