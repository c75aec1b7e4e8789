//! Run state of the focus timer

use std::fmt;

use serde::{Deserialize, Serialize};

/// Phase of the countdown controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// No session configured, or reset with an unusable minutes value.
    Idle,
    /// The periodic tick is live and draining the countdown.
    Running,
    /// A session is configured and waiting to run or resume.
    Paused,
    /// The countdown reached zero by ticking, not by reset.
    Finished,
}

impl RunState {
    /// Check whether the periodic tick should be live.
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }
}

impl Default for RunState {
    fn default() -> Self {
        RunState::Idle
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::Finished => "finished",
        };
        write!(f, "{}", name)
    }
}
