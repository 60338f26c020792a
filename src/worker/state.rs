//! Worker lifecycle states

use std::fmt;

/// Lifecycle state of a worker runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Polling and processing normally
    Running,
    /// Shutdown requested; in-flight work finishes, nothing new starts
    Draining,
    /// Loop has exited; terminal
    Stopped,
}

impl WorkerState {
    pub(crate) const fn as_u8(self) -> u8 {
        match self {
            WorkerState::Running => 0,
            WorkerState::Draining => 1,
            WorkerState::Stopped => 2,
        }
    }

    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => WorkerState::Draining,
            2 => WorkerState::Stopped,
            _ => WorkerState::Running,
        }
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WorkerState::Running => "running",
            WorkerState::Draining => "draining",
            WorkerState::Stopped => "stopped",
        })
    }
}
