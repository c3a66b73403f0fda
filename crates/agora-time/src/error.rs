//! Error types for scheduler registry operations.

use agora_core::AgentId;
use std::error::Error;
use std::fmt;

/// Errors from adding or removing agents in a schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    /// `add` was called with an id that is already registered.
    DuplicateAgent {
        /// The duplicated id.
        id: AgentId,
    },
    /// `remove` was called with an id that is not registered.
    UnknownAgent {
        /// The missing id.
        id: AgentId,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAgent { id } => {
                write!(f, "agent with unique id {id} already added to scheduler")
            }
            Self::UnknownAgent { id } => write!(f, "agent {id} is not in the schedule"),
        }
    }
}

impl Error for ScheduleError {}
