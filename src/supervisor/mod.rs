// src/supervisor/mod.rs

//! Outcome-reporting state machine.
//!
//! One run walks through:
//!
//! ```text
//! Start -> PendingReported -> Running -> TerminalReported
//! ```
//!
//! Validation happens before a supervisor exists (a `RunRequest` is only
//! constructible from valid input). A failed `pending` report stops the run
//! in `Start`; the child is never spawned.

use crate::exec::ChildOutcome;
use crate::status::StatusState;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Start,
    /// `pending` was delivered; the child has not run (or never started).
    PendingReported,
    /// The child process was spawned and has finished.
    Running,
    TerminalReported(StatusState),
}

/// Result of a run whose statuses were both delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Terminal state sent to the sink.
    pub state: StatusState,
    pub outcome: ChildOutcome,
}

impl RunReport {
    /// Process exit code for `statusrun` itself.
    pub fn exit_code(&self) -> i32 {
        if self.outcome.is_success() && self.state == StatusState::Success {
            0
        } else {
            1
        }
    }
}

pub mod process;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_clean_success_exits_zero() {
        let ok = RunReport {
            state: StatusState::Success,
            outcome: ChildOutcome::Exited(0),
        };
        assert_eq!(ok.exit_code(), 0);

        let failed = RunReport {
            state: StatusState::Failure,
            outcome: ChildOutcome::Exited(3),
        };
        assert_eq!(failed.exit_code(), 1);

        let never_started = RunReport {
            state: StatusState::Error,
            outcome: ChildOutcome::FailedToStart("not found".to_string()),
        };
        assert_eq!(never_started.exit_code(), 1);
    }
}

pub use process::ProcessSupervisor;
