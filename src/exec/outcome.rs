// src/exec/outcome.rs

use std::process::ExitStatus;

use crate::status::StatusState;

/// How the child command ended.
///
/// Classification never looks at error text: a plain exit code decides
/// between success and failure, anything else is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildOutcome {
    /// The process ran and exited with this code.
    Exited(i32),
    /// The process ran but ended without an exit code (e.g. killed by a
    /// signal), or waiting on it failed.
    Terminated(String),
    /// The process never started (missing executable, permission denied).
    FailedToStart(String),
}

impl ChildOutcome {
    pub fn from_exit_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => ChildOutcome::Exited(code),
            None => ChildOutcome::Terminated(describe_abnormal(status)),
        }
    }

    /// Terminal commit status for this outcome.
    pub fn status_state(&self) -> StatusState {
        match self {
            ChildOutcome::Exited(0) => StatusState::Success,
            ChildOutcome::Exited(_) => StatusState::Failure,
            ChildOutcome::Terminated(_) | ChildOutcome::FailedToStart(_) => StatusState::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ChildOutcome::Exited(0))
    }
}

#[cfg(unix)]
fn describe_abnormal(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;

    match status.signal() {
        Some(signal) => format!("terminated by signal {signal}"),
        None => format!("terminated abnormally ({status})"),
    }
}

#[cfg(not(unix))]
fn describe_abnormal(status: ExitStatus) -> String {
    format!("terminated abnormally ({status})")
}
