// src/exec/child.rs

//! Single child process runner.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{info, warn};

use super::command::CommandSpec;
use super::outcome::ChildOutcome;

/// Spawn `spec` with the caller's stdin/stdout/stderr and wait for it.
///
/// Output is never captured or buffered, so interactive children behave as
/// if run directly. The environment is inherited unchanged.
pub async fn run_child(spec: &CommandSpec) -> ChildOutcome {
    info!(command = %spec, "starting child process");

    let mut cmd = Command::new(spec.program());
    cmd.args(spec.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            warn!(command = %spec, error = %err, "child process failed to start");
            return ChildOutcome::FailedToStart(err.to_string());
        }
    };

    let outcome = match child.wait().await {
        Ok(status) => ChildOutcome::from_exit_status(status),
        Err(err) => {
            warn!(command = %spec, error = %err, "waiting for child process failed");
            ChildOutcome::Terminated(format!("waiting for child failed: {err}"))
        }
    };

    info!(command = %spec, ?outcome, "child process finished");
    outcome
}
