// src/supervisor/process.rs

use tracing::{error, info};

use crate::config::RunRequest;
use crate::errors::{Result, StatusRunError};
use crate::exec::{ChildOutcome, ProcessRunner};
use crate::status::{StatusReporter, StatusState, StatusTransport};

use super::{RunPhase, RunReport};

/// Runs the child once and drives exactly two status reports around it.
pub struct ProcessSupervisor<T: StatusTransport, P: ProcessRunner> {
    reporter: StatusReporter<T>,
    runner: P,
    phase: RunPhase,
}

impl<T: StatusTransport, P: ProcessRunner> std::fmt::Debug for ProcessSupervisor<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessSupervisor")
            .field("reporter", &self.reporter)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl<T: StatusTransport, P: ProcessRunner> ProcessSupervisor<T, P> {
    pub fn new(reporter: StatusReporter<T>, runner: P) -> Self {
        Self {
            reporter,
            runner,
            phase: RunPhase::Start,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Report `pending`, run the child, report the terminal state.
    ///
    /// Any reporting failure is returned as-is and ends the run; a
    /// successful child does not mask a failed terminal report.
    pub async fn run(&mut self, request: &RunRequest) -> Result<RunReport> {
        info!(
            url = %self.reporter.endpoint(),
            context = %request.context(),
            "starting supervised run"
        );

        self.reporter
            .report_state(request, StatusState::Pending)
            .await?;
        self.phase = RunPhase::PendingReported;

        let outcome = self.runner.run(request.command()).await;
        if !matches!(outcome, ChildOutcome::FailedToStart(_)) {
            self.phase = RunPhase::Running;
        }
        let state = outcome.status_state();

        info!(?outcome, %state, "child outcome classified");

        self.reporter.report_state(request, state).await?;
        self.phase = RunPhase::TerminalReported(state);

        if let Some(err) = execution_error(request, &outcome) {
            error!(error = %err, "child command could not be started");
        }

        Ok(RunReport { state, outcome })
    }
}

/// Diagnostic for a child that never started; `None` for any other outcome.
pub(crate) fn execution_error(
    request: &RunRequest,
    outcome: &ChildOutcome,
) -> Option<StatusRunError> {
    match outcome {
        ChildOutcome::FailedToStart(reason) => Some(StatusRunError::Execution {
            command: request.command().argv(),
            reason: reason.clone(),
        }),
        _ => None,
    }
}
