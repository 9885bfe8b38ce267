// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod status;
pub mod supervisor;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{RunRequest, resolve_run_request};
use crate::errors::Result;
use crate::exec::{ProcessRunner, SystemProcessRunner};
use crate::status::{
    HttpTransport, StatusReporter, StatusState, StatusTransport, StatusUpdate, status_url,
};
use crate::supervisor::ProcessSupervisor;

/// High-level entry point used by `main.rs`.
///
/// Uses the `reqwest` transport and spawns a real child process. Returns
/// the exit code for the process.
pub async fn run(args: CliArgs) -> Result<i32> {
    let transport = HttpTransport::new()?;
    run_with(&args, transport, SystemProcessRunner).await
}

/// Same as [`run`] with the transport and process runner supplied.
///
/// This wires together:
/// - config loading + validation (nothing is sent for invalid input)
/// - the status reporter over `transport`
/// - the supervisor state machine driving `runner`
pub async fn run_with<T, P>(args: &CliArgs, transport: T, runner: P) -> Result<i32>
where
    T: StatusTransport,
    P: ProcessRunner,
{
    let request = resolve_run_request(args)?;

    if args.dry_run {
        print_dry_run(&request)?;
        return Ok(0);
    }

    let reporter = StatusReporter::new(transport, &request);
    let mut supervisor = ProcessSupervisor::new(reporter, runner);

    let report = supervisor.run(&request).await?;
    Ok(report.exit_code())
}

/// Print the destination and the payloads that a real run would send.
fn print_dry_run(request: &RunRequest) -> Result<()> {
    let url = status_url(request.api_url(), request.repository(), request.sha());

    println!("statusrun dry-run");
    println!("  POST {url}");
    println!("  command: {}", request.command());
    if !request.credentials().username().is_empty() {
        println!("  username: {}", request.credentials().username());
    }
    println!();

    for state in [StatusState::Pending, StatusState::Success] {
        let body = StatusUpdate::for_request(request, state).to_json()?;
        println!("  {}", String::from_utf8_lossy(&body));
    }

    debug!("dry-run complete (no requests sent, command not run)");
    Ok(())
}
