// src/exec/backend.rs

//! Pluggable process runner abstraction.
//!
//! The supervisor talks to a `ProcessRunner` instead of spawning processes
//! itself. Production code uses [`SystemProcessRunner`]; tests provide a
//! runner that returns a scripted outcome and records what it was asked to
//! run.

use std::future::Future;
use std::pin::Pin;

use super::child::run_child;
use super::command::CommandSpec;
use super::outcome::ChildOutcome;

/// Trait abstracting how the child command is executed.
pub trait ProcessRunner: Send {
    /// Run `command` to completion and report how it ended.
    ///
    /// Failing to start is an outcome, not an error: the caller still owes
    /// the sink a terminal status.
    fn run<'a>(
        &'a mut self,
        command: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = ChildOutcome> + Send + 'a>>;
}

/// Real runner: spawns an OS process with inherited standard streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a CommandSpec,
    ) -> Pin<Box<dyn Future<Output = ChildOutcome> + Send + 'a>> {
        Box::pin(run_child(command))
    }
}
