// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs the wrapped child command with inherited standard
//! streams and reports how it ended.
//!
//! - [`command`] holds `CommandSpec`, the program plus its arguments.
//! - [`outcome`] defines `ChildOutcome`, the structured termination reason,
//!   and its mapping onto a commit status state.
//! - [`child`] spawns and waits on the real process via `tokio::process`.
//! - [`backend`] provides the `ProcessRunner` trait and the production
//!   `SystemProcessRunner`; tests replace it with a scripted runner.

pub mod backend;
pub mod child;
pub mod command;
pub mod outcome;

pub use backend::{ProcessRunner, SystemProcessRunner};
pub use command::CommandSpec;
pub use outcome::ChildOutcome;
