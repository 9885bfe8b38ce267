// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Flags mirror the classic single-letter interface (`-r -s -c -d -t -u
//! -a`), followed by the child command. Most flags also fall back to a
//! `STATUSRUN_*` environment variable so CI jobs can keep secrets out of
//! the command line.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `statusrun`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "statusrun",
    version,
    about = "Run a command and report its outcome as a commit status.",
    long_about = None,
    after_help = "Example:\n  statusrun -r acme/widget -s \"$GIT_SHA\" -c ci/test -a \"$TOKEN\" -- cargo test"
)]
pub struct CliArgs {
    /// Repository in the form organization/repository, e.g. google/cadvisor.
    #[arg(short = 'r', long = "repo", env = "STATUSRUN_REPO", value_name = "ORG/REPO")]
    pub repo: Option<String>,

    /// Commit SHA the status is attached to.
    #[arg(short = 's', long, env = "STATUSRUN_SHA", value_name = "SHA")]
    pub sha: Option<String>,

    /// Commit status context, e.g. ci/build.
    #[arg(short = 'c', long, env = "STATUSRUN_CONTEXT", value_name = "CONTEXT")]
    pub context: Option<String>,

    /// Optional commit status description.
    #[arg(short = 'd', long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Optional commit status target_url.
    #[arg(short = 't', long, value_name = "URL")]
    pub target_url: Option<String>,

    /// Optional username for basic auth.
    #[arg(short = 'u', long, env = "STATUSRUN_USERNAME", value_name = "USER")]
    pub username: Option<String>,

    /// Password or token for basic auth.
    #[arg(
        short = 'a',
        long = "auth",
        env = "STATUSRUN_AUTH",
        hide_env_values = true,
        value_name = "TOKEN"
    )]
    pub auth: Option<String>,

    /// Base URL of the status API.
    ///
    /// Defaults to `https://api.github.com`; point it at a GitHub
    /// Enterprise `/api/v3` root when needed.
    #[arg(long, env = "STATUSRUN_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Optional TOML file with defaults for the flags above.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STATUSRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate input and print the requests, but don't send or run anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Command to run, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_trailing_command() {
        let args = CliArgs::try_parse_from([
            "statusrun", "-r", "acme/widget", "-s", "deadbeef", "-c", "ci", "-a", "token",
            "make", "-j4", "test",
        ])
        .unwrap();

        assert_eq!(args.repo.as_deref(), Some("acme/widget"));
        assert_eq!(args.sha.as_deref(), Some("deadbeef"));
        assert_eq!(args.command, vec!["make", "-j4", "test"]);
    }

    #[test]
    fn double_dash_separates_child_flags() {
        let args = CliArgs::try_parse_from([
            "statusrun", "-r", "acme/widget", "--", "ls", "-r", "--color",
        ])
        .unwrap();

        assert_eq!(args.repo.as_deref(), Some("acme/widget"));
        assert_eq!(args.command, vec!["ls", "-r", "--color"]);
    }

    #[test]
    fn command_may_be_absent_at_parse_time() {
        let args = CliArgs::try_parse_from(["statusrun", "-c", "ci"]).unwrap();
        assert!(args.command.is_empty());
    }
}
