// src/config/model.rs

use serde::Deserialize;

use crate::exec::CommandSpec;
use crate::status::Credentials;

/// Base URL of the public GitHub API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub fn default_user_agent() -> String {
    format!("statusrun/{}", env!("CARGO_PKG_VERSION"))
}

/// Optional defaults file passed with `--config`.
///
/// ```toml
/// [sink]
/// api_url = "https://github.example.com/api/v3"
/// user_agent = "acme-ci"
///
/// [status]
/// repo = "acme/widget"
/// context = "ci/build"
/// description = "unit tests"
/// target_url = "https://ci.example.com/job/1"
/// username = "octocat"
/// ```
///
/// Every key is optional. The auth token is deliberately not accepted here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub sink: SinkSection,

    #[serde(default)]
    pub status: StatusSection,
}

/// `[sink]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SinkSection {
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
}

/// `[status]` section: defaults for the per-run status fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusSection {
    pub repo: Option<String>,
    pub context: Option<String>,
    pub description: Option<String>,
    pub target_url: Option<String>,
    pub username: Option<String>,
}

/// Operator input before validation.
///
/// Anything may be missing or empty here; `RunRequest::try_from` decides
/// whether it is good enough to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRunRequest {
    pub repository: Option<String>,
    pub sha: Option<String>,
    pub context: Option<String>,
    pub description: Option<String>,
    pub target_url: Option<String>,
    pub username: Option<String>,
    pub auth_token: Option<String>,
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
    /// Child program followed by its arguments.
    pub command: Vec<String>,
}

/// Validated, read-only input for one run.
///
/// Only obtainable through `TryFrom<RawRunRequest>`, so holding one means
/// `repository`, `sha`, `context`, the auth token and the command are all
/// present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub(super) repository: String,
    pub(super) sha: String,
    pub(super) context: String,
    pub(super) description: String,
    pub(super) target_url: String,
    pub(super) credentials: Credentials,
    pub(super) api_url: String,
    pub(super) user_agent: String,
    pub(super) command: CommandSpec,
}

impl RunRequest {
    /// `organization/repository`.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn sha(&self) -> &str {
        &self.sha
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn command(&self) -> &CommandSpec {
        &self.command
    }
}
