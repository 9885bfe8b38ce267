#![allow(dead_code)]

use statusrun::config::{RawRunRequest, RunRequest};

/// Builder for `RunRequest` to simplify test setup.
///
/// Starts from a complete request (`acme/widget@deadbeef`, context `ci`,
/// user `octocat`, token `token`, command `true`) so tests only spell out
/// what they change.
pub struct RunRequestBuilder {
    raw: RawRunRequest,
}

impl RunRequestBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawRunRequest {
                repository: Some("acme/widget".to_string()),
                sha: Some("deadbeef".to_string()),
                context: Some("ci".to_string()),
                description: Some("unit test".to_string()),
                target_url: None,
                username: Some("octocat".to_string()),
                auth_token: Some("token".to_string()),
                api_url: Some("http://sink.test".to_string()),
                user_agent: Some("statusrun-tests".to_string()),
                command: vec!["true".to_string()],
            },
        }
    }

    pub fn repository(mut self, repo: &str) -> Self {
        self.raw.repository = Some(repo.to_string());
        self
    }

    pub fn sha(mut self, sha: &str) -> Self {
        self.raw.sha = Some(sha.to_string());
        self
    }

    pub fn context(mut self, context: &str) -> Self {
        self.raw.context = Some(context.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.raw.description = Some(description.to_string());
        self
    }

    pub fn target_url(mut self, url: &str) -> Self {
        self.raw.target_url = Some(url.to_string());
        self
    }

    pub fn username(mut self, username: &str) -> Self {
        self.raw.username = Some(username.to_string());
        self
    }

    pub fn auth_token(mut self, token: &str) -> Self {
        self.raw.auth_token = Some(token.to_string());
        self
    }

    pub fn api_url(mut self, url: &str) -> Self {
        self.raw.api_url = Some(url.to_string());
        self
    }

    pub fn command(mut self, argv: &[&str]) -> Self {
        self.raw.command = argv.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Mutate the raw input directly (e.g. to clear a required field).
    pub fn with_raw(mut self, f: impl FnOnce(&mut RawRunRequest)) -> Self {
        f(&mut self.raw);
        self
    }

    pub fn build_raw(self) -> RawRunRequest {
        self.raw
    }

    pub fn build(self) -> RunRequest {
        RunRequest::try_from(self.raw).expect("Failed to build valid request from builder")
    }
}

impl Default for RunRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
