// src/config/validate.rs

use crate::config::model::{DEFAULT_API_URL, RawRunRequest, RunRequest, default_user_agent};
use crate::errors::{Result, StatusRunError};
use crate::exec::CommandSpec;
use crate::status::Credentials;

impl TryFrom<RawRunRequest> for RunRequest {
    type Error = StatusRunError;

    fn try_from(raw: RawRunRequest) -> std::result::Result<Self, Self::Error> {
        let repository = required(raw.repository, "no organization/repository provided (-r)")?;
        let sha = required(raw.sha, "no commit SHA provided (-s)")?;
        let context = required(raw.context, "no commit status context provided (-c)")?;
        let auth_token = required(raw.auth_token, "no auth token or password provided (-a)")?;
        let command = command_from_argv(raw.command)?;

        let api_url = non_empty(raw.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        Ok(RunRequest {
            repository,
            sha,
            context,
            description: raw.description.unwrap_or_default(),
            target_url: raw.target_url.unwrap_or_default(),
            credentials: Credentials::new(raw.username.unwrap_or_default(), auth_token),
            api_url,
            user_agent: non_empty(raw.user_agent).unwrap_or_else(default_user_agent),
            command,
        })
    }
}

/// Empty strings count as missing; whitespace is kept as given.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required(value: Option<String>, message: &str) -> Result<String> {
    non_empty(value).ok_or_else(|| StatusRunError::Validation(message.to_string()))
}

fn command_from_argv(argv: Vec<String>) -> Result<CommandSpec> {
    let mut argv = argv.into_iter();
    match argv.next() {
        Some(program) if !program.is_empty() => Ok(CommandSpec::new(program, argv.collect())),
        _ => Err(StatusRunError::Validation("no command given".to_string())),
    }
}

fn validate_api_url(api_url: &str) -> Result<()> {
    if api_url.starts_with("https://") || api_url.starts_with("http://") {
        Ok(())
    } else {
        Err(StatusRunError::Validation(format!(
            "api url '{api_url}' must start with http:// or https://"
        )))
    }
}
