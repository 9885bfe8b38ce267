// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{ConfigFile, RawRunRequest, RunRequest};
use crate::errors::{Result, StatusRunError};

/// Load the optional defaults file.
///
/// This only performs TOML deserialization; required-field checks happen
/// when the merged input is turned into a [`RunRequest`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        StatusRunError::Config(format!("reading config file {}: {e}", path.display()))
    })?;

    let config: ConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Combine CLI input (flags and their env fallbacks) with the file defaults.
///
/// Precedence: flag > environment variable > config file. clap already
/// folds the environment into `args`, so only the file is left to merge.
pub fn merge_sources(args: &CliArgs, file: ConfigFile) -> RawRunRequest {
    let ConfigFile { sink, status } = file;

    RawRunRequest {
        repository: args.repo.clone().or(status.repo),
        sha: args.sha.clone(),
        context: args.context.clone().or(status.context),
        description: args.description.clone().or(status.description),
        target_url: args.target_url.clone().or(status.target_url),
        username: args.username.clone().or(status.username),
        auth_token: args.auth.clone(),
        api_url: args.api_url.clone().or(sink.api_url),
        user_agent: sink.user_agent,
        command: args.command.clone(),
    }
}

/// Recommended entry point: load `--config` (if any), merge, validate.
pub fn resolve_run_request(args: &CliArgs) -> Result<RunRequest> {
    let file = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            load_from_path(path)?
        }
        None => ConfigFile::default(),
    };

    RunRequest::try_from(merge_sources(args, file))
}
