// src/status/model.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RunRequest;
use crate::errors::Result;

/// State of a commit status as understood by the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    Pending,
    Success,
    Failure,
    Error,
}

impl StatusState {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusState::Pending => "pending",
            StatusState::Success => "success",
            StatusState::Failure => "failure",
            StatusState::Error => "error",
        }
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of a single `POST .../statuses/{sha}` call.
///
/// Field order matches the wire format. Optional strings are always
/// present on the wire; an absent value is sent as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub state: StatusState,
    #[serde(default)]
    pub target_url: String,
    #[serde(default)]
    pub description: String,
    pub context: String,
}

impl StatusUpdate {
    /// Build the update for `state` from the run's fixed fields.
    pub fn for_request(request: &RunRequest, state: StatusState) -> Self {
        Self {
            state,
            target_url: request.target_url().to_string(),
            description: request.description().to_string(),
            context: request.context().to_string(),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
