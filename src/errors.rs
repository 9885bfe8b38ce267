// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

use crate::status::StatusState;

#[derive(Error, Debug)]
pub enum StatusRunError {
    /// Required input was missing; raised before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The sink did not accept a status update.
    ///
    /// `status` is `None` when the request never produced an HTTP response
    /// (connection refused, TLS failure, unreadable body, ...).
    #[error("error creating commit status ({state}): {}\n{body}", describe_status(.status))]
    Reporting {
        state: StatusState,
        status: Option<u16>,
        body: String,
    },

    /// The child command could not be started at all.
    #[error("error executing command {command:?}: {reason}")]
    Execution { command: Vec<String>, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP {code}"),
        None => "no response from sink".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, StatusRunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporting_error_carries_response_body() {
        let err = StatusRunError::Reporting {
            state: StatusState::Pending,
            status: Some(404),
            body: "404 - Not Found\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "error creating commit status (pending): HTTP 404\n404 - Not Found\n"
        );
    }

    #[test]
    fn transport_failure_has_no_status() {
        let err = StatusRunError::Reporting {
            state: StatusState::Success,
            status: None,
            body: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("no response from sink"));
        assert!(err.to_string().ends_with("connection refused"));
    }
}
