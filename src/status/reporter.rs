// src/status/reporter.rs

use tracing::{debug, info, warn};

use crate::config::RunRequest;
use crate::errors::{Result, StatusRunError};

use super::auth::Credentials;
use super::model::{StatusState, StatusUpdate};
use super::transport::{SinkRequest, StatusTransport};

/// The only response code that counts as a delivered status.
pub const STATUS_CREATED: u16 = 201;

/// Destination for status updates of `sha` in `repository`.
///
/// Plain concatenation; the identifiers are used as given.
pub fn status_url(api_url: &str, repository: &str, sha: &str) -> String {
    format!(
        "{}/repos/{}/statuses/{}",
        api_url.trim_end_matches('/'),
        repository,
        sha
    )
}

/// Sends one `StatusUpdate` per call and classifies the sink's answer.
///
/// Every call is fire-once: no retry, no caching, no batching.
pub struct StatusReporter<T: StatusTransport> {
    transport: T,
    endpoint: String,
    credentials: Credentials,
    user_agent: String,
}

impl<T: StatusTransport> std::fmt::Debug for StatusReporter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusReporter")
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl<T: StatusTransport> StatusReporter<T> {
    pub fn new(transport: T, request: &RunRequest) -> Self {
        Self {
            transport,
            endpoint: status_url(request.api_url(), request.repository(), request.sha()),
            credentials: request.credentials().clone(),
            user_agent: request.user_agent().to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Serialize `update` into the request that `report` would send.
    pub fn build_request(&self, update: &StatusUpdate) -> Result<SinkRequest> {
        let body = update.to_json()?;
        let headers = vec![
            (
                "Authorization".to_string(),
                self.credentials.authorization_header(),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
            (
                "Accept".to_string(),
                "application/vnd.github+json".to_string(),
            ),
            ("User-Agent".to_string(), self.user_agent.clone()),
        ];

        Ok(SinkRequest {
            url: self.endpoint.clone(),
            headers,
            body,
        })
    }

    /// Deliver `update`; succeeds only on HTTP 201.
    pub async fn report(&self, update: &StatusUpdate) -> Result<()> {
        let request = self.build_request(update)?;
        let state = update.state;

        debug!(url = %self.endpoint, %state, context = %update.context, "posting commit status");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(url = %self.endpoint, %state, error = %err, "status request failed");
                return Err(StatusRunError::Reporting {
                    state,
                    status: None,
                    body: format!("{err:#}"),
                });
            }
        };

        if response.status != STATUS_CREATED {
            warn!(
                url = %self.endpoint,
                %state,
                status = response.status,
                "sink rejected commit status"
            );
            return Err(StatusRunError::Reporting {
                state,
                status: Some(response.status),
                body: response.body,
            });
        }

        info!(%state, context = %update.context, "commit status reported");
        Ok(())
    }

    /// Convenience: build the update for `state` from `request` and send it.
    pub async fn report_state(&self, request: &RunRequest, state: StatusState) -> Result<()> {
        self.report(&StatusUpdate::for_request(request, state)).await
    }
}
