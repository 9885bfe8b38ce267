// src/status/transport.rs

//! Pluggable transport for status requests.
//!
//! The reporter talks to a `StatusTransport` instead of an HTTP client
//! directly, so tests can swap in a recording fake sink.
//!
//! Contract: `send` performs exactly one request. `Ok` means the sink
//! answered (with any status code); `Err` means no usable response was
//! obtained. Classification of the status code is the reporter's job.

use std::future::Future;
use std::pin::Pin;

use anyhow::{Context, Result};
use tracing::debug;

/// A fully prepared status request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl SinkRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// What came back from the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkResponse {
    pub status: u16,
    pub body: String,
}

pub trait StatusTransport: Send + Sync {
    /// POST the request and return the sink's status code and body.
    fn send(
        &self,
        request: SinkRequest,
    ) -> Pin<Box<dyn Future<Output = Result<SinkResponse>> + Send + '_>>;
}

/// Production transport over `reqwest`.
///
/// No timeout is configured: a status call blocks until the sink answers or
/// the connection fails.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }
}

impl StatusTransport for HttpTransport {
    fn send(
        &self,
        request: SinkRequest,
    ) -> Pin<Box<dyn Future<Output = Result<SinkResponse>> + Send + '_>> {
        Box::pin(async move {
            let mut builder = self.client.post(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder
                .body(request.body)
                .send()
                .await
                .with_context(|| format!("sending request to {}", request.url))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .with_context(|| format!("reading response body from {}", request.url))?;

            debug!(url = %request.url, status, "sink responded");

            Ok(SinkResponse { status, body })
        })
    }
}
