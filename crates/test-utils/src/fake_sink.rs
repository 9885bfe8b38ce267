use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use statusrun::status::{SinkRequest, SinkResponse, StatusState, StatusTransport, StatusUpdate};

/// What the fake sink answers to one request.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Status(u16, String),
    /// No HTTP response at all (connection refused, ...).
    Unreachable(String),
}

impl FakeResponse {
    pub fn created() -> Self {
        FakeResponse::Status(201, "{}".to_string())
    }
}

/// A fake status sink that:
/// - records every request it receives
/// - answers with scripted responses in order, then `201 Created`.
///
/// Clones share state, so a test can keep one handle and move the other
/// into the reporter.
#[derive(Debug, Clone, Default)]
pub struct FakeSink {
    requests: Arc<Mutex<Vec<SinkRequest>>>,
    responses: Arc<Mutex<VecDeque<FakeResponse>>>,
}

impl FakeSink {
    /// Sink that accepts everything.
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Sink that answers the first requests with `responses`.
    pub fn with_responses(responses: Vec<FakeResponse>) -> Self {
        Self {
            requests: Arc::default(),
            responses: Arc::new(Mutex::new(responses.into())),
        }
    }

    pub fn requests(&self) -> Vec<SinkRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Decoded bodies of every request, in order.
    pub fn updates(&self) -> Vec<StatusUpdate> {
        self.requests()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("request body is a StatusUpdate"))
            .collect()
    }

    pub fn states(&self) -> Vec<StatusState> {
        self.updates().into_iter().map(|u| u.state).collect()
    }
}

impl StatusTransport for FakeSink {
    fn send(
        &self,
        request: SinkRequest,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<SinkResponse>> + Send + '_>> {
        let requests = Arc::clone(&self.requests);
        let responses = Arc::clone(&self.responses);

        Box::pin(async move {
            {
                let mut guard = requests.lock().unwrap();
                guard.push(request);
            }

            let next = responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(FakeResponse::created);

            match next {
                FakeResponse::Status(status, body) => Ok(SinkResponse { status, body }),
                FakeResponse::Unreachable(reason) => Err(anyhow::anyhow!(reason)),
            }
        })
    }
}
