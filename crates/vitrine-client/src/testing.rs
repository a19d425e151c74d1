//! # Test Transport
//!
//! A scripted [`HttpTransport`] double so clients and the page layer can be
//! exercised without a network. Exposed publicly because host integrations
//! use it the same way this workspace's own tests do.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{ClientError, ClientResult};
use crate::http::{HttpResponse, HttpTransport};

/// One request as the stub observed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// `"GET"` or `"POST"`.
    pub method: &'static str,

    /// Path plus query, exactly as the client sent it.
    pub path: String,

    /// Compact JSON body for POSTs, `None` for GETs.
    pub body: Option<String>,
}

/// Scripted transport: responses are consumed in FIFO order, requests are
/// recorded for assertion.
#[derive(Default)]
pub struct StubTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<ClientResult<HttpResponse>>>,
}

impl StubTransport {
    /// Creates an empty stub. A request with no scripted response fails as a
    /// network error naming the stub, so the offending test is obvious.
    pub fn new() -> Self {
        StubTransport::default()
    }

    /// Scripts a response with the given status and JSON body.
    pub fn respond_json(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .expect("stub responses lock")
            .push_back(Ok(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }));
    }

    /// Scripts a transport-level rejection.
    pub fn respond_network_error(&self, message: &str) {
        self.responses
            .lock()
            .expect("stub responses lock")
            .push_back(Err(ClientError::Network(message.to_string())));
    }

    /// Returns every request observed so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("stub requests lock").clone()
    }

    /// Number of requests observed so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("stub requests lock").len()
    }

    fn record(&self, method: &'static str, path: &str, body: Option<String>) {
        self.requests
            .lock()
            .expect("stub requests lock")
            .push(RecordedRequest {
                method,
                path: path.to_string(),
                body,
            });
    }

    fn next_response(&self) -> ClientResult<HttpResponse> {
        self.responses
            .lock()
            .expect("stub responses lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(ClientError::Network(
                    "StubTransport: no scripted response left".to_string(),
                ))
            })
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, path_and_query: &str) -> ClientResult<HttpResponse> {
        self.record("GET", path_and_query, None);
        self.next_response()
    }

    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> ClientResult<HttpResponse> {
        self.record("POST", path, Some(body.to_string()));
        self.next_response()
    }
}
