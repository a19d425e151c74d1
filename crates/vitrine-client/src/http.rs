//! # HTTP Transport Seam
//!
//! The injected boundary between endpoint clients and the network.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Transport Injection                                 │
//! │                                                                         │
//! │   CartClient / SearchClient                                            │
//! │            │                                                            │
//! │            ▼                                                            │
//! │   dyn HttpTransport ──┬──► ReqwestTransport (production)               │
//! │                       └──► StubTransport    (tests, no network)        │
//! │                                                                         │
//! │   The clients never see reqwest types; they see statuses and bytes.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timeouts
//! No request timeout is applied unless `[http] timeout_ms` is configured.
//! An unset timeout means a hung request suspends only the task that issued
//! it; unrelated interactions stay responsive.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::HttpConfig;
use crate::error::{ClientError, ClientResult};

// =============================================================================
// Response Type
// =============================================================================

/// A raw endpoint response: status plus body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,

    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

// =============================================================================
// Transport Trait
// =============================================================================

/// The network primitive the clients are written against.
///
/// Implementations resolve `path_and_query` against whatever base they were
/// configured with. Errors are transport-level rejections only
/// ([`ClientError::Network`]); a non-success status is a normal return value
/// for callers to inspect.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request.
    async fn get(&self, path_and_query: &str) -> ClientResult<HttpResponse>;

    /// Issues a POST request with a JSON body.
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> ClientResult<HttpResponse>;
}

// =============================================================================
// Reqwest Implementation
// =============================================================================

/// Production transport over reqwest.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base: Url,
}

impl ReqwestTransport {
    /// Builds a transport from HTTP configuration.
    ///
    /// ## Errors
    /// - [`ClientError::InvalidUrl`] if the base URL does not parse
    /// - [`ClientError::InvalidConfig`] if the client cannot be constructed
    pub fn new(config: &HttpConfig) -> ClientResult<Self> {
        let base = Url::parse(&config.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(ReqwestTransport { client, base })
    }

    fn join(&self, path_and_query: &str) -> ClientResult<Url> {
        Ok(self.base.join(path_and_query)?)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, path_and_query: &str) -> ClientResult<HttpResponse> {
        let url = self.join(path_and_query)?;
        debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }

    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> ClientResult<HttpResponse> {
        let url = self.join(path)?;
        debug!(%url, "POST");

        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
