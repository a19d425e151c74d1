//! # Suggest Endpoint Client
//!
//! One operation: fetch product suggestions for a query. Debounce and
//! stale-response handling live in the page layer; this client is a plain
//! request/decode pair.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::http::HttpTransport;
use crate::wire::{suggest_query, ProductSuggestion, SuggestEnvelope};

/// Client for the predictive search endpoint.
pub struct SearchClient {
    transport: Arc<dyn HttpTransport>,
    limit: u32,
}

impl SearchClient {
    /// Creates a client requesting at most `limit` product results.
    pub fn new(transport: Arc<dyn HttpTransport>, limit: u32) -> Self {
        SearchClient { transport, limit }
    }

    /// Fetches product suggestions for a (already trimmed) query.
    pub async fn suggest(&self, query: &str) -> ClientResult<Vec<ProductSuggestion>> {
        debug!(query, limit = self.limit, "suggest");

        let path = suggest_query(query, self.limit);
        let response = self.transport.get(&path).await?;

        if !response.is_success() {
            warn!(status = response.status, "suggest rejected");
            return Err(ClientError::Http {
                status: response.status,
            });
        }

        let envelope: SuggestEnvelope = response.json()?;
        Ok(envelope.resources.results.products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
