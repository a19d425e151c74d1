//! # Cart Endpoint Client
//!
//! Typed operations over the three cart endpoints.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cart Operations                                     │
//! │                                                                         │
//! │  add_item ────► POST /cart/add.js ──► 2xx? ──► GET /cart.js ──► Cart   │
//! │                 (response is line JSON, not a cart: the follow-up      │
//! │                  read is what keeps renders on server truth)           │
//! │                                                                         │
//! │  change_quantity ──► POST /cart/change.js ──► 2xx? ──► Cart (direct)   │
//! │                                                                         │
//! │  fetch_cart ──────► GET /cart.js ──► Cart                              │
//! │                                                                         │
//! │  Non-2xx → ClientError::Http; transport rejection → ClientError::      │
//! │  Network. No retries: a failed mutation leaves the cart untouched      │
//! │  because nothing was applied optimistically.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use tracing::{debug, warn};

use vitrine_core::Cart;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpTransport;
use crate::wire::{AddRequest, ChangeRequest, ADD_PATH, CART_PATH, CHANGE_PATH};

/// Client for the cart endpoints, written against the transport seam.
pub struct CartClient {
    transport: Arc<dyn HttpTransport>,
}

impl CartClient {
    /// Creates a client over the given transport.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        CartClient { transport }
    }

    /// Adds `quantity` of a variant to the cart and returns the resulting
    /// full cart snapshot.
    ///
    /// The add endpoint answers with the added lines only, so a successful
    /// POST is followed by a full cart read; the returned snapshot is always
    /// server truth.
    pub async fn add_item(&self, variant_id: u64, quantity: u32) -> ClientResult<Cart> {
        debug!(variant_id, quantity, "add_item");

        let body = serde_json::to_value(AddRequest::single(variant_id, quantity))?;
        let response = self.transport.post_json(ADD_PATH, body).await?;

        if !response.is_success() {
            warn!(status = response.status, "add_item rejected");
            return Err(ClientError::Http {
                status: response.status,
            });
        }

        // The line JSON in the response is intentionally not decoded; the
        // follow-up read returns the authoritative snapshot
        self.fetch_cart().await
    }

    /// Sets a line's absolute quantity and returns the resulting cart.
    ///
    /// `quantity = 0` removes the line. The change endpoint returns the full
    /// cart directly, so no follow-up read is needed.
    pub async fn change_quantity(&self, key: &str, quantity: u32) -> ClientResult<Cart> {
        debug!(key, quantity, "change_quantity");

        let body = serde_json::to_value(ChangeRequest {
            id: key.to_string(),
            quantity,
        })?;
        let response = self.transport.post_json(CHANGE_PATH, body).await?;

        if !response.is_success() {
            warn!(status = response.status, "change_quantity rejected");
            return Err(ClientError::Http {
                status: response.status,
            });
        }

        response.json()
    }

    /// Reads the current cart snapshot.
    pub async fn fetch_cart(&self) -> ClientResult<Cart> {
        debug!("fetch_cart");

        let response = self.transport.get(CART_PATH).await?;

        if !response.is_success() {
            warn!(status = response.status, "fetch_cart rejected");
            return Err(ClientError::Http {
                status: response.status,
            });
        }

        response.json()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;

    const CART_JSON: &str = r#"{"item_count":3,"total_price":5997,"items":[
        {"key":"k1:aa","quantity":3,"variant_id":41234567}
    ]}"#;

    #[tokio::test]
    async fn test_add_item_posts_batch_then_fetches_cart() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, r#"{"items":[{"id":41234567,"quantity":1}]}"#);
        transport.respond_json(200, CART_JSON);

        let client = CartClient::new(transport.clone());
        let cart = client.add_item(41234567, 1).await.unwrap();

        assert_eq!(cart.item_count, 3);
        assert_eq!(cart.total_price.minor_units(), 5997);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/cart/add.js");
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"items":[{"id":41234567,"quantity":1}]}"#)
        );
        assert_eq!(requests[1].method, "GET");
        assert_eq!(requests[1].path, "/cart.js");
    }

    #[tokio::test]
    async fn test_add_item_http_error_skips_follow_up_fetch() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(422, r#"{"description":"sold out"}"#);

        let client = CartClient::new(transport.clone());
        let err = client.add_item(41234567, 1).await.unwrap_err();

        assert!(matches!(err, ClientError::Http { status: 422 }));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_add_item_network_error() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_network_error("connection refused");

        let client = CartClient::new(transport);
        let err = client.add_item(41234567, 1).await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_change_quantity_returns_cart_directly() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, r#"{"item_count":0,"total_price":0,"items":[]}"#);

        let client = CartClient::new(transport.clone());
        let cart = client.change_quantity("k1:aa", 0).await.unwrap();

        // Removal leaves an empty snapshot; no follow-up read happens
        assert!(cart.is_empty());
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/cart/change.js");
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"id":"k1:aa","quantity":0}"#)
        );
    }

    #[tokio::test]
    async fn test_fetch_cart_decodes_snapshot() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, CART_JSON);

        let client = CartClient::new(transport);
        let cart = client.fetch_cart().await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].variant_id, 41234567);
    }

    #[tokio::test]
    async fn test_fetch_cart_undecodable_body() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, "<html>maintenance</html>");

        let client = CartClient::new(transport);
        assert!(matches!(
            client.fetch_cart().await.unwrap_err(),
            ClientError::Deserialize(_)
        ));
    }
}
