//! # Wire Format
//!
//! Endpoint paths and payload types, reproduced exactly for drop-in
//! compatibility with the storefront backend.
//!
//! ## Endpoint Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation        Method  Path                     Body                 │
//! │  ─────────        ──────  ────                     ────                 │
//! │  Add to cart      POST    /cart/add.js             {"items":[{id,qty}]} │
//! │  Change quantity  POST    /cart/change.js          {"id":key,"quantity"}│
//! │  Read cart        GET     /cart.js                 (none)               │
//! │  Suggest          GET     /search/suggest.json?q=..&resources[type]=    │
//! │                           product&resources[limit]=N                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The suggest query keeps the literal `resources[...]` bracket form the
//! backend documents; only the `q` value is percent-encoded.

use serde::{Deserialize, Serialize};

use vitrine_core::Money;

// =============================================================================
// Endpoint Paths
// =============================================================================

/// Add-to-cart endpoint.
pub const ADD_PATH: &str = "/cart/add.js";

/// Line quantity change endpoint.
pub const CHANGE_PATH: &str = "/cart/change.js";

/// Full cart read endpoint.
pub const CART_PATH: &str = "/cart.js";

/// Predictive search endpoint.
pub const SUGGEST_PATH: &str = "/search/suggest.json";

// =============================================================================
// Mutation Payloads
// =============================================================================

/// One entry of an add batch.
#[derive(Debug, Clone, Serialize)]
pub struct AddLine {
    /// Variant id.
    pub id: u64,

    /// Quantity to add.
    pub quantity: u32,
}

/// Body for `POST /cart/add.js`.
///
/// The endpoint accepts a batch; this layer always sends a single-element
/// one, matching the storefront's own add flow.
#[derive(Debug, Clone, Serialize)]
pub struct AddRequest {
    pub items: Vec<AddLine>,
}

impl AddRequest {
    /// Builds the single-element batch for one variant.
    pub fn single(variant_id: u64, quantity: u32) -> Self {
        AddRequest {
            items: vec![AddLine {
                id: variant_id,
                quantity,
            }],
        }
    }
}

/// Body for `POST /cart/change.js`.
///
/// `quantity = 0` removes the line.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeRequest {
    /// Opaque line key (the endpoint calls this field `id`).
    pub id: String,

    /// New absolute quantity.
    pub quantity: u32,
}

// =============================================================================
// Suggest Response Envelope
// =============================================================================

/// A product suggestion as the suggest endpoint returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductSuggestion {
    /// Product title.
    pub title: String,

    /// Product page URL.
    pub url: String,

    /// Price in minor currency units.
    pub price: Money,

    /// Featured image, absent for imageless products.
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
}

/// Featured image reference inside a suggestion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeaturedImage {
    pub url: String,
}

/// Response envelope: `{resources:{results:{products:[...]}}}`.
#[derive(Debug, Deserialize)]
pub struct SuggestEnvelope {
    pub resources: SuggestResources,
}

#[derive(Debug, Deserialize)]
pub struct SuggestResources {
    pub results: SuggestResults,
}

#[derive(Debug, Deserialize)]
pub struct SuggestResults {
    #[serde(default)]
    pub products: Vec<ProductSuggestion>,
}

// =============================================================================
// Query Building
// =============================================================================

/// Builds the suggest path-and-query for a query string.
///
/// ## Example
/// ```rust
/// use vitrine_client::wire::suggest_query;
///
/// assert_eq!(
///     suggest_query("mug", 5),
///     "/search/suggest.json?q=mug&resources[type]=product&resources[limit]=5"
/// );
/// ```
pub fn suggest_query(query: &str, limit: u32) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!(
        "{}?q={}&resources[type]=product&resources[limit]={}",
        SUGGEST_PATH, encoded, limit
    )
}

/// Builds the search results page URL for an Enter-key submit.
pub fn search_page_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("/search?q={}", encoded)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_exact_body() {
        // The backend contract, byte for byte
        let body = serde_json::to_string(&AddRequest::single(41234567, 1)).unwrap();
        assert_eq!(body, r#"{"items":[{"id":41234567,"quantity":1}]}"#);
    }

    #[test]
    fn test_change_request_exact_body() {
        let body = serde_json::to_string(&ChangeRequest {
            id: "39897499729985:3a2d".into(),
            quantity: 0,
        })
        .unwrap();
        assert_eq!(body, r#"{"id":"39897499729985:3a2d","quantity":0}"#);
    }

    #[test]
    fn test_suggest_query_shape() {
        assert_eq!(
            suggest_query("mug", 5),
            "/search/suggest.json?q=mug&resources[type]=product&resources[limit]=5"
        );
        // Only the q value is encoded; the bracket params stay literal
        assert_eq!(
            suggest_query("café", 3),
            "/search/suggest.json?q=caf%C3%A9&resources[type]=product&resources[limit]=3"
        );
    }

    #[test]
    fn test_search_page_url() {
        assert_eq!(search_page_url("blue mug"), "/search?q=blue+mug");
    }

    #[test]
    fn test_suggest_envelope_decode() {
        let json = r#"{
            "resources": {
                "results": {
                    "products": [
                        {
                            "title": "Ceramic Mug",
                            "url": "/products/ceramic-mug",
                            "price": 1999,
                            "featured_image": {"url": "https://cdn.example.com/mug.jpg"},
                            "vendor": "ignored"
                        },
                        {
                            "title": "Plain Mug",
                            "url": "/products/plain-mug",
                            "price": 999
                        }
                    ]
                }
            }
        }"#;
        let envelope: SuggestEnvelope = serde_json::from_str(json).unwrap();
        let products = envelope.resources.results.products;
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Ceramic Mug");
        assert_eq!(products[0].price.minor_units(), 1999);
        assert!(products[1].featured_image.is_none());
    }

    #[test]
    fn test_suggest_envelope_empty_products() {
        let json = r#"{"resources":{"results":{}}}"#;
        let envelope: SuggestEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.resources.results.products.is_empty());
    }
}
