//! # vitrine-client: Storefront Endpoint Client
//!
//! Typed JSON clients for the four storefront endpoints, written against an
//! injected transport seam.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Vitrine Client Layer                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 vitrine-client (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐ │   │
//! │  │  │ CartClient  │  │SearchClient │  │ HttpTransport (seam)    │ │   │
//! │  │  │ (cart.rs)   │  │ (search.rs) │  │ (http.rs)               │ │   │
//! │  │  │             │  │             │  │                         │ │   │
//! │  │  │ add/change/ │  │ suggest     │  │ reqwest in production,  │ │   │
//! │  │  │ fetch       │  │             │  │ StubTransport in tests  │ │   │
//! │  │  └─────────────┘  └─────────────┘  └─────────────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────────┐  ┌─────────────┐                              │   │
//! │  │  │ wire.rs     │  │ config.rs   │                              │   │
//! │  │  │ paths +     │  │ TOML + env  │                              │   │
//! │  │  │ payloads    │  │ + defaults  │                              │   │
//! │  │  └─────────────┘  └─────────────┘                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//! Two kinds matter to callers: [`ClientError::Network`] (the transport
//! rejected, nothing reached the endpoint) and [`ClientError::Http`]
//! (non-success status). No retries, no backoff: a failed mutation leaves
//! the server cart exactly as it was.

pub mod cart;
pub mod config;
pub mod error;
pub mod http;
pub mod search;
pub mod testing;
pub mod wire;

pub use cart::CartClient;
pub use config::{CartPageBehavior, HttpConfig, SearchConfig, StorefrontConfig};
pub use error::{ClientError, ClientResult};
pub use http::{HttpResponse, HttpTransport, ReqwestTransport};
pub use search::SearchClient;
pub use wire::ProductSuggestion;
