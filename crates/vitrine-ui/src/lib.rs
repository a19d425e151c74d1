//! # vitrine-ui: Page Layer for Vitrine
//!
//! Turns page events into endpoint calls and endpoint results into page
//! mutations, through the injected [`Surface`] trait.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrine Page Layer                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Host (implements Surface)                      │   │
//! │  │     click/submit events ──► registry ──► components            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ vitrine-ui (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌──────────┐  ┌────────────┐  │   │
//! │  │   │ CartSync  │  │ Reconciler │  │ Notifier │  │ Predictive │  │   │
//! │  │   │ add/change│  │ badge/dot/ │  │ toasts   │  │ Search     │  │   │
//! │  │   │ /refresh  │  │ summary    │  │          │  │ (debounce) │  │   │
//! │  │   └───────────┘  └────────────┘  └──────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   components/: registry + add-to-cart, quantity, menu, carousel│   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              vitrine-client (endpoint clients)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wiring
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitrine_client::{CartClient, ReqwestTransport, SearchClient, StorefrontConfig};
//! use vitrine_core::SymbolFormatter;
//! use vitrine_ui::components::{AddToCartButton, ComponentRegistry};
//! use vitrine_ui::{CartSync, PredictiveSearch, Surface};
//!
//! # async fn wire(surface: Arc<dyn Surface>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = StorefrontConfig::load("vitrine.toml")?;
//! let transport = Arc::new(ReqwestTransport::new(&config.http)?);
//! let formatter = Arc::new(SymbolFormatter::default());
//!
//! let sync = Arc::new(CartSync::new(
//!     Arc::new(CartClient::new(transport.clone())),
//!     surface.clone(),
//!     formatter.clone(),
//!     &config,
//! ));
//! let search = PredictiveSearch::new(
//!     Arc::new(SearchClient::new(transport, config.search.limit)),
//!     surface.clone(),
//!     formatter,
//!     &config.search,
//! );
//!
//! let mut registry = ComponentRegistry::new();
//! registry.register_clickable(Arc::new(AddToCartButton::new(
//!     "[data-add-to-cart][data-variant-id=\"41234567\"]",
//!     41234567,
//!     sync.clone(),
//!     surface.clone(),
//! )));
//!
//! // First paint reflects the server cart
//! sync.refresh().await?;
//! # Ok(())
//! # }
//! ```

pub mod components;
pub mod dom;
pub mod error;
pub mod notifier;
pub mod reconciler;
pub mod search;
pub mod surface;
pub mod sync;
pub mod testing;

pub use error::{UiError, UiResult};
pub use notifier::Notifier;
pub use reconciler::Reconciler;
pub use search::{PredictiveSearch, SearchPanel};
pub use surface::Surface;
pub use sync::CartSync;
