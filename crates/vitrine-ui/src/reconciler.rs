//! # Reconciler
//!
//! Reflects a cart snapshot into every page region that displays cart state.
//!
//! ## Render Targets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Reconciled Regions                                  │
//! │                                                                         │
//! │  Cart snapshot ──► CartIndicators::project ──┬──► .cart-count-badge    │
//! │                                              ├──► .navbar-search-icon  │
//! │                                              │    .dot                  │
//! │                                              └──► .floating-cart-      │
//! │                                                   container             │
//! │                                                                         │
//! │  No diffing: every call fully overwrites the targeted regions, so      │
//! │  rendering the same snapshot twice yields identical page state.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use tracing::debug;

use vitrine_client::CartClient;
use vitrine_core::{Cart, CartIndicators, MoneyFormatter};

use crate::dom;
use crate::error::UiResult;
use crate::surface::Surface;

/// Renders cart snapshots onto the surface.
pub struct Reconciler {
    client: Arc<CartClient>,
    surface: Arc<dyn Surface>,
    formatter: Arc<dyn MoneyFormatter>,
}

impl Reconciler {
    pub fn new(
        client: Arc<CartClient>,
        surface: Arc<dyn Surface>,
        formatter: Arc<dyn MoneyFormatter>,
    ) -> Self {
        Reconciler {
            client,
            surface,
            formatter,
        }
    }

    /// Renders a snapshot, or fetches one first when the caller has none in
    /// hand. The extra round trip keeps the page on server truth.
    pub async fn render(&self, cart: Option<&Cart>) -> UiResult<()> {
        match cart {
            Some(cart) => {
                self.apply(cart);
                Ok(())
            }
            None => {
                let cart = self.client.fetch_cart().await?;
                self.apply(&cart);
                Ok(())
            }
        }
    }

    fn apply(&self, cart: &Cart) {
        debug!(item_count = cart.item_count, "render cart indicators");
        let view = CartIndicators::project(cart, self.formatter.as_ref());

        // Count badges
        match &view.badge {
            Some(count) => {
                self.surface.set_text(dom::CART_COUNT_BADGE, count);
                self.surface.set_visible(dom::CART_COUNT_BADGE, true);
            }
            None => {
                self.surface.set_visible(dom::CART_COUNT_BADGE, false);
            }
        }

        // Navigation dots
        self.surface.set_visible(dom::NAV_DOT, view.dot_visible);

        // Floating summary
        match &view.summary {
            Some(summary) => {
                self.surface
                    .remove_class(dom::FLOATING_CONTAINER, dom::HIDDEN_CLASS);
                self.surface
                    .set_text(dom::FLOATING_ITEMS, &summary.items_label);
                self.surface
                    .set_text(dom::FLOATING_TOTAL, &summary.total_label);
            }
            None => {
                self.surface
                    .add_class(dom::FLOATING_CONTAINER, dom::HIDDEN_CLASS);
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
