//! # Cart Sync
//!
//! The operation surface for cart mutations: every add / change / refresh
//! flows through here, and every one ends with the page reflecting server
//! truth (or untouched on failure).
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operation Flow                                │
//! │                                                                         │
//! │  Page Event            Operation              Outcome                   │
//! │  ──────────            ─────────              ───────                   │
//! │                                                                         │
//! │  Click + button ─────► add_item() ──────────► toast + render            │
//! │                                     └ error ► error toast, no render    │
//! │                                                                         │
//! │  Stepper/remove ─────► change_quantity() ───► render, or full reload    │
//! │                                               on the cart page          │
//! │                                     └ error ► log only (silent)         │
//! │                                                                         │
//! │  Page load ──────────► refresh() ───────────► fetch + render            │
//! │                                                                         │
//! │  Failure leaves the cart exactly as it was: nothing is applied          │
//! │  optimistically, so there is nothing to roll back.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use vitrine_client::{CartClient, CartPageBehavior, StorefrontConfig};
use vitrine_core::validation::{
    validate_add_quantity, validate_change_quantity, validate_line_key, validate_variant_id,
};
use vitrine_core::{Cart, MoneyFormatter};

use crate::dom;
use crate::error::UiResult;
use crate::notifier::{Notifier, MSG_ADDED, MSG_ADD_FAILED};
use crate::reconciler::Reconciler;
use crate::surface::Surface;

/// Orchestrates transport, reconciler and notifier for cart mutations.
pub struct CartSync {
    client: Arc<CartClient>,
    reconciler: Reconciler,
    notifier: Notifier,
    surface: Arc<dyn Surface>,
    on_cart_page: CartPageBehavior,
}

impl CartSync {
    pub fn new(
        client: Arc<CartClient>,
        surface: Arc<dyn Surface>,
        formatter: Arc<dyn MoneyFormatter>,
        config: &StorefrontConfig,
    ) -> Self {
        let reconciler = Reconciler::new(Arc::clone(&client), Arc::clone(&surface), formatter);
        let notifier = Notifier::new(
            Arc::clone(&surface),
            Duration::from_millis(config.notice.duration_ms),
        );
        CartSync {
            client,
            reconciler,
            notifier,
            surface,
            on_cart_page: config.cart.on_cart_page,
        }
    }

    /// Adds a variant to the cart.
    ///
    /// On success the success toast fires and the returned snapshot is
    /// rendered. On failure the error toast fires BEFORE the caller sees the
    /// rejection, so a component cannot forget to surface it.
    pub async fn add_item(&self, variant_id: u64, quantity: u32) -> UiResult<Cart> {
        validate_variant_id(variant_id)?;
        validate_add_quantity(quantity)?;

        match self.client.add_item(variant_id, quantity).await {
            Ok(cart) => {
                self.notifier.notify(MSG_ADDED, false);
                self.reconciler.render(Some(&cart)).await?;
                Ok(cart)
            }
            Err(e) => {
                error!(error = %e, "Error adding to cart");
                self.notifier.notify(MSG_ADD_FAILED, true);
                Err(e.into())
            }
        }
    }

    /// Sets a line's absolute quantity (0 removes the line).
    ///
    /// On the full-cart page a success triggers a hard reload under the
    /// default config, short-circuiting the reconciler; everywhere else the
    /// returned snapshot is rendered in place. Failures are logged but not
    /// toasted.
    pub async fn change_quantity(&self, key: &str, quantity: u32) -> UiResult<Cart> {
        validate_line_key(key)?;
        validate_change_quantity(quantity)?;

        match self.client.change_quantity(key, quantity).await {
            Ok(cart) => {
                if self.on_cart_page == CartPageBehavior::Reload
                    && self.surface.exists(dom::CART_PAGE_MARKER)
                {
                    debug!("full-cart page detected, reloading");
                    self.surface.reload();
                } else {
                    self.reconciler.render(Some(&cart)).await?;
                }
                Ok(cart)
            }
            Err(e) => {
                error!(error = %e, "Error updating cart");
                Err(e.into())
            }
        }
    }

    /// Fetches the current cart and renders it. Called once at startup so
    /// the indicators are correct on first paint.
    pub async fn refresh(&self) -> UiResult<()> {
        self.reconciler.render(None).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
