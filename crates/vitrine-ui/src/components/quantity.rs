//! # Cart Page Quantity Controls
//!
//! Stepper buttons (`[data-cart-qty]`) and line remove buttons
//! (`[data-cart-remove]`). Both address a line by its opaque key and go
//! through [`CartSync::change_quantity`]; on the full-cart page the
//! configured reload/render behavior applies afterwards.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::components::Clickable;
use crate::error::UiResult;
use crate::sync::CartSync;

/// Stepper direction, parsed from the `data-cart-qty` attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QtyStep {
    Plus,
    Minus,
}

impl QtyStep {
    /// Parses the attribute value; anything but `plus`/`minus` is not a
    /// stepper.
    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw {
            "plus" => Some(QtyStep::Plus),
            "minus" => Some(QtyStep::Minus),
            _ => None,
        }
    }

    /// Applies the step to a current quantity, clamping at zero.
    pub fn apply(self, current: u32) -> u32 {
        match self {
            QtyStep::Plus => current + 1,
            QtyStep::Minus => current.saturating_sub(1),
        }
    }
}

// =============================================================================
// Stepper Button
// =============================================================================

/// One plus/minus button on a cart line.
pub struct QuantityControl {
    selector: String,
    key: String,
    current_qty: u32,
    step: QtyStep,
    sync: Arc<CartSync>,
}

impl QuantityControl {
    pub fn new(
        selector: impl Into<String>,
        key: impl Into<String>,
        current_qty: u32,
        step: QtyStep,
        sync: Arc<CartSync>,
    ) -> Self {
        QuantityControl {
            selector: selector.into(),
            key: key.into(),
            current_qty,
            step,
            sync,
        }
    }

    /// Builds a control from raw markup attributes, the way registration
    /// encounters them. An unparsable `data-current-qty` falls back to 1;
    /// an unknown step value produces no component.
    pub fn from_attrs(
        selector: impl Into<String>,
        key: impl Into<String>,
        raw_qty: Option<&str>,
        raw_step: &str,
        sync: Arc<CartSync>,
    ) -> Option<Self> {
        let step = QtyStep::from_attr(raw_step)?;
        let current_qty = raw_qty.and_then(|raw| raw.parse().ok()).unwrap_or(1);
        Some(QuantityControl::new(selector, key, current_qty, step, sync))
    }
}

#[async_trait]
impl Clickable for QuantityControl {
    fn selector(&self) -> &str {
        &self.selector
    }

    async fn click(&self) -> UiResult<()> {
        let new_qty = self.step.apply(self.current_qty);
        debug!(key = %self.key, new_qty, "stepper clicked");
        self.sync.change_quantity(&self.key, new_qty).await.map(|_| ())
    }
}

// =============================================================================
// Remove Button
// =============================================================================

/// Removes a line by setting its quantity to zero.
pub struct RemoveButton {
    selector: String,
    key: String,
    sync: Arc<CartSync>,
}

impl RemoveButton {
    pub fn new(
        selector: impl Into<String>,
        key: impl Into<String>,
        sync: Arc<CartSync>,
    ) -> Self {
        RemoveButton {
            selector: selector.into(),
            key: key.into(),
            sync,
        }
    }
}

#[async_trait]
impl Clickable for RemoveButton {
    fn selector(&self) -> &str {
        &self.selector
    }

    async fn click(&self) -> UiResult<()> {
        debug!(key = %self.key, "remove clicked");
        self.sync.change_quantity(&self.key, 0).await.map(|_| ())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_client::testing::StubTransport;
    use vitrine_client::{CartClient, StorefrontConfig};
    use vitrine_core::SymbolFormatter;

    use crate::testing::RecordingSurface;

    fn sync_with(transport: Arc<StubTransport>, surface: Arc<RecordingSurface>) -> Arc<CartSync> {
        Arc::new(CartSync::new(
            Arc::new(CartClient::new(transport)),
            surface,
            Arc::new(SymbolFormatter::default()),
            &StorefrontConfig::default(),
        ))
    }

    #[test]
    fn test_step_parse_and_apply() {
        assert_eq!(QtyStep::from_attr("plus"), Some(QtyStep::Plus));
        assert_eq!(QtyStep::from_attr("minus"), Some(QtyStep::Minus));
        assert_eq!(QtyStep::from_attr("sideways"), None);

        assert_eq!(QtyStep::Plus.apply(2), 3);
        assert_eq!(QtyStep::Minus.apply(2), 1);
        // Minus at 1 goes to 0 (removal), never below
        assert_eq!(QtyStep::Minus.apply(1), 0);
        assert_eq!(QtyStep::Minus.apply(0), 0);
    }

    #[test]
    fn test_from_attrs_defaults_and_rejects() {
        let transport = Arc::new(StubTransport::new());
        let surface = Arc::new(RecordingSurface::new());
        let sync = sync_with(transport, surface);

        let control =
            QuantityControl::from_attrs(".plus", "k1", Some("not a number"), "plus", sync.clone())
                .unwrap();
        assert_eq!(control.current_qty, 1);

        assert!(QuantityControl::from_attrs(".x", "k1", Some("2"), "bogus", sync).is_none());
    }

    #[tokio::test]
    async fn test_plus_click_sends_incremented_quantity() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, r#"{"item_count":3,"total_price":5997}"#);
        let surface = Arc::new(RecordingSurface::new());
        let sync = sync_with(transport.clone(), surface);

        QuantityControl::new(".plus", "k1:aa", 2, QtyStep::Plus, sync)
            .click()
            .await
            .unwrap();

        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"id":"k1:aa","quantity":3}"#)
        );
    }

    #[tokio::test]
    async fn test_minus_click_at_one_removes_line() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, r#"{"item_count":0,"total_price":0}"#);
        let surface = Arc::new(RecordingSurface::new());
        let sync = sync_with(transport.clone(), surface.clone());

        QuantityControl::new(".minus", "k1:aa", 1, QtyStep::Minus, sync)
            .click()
            .await
            .unwrap();

        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"id":"k1:aa","quantity":0}"#)
        );
        // Zero-count snapshot rendered: badge hidden
        assert_eq!(surface.visible(crate::dom::CART_COUNT_BADGE), Some(false));
    }

    #[tokio::test]
    async fn test_remove_button_sends_zero() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, r#"{"item_count":0,"total_price":0}"#);
        let surface = Arc::new(RecordingSurface::new());
        let sync = sync_with(transport.clone(), surface);

        RemoveButton::new("[data-cart-remove]", "k9:zz", sync)
            .click()
            .await
            .unwrap();

        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"id":"k9:zz","quantity":0}"#)
        );
    }
}
