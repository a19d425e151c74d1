//! # Add-to-Cart Components
//!
//! The quick-add button (`[data-add-to-cart]`) and the product page form
//! (`form[data-ajax-cart]`). Both funnel into [`CartSync::add_item`], which
//! owns toasts and rendering; these components only choreograph their own
//! button state.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use vitrine_core::ValidationError;

use crate::components::{Clickable, Submittable};
use crate::error::{UiError, UiResult};
use crate::surface::Surface;
use crate::sync::CartSync;

/// Label shown on the form submit button after a successful add, before the
/// timed restore.
const FORM_LABEL_DONE: &str = "Added ✓";

/// Resting label of the form submit button.
const FORM_LABEL_IDLE: &str = "Add to Cart";

/// How long the success label stays before restoring.
const FORM_LABEL_RESTORE: Duration = Duration::from_millis(2000);

// =============================================================================
// Quick Add Button
// =============================================================================

/// A quick-add button in a product grid. Always adds quantity 1.
///
/// Constructed at registration from the button's `data-variant-id`; markup
/// with an unparsable id never produces a component.
pub struct AddToCartButton {
    selector: String,
    variant_id: u64,
    sync: Arc<CartSync>,
    surface: Arc<dyn Surface>,
}

impl AddToCartButton {
    pub fn new(
        selector: impl Into<String>,
        variant_id: u64,
        sync: Arc<CartSync>,
        surface: Arc<dyn Surface>,
    ) -> Self {
        AddToCartButton {
            selector: selector.into(),
            variant_id,
            sync,
            surface,
        }
    }
}

#[async_trait]
impl Clickable for AddToCartButton {
    fn selector(&self) -> &str {
        &self.selector
    }

    async fn click(&self) -> UiResult<()> {
        debug!(variant_id = self.variant_id, "quick add clicked");

        self.surface.set_disabled(&self.selector, true);
        self.surface.set_text(&self.selector, "...");

        let result = self.sync.add_item(self.variant_id, 1).await;

        // Restored either way; the toast already told the user what happened
        self.surface.set_disabled(&self.selector, false);
        self.surface.set_text(&self.selector, "+");

        result.map(|_| ())
    }
}

// =============================================================================
// Product Form
// =============================================================================

/// A product page form submitted over the cart API instead of a page post.
///
/// Reads the variant id and quantity from its own inputs at submit time, so
/// variant pickers keep working without re-registration.
pub struct AjaxCartForm {
    selector: String,
    sync: Arc<CartSync>,
    surface: Arc<dyn Surface>,
}

impl AjaxCartForm {
    pub fn new(
        selector: impl Into<String>,
        sync: Arc<CartSync>,
        surface: Arc<dyn Surface>,
    ) -> Self {
        AjaxCartForm {
            selector: selector.into(),
            sync,
            surface,
        }
    }

    fn id_input(&self) -> String {
        format!("{} [name=\"id\"]", self.selector)
    }

    fn quantity_input(&self) -> String {
        format!("{} [name=\"quantity\"]", self.selector)
    }

    fn submit_button(&self) -> String {
        format!("{} [type=\"submit\"]", self.selector)
    }
}

#[async_trait]
impl Submittable for AjaxCartForm {
    fn selector(&self) -> &str {
        &self.selector
    }

    async fn submit(&self) -> UiResult<()> {
        let variant_id = self
            .surface
            .input_value(&self.id_input())
            .and_then(|raw| raw.parse::<u64>().ok())
            .ok_or(UiError::Validation(ValidationError::Required {
                field: "variant id",
            }))?;

        // Missing or unparsable quantity falls back to 1
        let quantity = self
            .surface
            .input_value(&self.quantity_input())
            .and_then(|raw| raw.parse::<u32>().ok())
            .unwrap_or(1);

        debug!(variant_id, quantity, "form submit");

        let button = self.submit_button();
        self.surface.set_disabled(&button, true);
        self.surface.set_text(&button, "Adding...");

        match self.sync.add_item(variant_id, quantity).await {
            Ok(_) => {
                self.surface.set_disabled(&button, false);
                self.surface.set_text(&button, FORM_LABEL_DONE);

                let surface = Arc::clone(&self.surface);
                tokio::spawn(async move {
                    tokio::time::sleep(FORM_LABEL_RESTORE).await;
                    surface.set_text(&button, FORM_LABEL_IDLE);
                });
                Ok(())
            }
            Err(e) => {
                self.surface.set_disabled(&button, false);
                self.surface.set_text(&button, FORM_LABEL_IDLE);
                Err(e)
            }
        }
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

    const CART_ONE: &str = r#"{"item_count":1,"total_price":1999,"items":[
        {"key":"k1:aa","quantity":1,"variant_id":41234567}
    ]}"#;

    fn sync_with(transport: Arc<StubTransport>, surface: Arc<RecordingSurface>) -> Arc<CartSync> {
        Arc::new(CartSync::new(
            Arc::new(CartClient::new(transport)),
            surface,
            Arc::new(SymbolFormatter::default()),
            &StorefrontConfig::default(),
        ))
    }

    #[tokio::test]
    async fn test_quick_add_click_restores_button() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, r#"{"items":[]}"#);
        transport.respond_json(200, CART_ONE);
        let surface = Arc::new(RecordingSurface::new());
        let sync = sync_with(transport.clone(), surface.clone());

        let selector = "[data-add-to-cart][data-variant-id=\"41234567\"]";
        let button = AddToCartButton::new(selector, 41234567, sync, surface.clone());

        button.click().await.unwrap();

        assert!(!surface.is_disabled(selector));
        assert_eq!(surface.text(selector).as_deref(), Some("+"));
        assert_eq!(
            surface.notice_history(),
            vec![("Added to cart!".to_string(), false)]
        );
    }

    #[tokio::test]
    async fn test_quick_add_failure_still_restores_button() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(500, "");
        let surface = Arc::new(RecordingSurface::new());
        let sync = sync_with(transport, surface.clone());

        let button = AddToCartButton::new(".quick-add", 41234567, sync, surface.clone());
        assert!(button.click().await.is_err());

        assert!(!surface.is_disabled(".quick-add"));
        assert_eq!(surface.text(".quick-add").as_deref(), Some("+"));
        assert_eq!(
            surface.notice_history(),
            vec![("Failed to add to cart".to_string(), true)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_form_submit_reads_inputs_and_restores_label() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, r#"{"items":[]}"#);
        transport.respond_json(200, CART_ONE);
        let surface = Arc::new(RecordingSurface::new());
        surface.set_input("form[data-ajax-cart] [name=\"id\"]", "41234567");
        surface.set_input("form[data-ajax-cart] [name=\"quantity\"]", "3");
        let sync = sync_with(transport.clone(), surface.clone());

        let form = AjaxCartForm::new("form[data-ajax-cart]", sync, surface.clone());
        form.submit().await.unwrap();

        // The add carried the form's values
        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"items":[{"id":41234567,"quantity":3}]}"#)
        );

        let button = "form[data-ajax-cart] [type=\"submit\"]";
        assert_eq!(surface.text(button).as_deref(), Some("Added ✓"));
        assert!(!surface.is_disabled(button));

        // Label restores after the timed delay
        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(surface.text(button).as_deref(), Some("Add to Cart"));
    }

    #[tokio::test]
    async fn test_form_submit_defaults_quantity_to_one() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, r#"{"items":[]}"#);
        transport.respond_json(200, CART_ONE);
        let surface = Arc::new(RecordingSurface::new());
        surface.set_input("form[data-ajax-cart] [name=\"id\"]", "41234567");
        // No quantity input present
        let sync = sync_with(transport.clone(), surface.clone());

        AjaxCartForm::new("form[data-ajax-cart]", sync, surface)
            .submit()
            .await
            .unwrap();

        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"items":[{"id":41234567,"quantity":1}]}"#)
        );
    }

    #[tokio::test]
    async fn test_form_submit_without_variant_is_rejected_locally() {
        let transport = Arc::new(StubTransport::new());
        let surface = Arc::new(RecordingSurface::new());
        let sync = sync_with(transport.clone(), surface.clone());

        let err = AjaxCartForm::new("form[data-ajax-cart]", sync, surface)
            .submit()
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_form_submit_failure_restores_label_immediately() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_network_error("offline");
        let surface = Arc::new(RecordingSurface::new());
        surface.set_input("form[data-ajax-cart] [name=\"id\"]", "41234567");
        let sync = sync_with(transport, surface.clone());

        assert!(AjaxCartForm::new("form[data-ajax-cart]", sync, surface.clone())
            .submit()
            .await
            .is_err());

        let button = "form[data-ajax-cart] [type=\"submit\"]";
        assert_eq!(surface.text(button).as_deref(), Some("Add to Cart"));
        assert!(!surface.is_disabled(button));
    }
}
