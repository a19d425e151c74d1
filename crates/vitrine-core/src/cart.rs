//! # Cart Snapshots & Indicator View-Model
//!
//! Types for the server-owned cart and the pure projection that every
//! cart-related page region renders from.
//!
//! ## Server Truth
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Cart State Lives                               │
//! │                                                                         │
//! │  Storefront backend ──► /cart.js ──► Cart snapshot ──► indicators()    │
//! │                                          │                              │
//! │                                          ▼                              │
//! │              badge text ── nav dot ── floating summary                  │
//! │                                                                         │
//! │  The page NEVER accumulates cart state. Every render derives from a    │
//! │  just-fetched or just-returned snapshot, so the page cannot drift      │
//! │  from the backend at the cost of an extra round trip when a mutation   │
//! │  response omits full cart data.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::{Money, MoneyFormatter};

// =============================================================================
// Cart Snapshot Types
// =============================================================================

/// One product/variant entry in the cart.
///
/// `key` is the opaque line identifier the backend hands out; it is the only
/// handle quantity changes are addressed by. Endpoint JSON carries many more
/// fields than these; unknown fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque unique line key (e.g. `"39897499729985:3a2d..."`).
    pub key: String,

    /// Quantity of this line. Zero never appears in a snapshot; setting a
    /// line to zero removes it server-side.
    pub quantity: u32,

    /// Variant the line points at.
    pub variant_id: u64,
}

/// Server-owned cart snapshot.
///
/// ## Invariants
/// - `item_count` is the backend's own total; it is rendered as-is, never
///   recomputed from `items`
/// - A snapshot is discarded after rendering; holding one across operations
///   is a bug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Cart {
    /// Total quantity across all lines.
    pub item_count: u32,

    /// Cart total in minor currency units.
    pub total_price: Money,

    /// Ordered line items.
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Returns true when the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Looks up a line by its opaque key.
    pub fn line(&self, key: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.key == key)
    }
}

// =============================================================================
// Indicator View-Model
// =============================================================================

/// Floating summary content, present only when the cart is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    /// Pluralized item label: `"1 ITEM"` or `"N ITEMS"`.
    pub items_label: String,

    /// Cart total rendered through the injected formatter.
    pub total_label: String,
}

/// Everything the cart-related page regions display, computed in one place.
///
/// ## Regions
/// - `badge`: numeric count for the `.cart-count-badge` elements, `None`
///   when they should be hidden
/// - `dot_visible`: the nav indicator dots mirror `item_count > 0`
/// - `summary`: floating summary panel content, `None` when hidden
///
/// The projection is a pure function of the snapshot, so rendering the same
/// cart twice is idempotent by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartIndicators {
    pub badge: Option<String>,
    pub dot_visible: bool,
    pub summary: Option<SummaryView>,
}

impl CartIndicators {
    /// Projects a cart snapshot into indicator content.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::cart::{Cart, CartIndicators};
    /// use vitrine_core::money::{Money, SymbolFormatter};
    ///
    /// let cart = Cart {
    ///     item_count: 2,
    ///     total_price: Money::from_minor_units(3998),
    ///     items: vec![],
    /// };
    /// let view = CartIndicators::project(&cart, &SymbolFormatter::default());
    /// assert_eq!(view.badge.as_deref(), Some("2"));
    /// assert_eq!(view.summary.unwrap().items_label, "2 ITEMS");
    /// ```
    pub fn project(cart: &Cart, formatter: &dyn MoneyFormatter) -> Self {
        if cart.is_empty() {
            return CartIndicators {
                badge: None,
                dot_visible: false,
                summary: None,
            };
        }

        CartIndicators {
            badge: Some(cart.item_count.to_string()),
            dot_visible: true,
            summary: Some(SummaryView {
                items_label: items_label(cart.item_count),
                total_label: formatter.format(cart.total_price),
            }),
        }
    }
}

/// Pluralized item count label: `"1 ITEM"`, `"2 ITEMS"`.
pub fn items_label(item_count: u32) -> String {
    if item_count == 1 {
        "1 ITEM".to_string()
    } else {
        format!("{} ITEMS", item_count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::SymbolFormatter;

    fn snapshot(item_count: u32, total: i64) -> Cart {
        Cart {
            item_count,
            total_price: Money::from_minor_units(total),
            items: vec![LineItem {
                key: "line-1".into(),
                quantity: item_count,
                variant_id: 41234567,
            }],
        }
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        // Real /cart.js payloads carry dozens of fields we never look at
        let json = r#"{
            "token": "abc123",
            "item_count": 3,
            "total_price": 5997,
            "currency": "USD",
            "items": [
                {"key": "k1:aa", "quantity": 2, "variant_id": 111, "title": "Mug"},
                {"key": "k2:bb", "quantity": 1, "variant_id": 222, "title": "Cap"}
            ]
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.item_count, 3);
        assert_eq!(cart.total_price.minor_units(), 5997);
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.line("k2:bb").unwrap().variant_id, 222);
    }

    #[test]
    fn test_decode_without_items() {
        // Some responses omit the line list entirely
        let cart: Cart = serde_json::from_str(r#"{"item_count":0,"total_price":0}"#).unwrap();
        assert!(cart.is_empty());
        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_empty_cart_hides_everything() {
        let view = CartIndicators::project(&Cart::default(), &SymbolFormatter::default());
        assert_eq!(view.badge, None);
        assert!(!view.dot_visible);
        assert_eq!(view.summary, None);
    }

    #[test]
    fn test_badge_visibility_boundary() {
        let fmt = SymbolFormatter::default();

        // item_count = 0 → hidden
        let hidden = CartIndicators::project(&snapshot(0, 0), &fmt);
        assert_eq!(hidden.badge, None);

        // item_count = 1 → visible showing "1"
        let shown = CartIndicators::project(&snapshot(1, 1999), &fmt);
        assert_eq!(shown.badge.as_deref(), Some("1"));
        assert!(shown.dot_visible);
    }

    #[test]
    fn test_pluralization() {
        assert_eq!(items_label(1), "1 ITEM");
        assert_eq!(items_label(2), "2 ITEMS");
        assert_eq!(items_label(10), "10 ITEMS");
        // Zero never renders (panel hidden), but the label stays consistent
        assert_eq!(items_label(0), "0 ITEMS");
    }

    #[test]
    fn test_summary_formats_total_through_injected_formatter() {
        let view = CartIndicators::project(&snapshot(2, 3998), &SymbolFormatter::new("£"));
        let summary = view.summary.unwrap();
        assert_eq!(summary.items_label, "2 ITEMS");
        assert_eq!(summary.total_label, "£39.98");
    }

    #[test]
    fn test_projection_is_idempotent() {
        let cart = snapshot(4, 12345);
        let fmt = SymbolFormatter::default();
        assert_eq!(
            CartIndicators::project(&cart, &fmt),
            CartIndicators::project(&cart, &fmt)
        );
    }
}
