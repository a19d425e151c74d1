//! # Markup Contract
//!
//! The selectors and data attributes shared between the theme markup and
//! this layer. They are the API between page and script: renaming any of
//! them breaks drop-in compatibility with existing templates, so they live
//! in one place.

// =============================================================================
// Cart Indicator Regions
// =============================================================================

/// Cart count badge elements (one per header variant).
pub const CART_COUNT_BADGE: &str = ".cart-count-badge";

/// Navigation indicator dots.
pub const NAV_DOT: &str = ".navbar-search-icon .dot";

/// Floating cart summary panel.
pub const FLOATING_CONTAINER: &str = ".floating-cart-container";

/// Item count text inside the floating panel.
pub const FLOATING_ITEMS: &str = ".floating-cart-items";

/// Formatted total inside the floating panel.
pub const FLOATING_TOTAL: &str = ".floating-cart-total";

/// Class that hides the floating panel.
pub const HIDDEN_CLASS: &str = "is-hidden";

/// Marker present only on the full-cart page.
pub const CART_PAGE_MARKER: &str = ".cart";

// =============================================================================
// Interactive Region Attributes
// =============================================================================

/// Quick add-to-cart buttons.
pub const ATTR_ADD_TO_CART: &str = "data-add-to-cart";

/// Variant id carried by an add button.
pub const ATTR_VARIANT_ID: &str = "data-variant-id";

/// Product form submitted over the cart API instead of a page post.
pub const ATTR_AJAX_CART: &str = "data-ajax-cart";

/// Quantity stepper buttons; value is `plus` or `minus`.
pub const ATTR_CART_QTY: &str = "data-cart-qty";

/// Opaque line key carried by quantity and remove controls.
pub const ATTR_LINE_KEY: &str = "data-line-key";

/// Current quantity carried by a stepper button.
pub const ATTR_CURRENT_QTY: &str = "data-current-qty";

/// Line remove buttons.
pub const ATTR_CART_REMOVE: &str = "data-cart-remove";

// =============================================================================
// Search Regions
// =============================================================================

/// Search text input.
pub const SEARCH_INPUT: &str = ".search-input";

/// Inline suggestion list container.
pub const SEARCH_RESULTS: &str = ".search-results";

/// Collapsible container around the search input.
pub const SEARCH_CONTAINER: &str = ".search-input-container";

// =============================================================================
// Menu & Notice
// =============================================================================

/// Mobile menu container.
pub const MOBILE_MENU: &str = ".mobile-menu";

/// Hamburger toggle button.
pub const HAMBURGER: &str = ".hamburger-menu";

/// Hamburger stripe elements, animated while the menu is open.
pub const HAMBURGER_LINE: &str = ".hamburger-line";

/// Class on the mobile menu while open.
pub const MENU_OPEN_CLASS: &str = "is-open";

/// Class on hamburger lines while the menu is open.
pub const ACTIVE_CLASS: &str = "active";

/// Toast notice element.
pub const NOTICE: &str = ".cart-notification";

/// Carousel slide elements inside a container.
pub const CAROUSEL_SLIDE: &str = ".carousel-slide";
