//! # Surface Trait
//!
//! The injected page abstraction. The host (a WASM shim, a webview bridge,
//! a test harness) implements these primitives; everything above never sees
//! a real document.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Surface Semantics                                │
//! │                                                                         │
//! │  • Selectors address ALL matching elements (badge counts appear in     │
//! │    several headers); a write applies to every match                    │
//! │  • Methods are synchronous and infallible: a selector with no match    │
//! │    is a no-op, exactly like querySelectorAll over an empty list        │
//! │  • The host serializes calls onto the page, so callers never observe   │
//! │    a half-applied write                                                │
//! │  • mount_notice must present the toast as a polite live region so      │
//! │    assistive tech announces it                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Page primitives the storefront layer is written against.
pub trait Surface: Send + Sync {
    /// Replaces the text content of matching elements.
    fn set_text(&self, selector: &str, text: &str);

    /// Replaces the inner HTML of matching elements.
    fn set_html(&self, selector: &str, html: &str);

    /// Shows or hides matching elements.
    fn set_visible(&self, selector: &str, visible: bool);

    /// Adds a class to matching elements.
    fn add_class(&self, selector: &str, class: &str);

    /// Removes a class from matching elements.
    fn remove_class(&self, selector: &str, class: &str);

    /// Toggles a class and returns the resulting state (true = present).
    fn toggle_class(&self, selector: &str, class: &str) -> bool;

    /// Sets an inline style property on matching elements.
    fn set_style(&self, selector: &str, property: &str, value: &str);

    /// Enables or disables matching form controls.
    fn set_disabled(&self, selector: &str, disabled: bool);

    /// Reads the value of the first matching input, if any.
    fn input_value(&self, selector: &str) -> Option<String>;

    /// Moves focus to the first matching element.
    fn focus(&self, selector: &str);

    /// Returns true if any element matches the selector.
    fn exists(&self, selector: &str) -> bool;

    /// Mounts the toast notice, replacing any previous one.
    fn mount_notice(&self, message: &str, is_error: bool);

    /// Removes the toast notice if one is mounted.
    fn clear_notice(&self);

    /// Navigates to a URL (hard navigation, page unload).
    fn navigate(&self, url: &str);

    /// Reloads the current page.
    fn reload(&self);
}
