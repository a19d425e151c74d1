//! # Recording Surface
//!
//! An in-memory [`Surface`] that records every write, so tests (and host
//! integration smoke checks) can assert exactly what the page would show.
//! State is keyed by selector string; the double does not model a DOM tree,
//! because the layer above only ever addresses whole selectors.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use crate::surface::Surface;

/// Full recorded page state, cloneable for before/after comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceState {
    pub text: BTreeMap<String, String>,
    pub html: BTreeMap<String, String>,
    pub visible: BTreeMap<String, bool>,
    pub classes: BTreeMap<String, BTreeSet<String>>,
    pub styles: BTreeMap<String, BTreeMap<String, String>>,
    pub disabled: BTreeMap<String, bool>,
    pub focused: Option<String>,
    /// Currently mounted toast, if any: (message, is_error).
    pub notice: Option<(String, bool)>,
    pub navigations: Vec<String>,
    pub reloads: usize,
}

/// Recording [`Surface`] double.
#[derive(Default)]
pub struct RecordingSurface {
    state: Mutex<SurfaceState>,
    inputs: Mutex<BTreeMap<String, String>>,
    markers: Mutex<BTreeSet<String>>,
    /// Every toast ever mounted, in order: (message, is_error).
    notice_history: Mutex<Vec<(String, bool)>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    // -------------------------------------------------------------------------
    // Test Setup
    // -------------------------------------------------------------------------

    /// Declares that a selector matches something on this page
    /// (e.g. the full-cart page marker).
    pub fn add_marker(&self, selector: &str) {
        self.markers
            .lock()
            .expect("markers lock")
            .insert(selector.to_string());
    }

    /// Presets an input value for [`Surface::input_value`] to return.
    pub fn set_input(&self, selector: &str, value: &str) {
        self.inputs
            .lock()
            .expect("inputs lock")
            .insert(selector.to_string(), value.to_string());
    }

    // -------------------------------------------------------------------------
    // Assertions
    // -------------------------------------------------------------------------

    /// Clones the full recorded state.
    pub fn snapshot(&self) -> SurfaceState {
        self.state.lock().expect("state lock").clone()
    }

    pub fn text(&self, selector: &str) -> Option<String> {
        self.state
            .lock()
            .expect("state lock")
            .text
            .get(selector)
            .cloned()
    }

    pub fn html(&self, selector: &str) -> Option<String> {
        self.state
            .lock()
            .expect("state lock")
            .html
            .get(selector)
            .cloned()
    }

    /// Visibility of a selector; `None` if never set.
    pub fn visible(&self, selector: &str) -> Option<bool> {
        self.state
            .lock()
            .expect("state lock")
            .visible
            .get(selector)
            .copied()
    }

    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.state
            .lock()
            .expect("state lock")
            .classes
            .get(selector)
            .is_some_and(|set| set.contains(class))
    }

    pub fn style(&self, selector: &str, property: &str) -> Option<String> {
        self.state
            .lock()
            .expect("state lock")
            .styles
            .get(selector)
            .and_then(|props| props.get(property))
            .cloned()
    }

    pub fn is_disabled(&self, selector: &str) -> bool {
        self.state
            .lock()
            .expect("state lock")
            .disabled
            .get(selector)
            .copied()
            .unwrap_or(false)
    }

    pub fn focused(&self) -> Option<String> {
        self.state.lock().expect("state lock").focused.clone()
    }

    /// Currently mounted toast.
    pub fn notice(&self) -> Option<(String, bool)> {
        self.state.lock().expect("state lock").notice.clone()
    }

    /// Every toast ever mounted, in order.
    pub fn notice_history(&self) -> Vec<(String, bool)> {
        self.notice_history
            .lock()
            .expect("notice history lock")
            .clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.state.lock().expect("state lock").navigations.clone()
    }

    pub fn reload_count(&self) -> usize {
        self.state.lock().expect("state lock").reloads
    }
}

impl Surface for RecordingSurface {
    fn set_text(&self, selector: &str, text: &str) {
        self.state
            .lock()
            .expect("state lock")
            .text
            .insert(selector.to_string(), text.to_string());
    }

    fn set_html(&self, selector: &str, html: &str) {
        self.state
            .lock()
            .expect("state lock")
            .html
            .insert(selector.to_string(), html.to_string());
    }

    fn set_visible(&self, selector: &str, visible: bool) {
        self.state
            .lock()
            .expect("state lock")
            .visible
            .insert(selector.to_string(), visible);
    }

    fn add_class(&self, selector: &str, class: &str) {
        self.state
            .lock()
            .expect("state lock")
            .classes
            .entry(selector.to_string())
            .or_default()
            .insert(class.to_string());
    }

    fn remove_class(&self, selector: &str, class: &str) {
        if let Some(set) = self
            .state
            .lock()
            .expect("state lock")
            .classes
            .get_mut(selector)
        {
            set.remove(class);
        }
    }

    fn toggle_class(&self, selector: &str, class: &str) -> bool {
        let mut state = self.state.lock().expect("state lock");
        let set = state.classes.entry(selector.to_string()).or_default();
        if set.contains(class) {
            set.remove(class);
            false
        } else {
            set.insert(class.to_string());
            true
        }
    }

    fn set_style(&self, selector: &str, property: &str, value: &str) {
        self.state
            .lock()
            .expect("state lock")
            .styles
            .entry(selector.to_string())
            .or_default()
            .insert(property.to_string(), value.to_string());
    }

    fn set_disabled(&self, selector: &str, disabled: bool) {
        self.state
            .lock()
            .expect("state lock")
            .disabled
            .insert(selector.to_string(), disabled);
    }

    fn input_value(&self, selector: &str) -> Option<String> {
        self.inputs.lock().expect("inputs lock").get(selector).cloned()
    }

    fn focus(&self, selector: &str) {
        self.state.lock().expect("state lock").focused = Some(selector.to_string());
    }

    fn exists(&self, selector: &str) -> bool {
        self.markers.lock().expect("markers lock").contains(selector)
    }

    fn mount_notice(&self, message: &str, is_error: bool) {
        self.state.lock().expect("state lock").notice =
            Some((message.to_string(), is_error));
        self.notice_history
            .lock()
            .expect("notice history lock")
            .push((message.to_string(), is_error));
    }

    fn clear_notice(&self) {
        self.state.lock().expect("state lock").notice = None;
    }

    fn navigate(&self, url: &str) {
        self.state
            .lock()
            .expect("state lock")
            .navigations
            .push(url.to_string());
    }

    fn reload(&self) {
        self.state.lock().expect("state lock").reloads += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_and_toggles() {
        let surface = RecordingSurface::new();

        surface.set_text(".badge", "3");
        assert_eq!(surface.text(".badge").as_deref(), Some("3"));

        assert!(surface.toggle_class(".menu", "is-open"));
        assert!(surface.has_class(".menu", "is-open"));
        assert!(!surface.toggle_class(".menu", "is-open"));
        assert!(!surface.has_class(".menu", "is-open"));
    }

    #[test]
    fn test_markers_and_inputs() {
        let surface = RecordingSurface::new();
        assert!(!surface.exists(".cart"));
        surface.add_marker(".cart");
        assert!(surface.exists(".cart"));

        surface.set_input("form [name=\"id\"]", "41234567");
        assert_eq!(
            surface.input_value("form [name=\"id\"]").as_deref(),
            Some("41234567")
        );
        assert_eq!(surface.input_value(".missing"), None);
    }

    #[test]
    fn test_notice_history_outlives_clear() {
        let surface = RecordingSurface::new();
        surface.mount_notice("Added to cart!", false);
        surface.clear_notice();
        assert_eq!(surface.notice(), None);
        assert_eq!(surface.notice_history().len(), 1);
    }
}
