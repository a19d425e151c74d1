//! # Components & Registration
//!
//! Explicit component registration in place of document-level delegation:
//! each interactive region is constructed from its markup data at
//! initialization and registered under its selector. The host's event glue
//! dispatches by selector; components are polymorphic over what they can do,
//! not what they are.
//!
//! ## Capabilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Component Capabilities                               │
//! │                                                                         │
//! │  Clickable                         Submittable                          │
//! │  ─────────                         ───────────                          │
//! │  AddToCartButton                   AjaxCartForm                         │
//! │  QuantityControl                                                        │
//! │  RemoveButton                                                           │
//! │  MobileMenu                                                             │
//! │                                                                         │
//! │  (Carousel is neither: it owns a background rotation task instead of   │
//! │   reacting to events.)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::UiResult;

mod add_to_cart;
mod carousel;
mod menu;
mod quantity;

pub use add_to_cart::{AddToCartButton, AjaxCartForm};
pub use carousel::{Carousel, CarouselConfig, CarouselHandle};
pub use menu::MobileMenu;
pub use quantity::{QtyStep, QuantityControl, RemoveButton};

// =============================================================================
// Capability Traits
// =============================================================================

/// A region that reacts to a click.
#[async_trait]
pub trait Clickable: Send + Sync {
    /// Selector this component is registered under.
    fn selector(&self) -> &str;

    /// Handles one click.
    async fn click(&self) -> UiResult<()>;
}

/// A region that reacts to a form submit.
#[async_trait]
pub trait Submittable: Send + Sync {
    /// Selector this component is registered under.
    fn selector(&self) -> &str;

    /// Handles one submit.
    async fn submit(&self) -> UiResult<()>;
}

// =============================================================================
// Registry
// =============================================================================

/// Holds every registered component, keyed by selector.
///
/// Registering a second component under the same selector replaces the
/// first, mirroring re-initialization after a section re-render.
#[derive(Default)]
pub struct ComponentRegistry {
    clickables: HashMap<String, Arc<dyn Clickable>>,
    submittables: HashMap<String, Arc<dyn Submittable>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        ComponentRegistry::default()
    }

    pub fn register_clickable(&mut self, component: Arc<dyn Clickable>) {
        debug!(selector = component.selector(), "register clickable");
        self.clickables
            .insert(component.selector().to_string(), component);
    }

    pub fn register_submittable(&mut self, component: Arc<dyn Submittable>) {
        debug!(selector = component.selector(), "register submittable");
        self.submittables
            .insert(component.selector().to_string(), component);
    }

    /// Routes a click to the component registered under `selector`.
    /// Returns `None` when nothing is registered there.
    pub async fn dispatch_click(&self, selector: &str) -> Option<UiResult<()>> {
        let component = self.clickables.get(selector)?;
        Some(component.click().await)
    }

    /// Routes a submit to the component registered under `selector`.
    pub async fn dispatch_submit(&self, selector: &str) -> Option<UiResult<()>> {
        let component = self.submittables.get(selector)?;
        Some(component.submit().await)
    }

    pub fn len(&self) -> usize {
        self.clickables.len() + self.submittables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clickables.is_empty() && self.submittables.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
