//! # Mobile Menu
//!
//! Hamburger toggle for the mobile navigation. The open class on the menu
//! and the active class on the hamburger lines always move together; the
//! host wires outside clicks to [`MobileMenu::close`].

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::components::Clickable;
use crate::dom;
use crate::error::UiResult;
use crate::surface::Surface;

/// Hamburger-driven mobile menu.
pub struct MobileMenu {
    surface: Arc<dyn Surface>,
}

impl MobileMenu {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        MobileMenu { surface }
    }

    /// Closes the menu regardless of current state (outside click).
    pub fn close(&self) {
        self.surface.remove_class(dom::MOBILE_MENU, dom::MENU_OPEN_CLASS);
        self.surface
            .remove_class(dom::HAMBURGER_LINE, dom::ACTIVE_CLASS);
    }
}

#[async_trait]
impl Clickable for MobileMenu {
    fn selector(&self) -> &str {
        dom::HAMBURGER
    }

    async fn click(&self) -> UiResult<()> {
        let open = self
            .surface
            .toggle_class(dom::MOBILE_MENU, dom::MENU_OPEN_CLASS);
        debug!(open, "mobile menu toggled");

        if open {
            self.surface.add_class(dom::HAMBURGER_LINE, dom::ACTIVE_CLASS);
        } else {
            self.surface
                .remove_class(dom::HAMBURGER_LINE, dom::ACTIVE_CLASS);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;

    #[tokio::test]
    async fn test_toggle_moves_both_classes() {
        let surface = Arc::new(RecordingSurface::new());
        let menu = MobileMenu::new(surface.clone());

        menu.click().await.unwrap();
        assert!(surface.has_class(dom::MOBILE_MENU, dom::MENU_OPEN_CLASS));
        assert!(surface.has_class(dom::HAMBURGER_LINE, dom::ACTIVE_CLASS));

        menu.click().await.unwrap();
        assert!(!surface.has_class(dom::MOBILE_MENU, dom::MENU_OPEN_CLASS));
        assert!(!surface.has_class(dom::HAMBURGER_LINE, dom::ACTIVE_CLASS));
    }

    #[tokio::test]
    async fn test_outside_click_closes_open_menu() {
        let surface = Arc::new(RecordingSurface::new());
        let menu = MobileMenu::new(surface.clone());

        menu.click().await.unwrap();
        menu.close();
        assert!(!surface.has_class(dom::MOBILE_MENU, dom::MENU_OPEN_CLASS));
        assert!(!surface.has_class(dom::HAMBURGER_LINE, dom::ACTIVE_CLASS));

        // Closing an already-closed menu is a no-op
        menu.close();
        assert!(!surface.has_class(dom::MOBILE_MENU, dom::MENU_OPEN_CLASS));
    }
}
