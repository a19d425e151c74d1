//! # Predictive Search
//!
//! Query-as-you-type product suggestions with an explicit debounce and a
//! stale-response guard.
//!
//! ## Timing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Keystroke → Request Timeline                         │
//! │                                                                         │
//! │  keystroke ──► trim ──► len < min? ──► clear list, invalidate in-flight│
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  cancel pending trigger ──► sleep(300ms) ──► take sequence N           │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                                         GET suggest ──► response        │
//! │                                                  │                      │
//! │                               N == latest? ──────┤                      │
//! │                               yes: render        │ no: discard          │
//! │                                                                         │
//! │  Cancellation stops the TRIGGER only. A request already on the wire    │
//! │  completes; its response is discarded by the sequence guard instead    │
//! │  of racing a newer render.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use vitrine_client::wire::{search_page_url, ProductSuggestion};
use vitrine_client::{SearchClient, SearchConfig};
use vitrine_core::validation::validate_search_query;
use vitrine_core::MoneyFormatter;

use crate::dom;
use crate::error::UiResult;
use crate::surface::Surface;

/// Empty-state markup when the query matched nothing.
const NO_RESULTS_HTML: &str = r#"<div class="no-results">No items found</div>"#;

/// Empty-state markup when the suggest request failed.
const SEARCH_ERROR_HTML: &str = r#"<div class="no-results">Search error</div>"#;

// =============================================================================
// Controller
// =============================================================================

/// Shared state the debounce trigger and in-flight requests both see.
struct SearchInner {
    client: Arc<SearchClient>,
    surface: Arc<dyn Surface>,
    formatter: Arc<dyn MoneyFormatter>,

    /// Monotonic sequence; a response renders only if it still carries the
    /// latest number.
    sequence: AtomicU64,
}

impl SearchInner {
    async fn fire(&self, query: String) {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(query = %query, seq, "suggest fired");

        let outcome = self.client.suggest(&query).await;

        if self.sequence.load(Ordering::SeqCst) != seq {
            debug!(query = %query, seq, "stale suggest response discarded");
            return;
        }

        match outcome {
            Ok(products) if products.is_empty() => {
                self.surface.set_html(dom::SEARCH_RESULTS, NO_RESULTS_HTML);
            }
            Ok(products) => {
                let html = render_suggestions(&products, self.formatter.as_ref());
                self.surface.set_html(dom::SEARCH_RESULTS, &html);
            }
            Err(e) => {
                warn!(error = %e, "Suggest request failed");
                self.surface.set_html(dom::SEARCH_RESULTS, SEARCH_ERROR_HTML);
            }
        }
    }
}

/// Debounced suggest controller for the search input.
pub struct PredictiveSearch {
    inner: Arc<SearchInner>,
    debounce: Duration,
    min_query_len: usize,

    /// Pending debounce trigger. Replacing it cancels the trigger, never a
    /// request already on the wire.
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl PredictiveSearch {
    pub fn new(
        client: Arc<SearchClient>,
        surface: Arc<dyn Surface>,
        formatter: Arc<dyn MoneyFormatter>,
        config: &SearchConfig,
    ) -> Self {
        PredictiveSearch {
            inner: Arc::new(SearchInner {
                client,
                surface,
                formatter,
                sequence: AtomicU64::new(0),
            }),
            debounce: Duration::from_millis(config.debounce_ms),
            min_query_len: config.min_query_len,
            pending: Mutex::new(None),
        }
    }

    /// Handles one keystroke's worth of input.
    pub fn on_input(&self, raw: &str) -> UiResult<()> {
        let query = validate_search_query(raw)?;

        let mut pending = self.pending.lock().expect("pending lock");
        if let Some(trigger) = pending.take() {
            trigger.abort();
        }

        if query.chars().count() < self.min_query_len {
            // Anything still on the wire must not repopulate a cleared list
            self.inner.sequence.fetch_add(1, Ordering::SeqCst);
            self.inner.surface.set_html(dom::SEARCH_RESULTS, "");
            return Ok(());
        }

        let inner = Arc::clone(&self.inner);
        let debounce = self.debounce;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            // Detached: once the trigger elapses, a later keystroke can no
            // longer cancel the request, only outdate its response
            tokio::spawn(async move { inner.fire(query).await });
        }));
        Ok(())
    }

    /// Navigates to the full results page; the inline list is bypassed.
    pub fn on_enter(&self, raw: &str) {
        let query = raw.trim();
        if !query.is_empty() {
            self.inner.surface.navigate(&search_page_url(query));
        }
    }
}

// =============================================================================
// Search Panel
// =============================================================================

/// Collapsible container around the search input.
pub struct SearchPanel {
    surface: Arc<dyn Surface>,
    open: Mutex<bool>,
}

impl SearchPanel {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        SearchPanel {
            surface,
            open: Mutex::new(false),
        }
    }

    /// Icon click: toggles the panel, focusing the input on open and
    /// clearing the suggestion list on close. Returns the new state.
    pub fn toggle(&self) -> bool {
        let mut open = self.open.lock().expect("open lock");
        *open = !*open;
        if *open {
            self.surface.set_visible(dom::SEARCH_CONTAINER, true);
            self.surface.focus(dom::SEARCH_INPUT);
        } else {
            self.surface.set_visible(dom::SEARCH_CONTAINER, false);
            self.surface.set_html(dom::SEARCH_RESULTS, "");
        }
        *open
    }

    /// Outside click: hides the panel without clearing the list.
    pub fn close(&self) {
        let mut open = self.open.lock().expect("open lock");
        if *open {
            *open = false;
            self.surface.set_visible(dom::SEARCH_CONTAINER, false);
        }
    }

    pub fn is_open(&self) -> bool {
        *self.open.lock().expect("open lock")
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Minimal HTML text/attribute escaping for interpolated endpoint data.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the suggestion anchor list.
fn render_suggestions(products: &[ProductSuggestion], formatter: &dyn MoneyFormatter) -> String {
    products
        .iter()
        .map(|product| {
            let title = escape_html(&product.title);
            let image = match &product.featured_image {
                Some(image) => format!(
                    r#"<img src="{}" alt="{}">"#,
                    escape_html(&image.url),
                    title
                ),
                None => String::new(),
            };
            format!(
                r#"<a href="{}" class="search-result-item">{}<div class="search-result-info"><h4>{}</h4><p>{}</p></div></a>"#,
                escape_html(&product.url),
                image,
                title,
                escape_html(&formatter.format(product.price)),
            )
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
