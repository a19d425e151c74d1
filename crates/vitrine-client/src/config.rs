//! # Storefront Configuration
//!
//! Configuration for the endpoint clients and the page layer's timings.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VITRINE_BASE_URL=https://shop.example.com                          │
//! │                                                                         │
//! │  2. TOML Config File (path supplied by the host)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     relative base URL, source timings (300ms debounce, 2.5s toast)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # vitrine.toml
//! [http]
//! base_url = "https://shop.example.com"
//! timeout_ms = 5000        # omit to disable request timeouts
//!
//! [cart]
//! on_cart_page = "reload"  # reload | render
//!
//! [notice]
//! duration_ms = 2500
//!
//! [search]
//! debounce_ms = 300
//! limit = 5
//! min_query_len = 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ClientError, ClientResult};

// =============================================================================
// Cart Page Behavior
// =============================================================================

/// What a successful quantity change does when the full-cart page marker is
/// present.
///
/// The storefront historically reloaded the whole page instead of
/// reconciling in place; whether that was intentional is undocumented, so
/// both behaviors are supported and `Reload` stays the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartPageBehavior {
    /// Trigger a full page reload (short-circuits the reconciler).
    #[default]
    Reload,

    /// Reconcile the indicator regions in place like everywhere else.
    Render,
}

impl std::fmt::Display for CartPageBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartPageBehavior::Reload => write!(f, "reload"),
            CartPageBehavior::Render => write!(f, "render"),
        }
    }
}

impl std::str::FromStr for CartPageBehavior {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reload" => Ok(CartPageBehavior::Reload),
            "render" | "reconcile" => Ok(CartPageBehavior::Render),
            other => Err(ClientError::InvalidConfig(format!(
                "Unknown cart page behavior: '{}'. Valid options: reload, render",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// HTTP transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL every endpoint path is joined against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds. `None` (the default) means no
    /// timeout, matching the storefront's own behavior: a hung request
    /// suspends its task indefinitely.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    // Same-origin deployment: endpoint paths resolve against the shop host
    "https://localhost".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

/// Cart flow settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartConfig {
    /// Behavior after a quantity change on the full-cart page.
    #[serde(default)]
    pub on_cart_page: CartPageBehavior,
}

/// Toast notice settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// How long a toast stays mounted, in milliseconds.
    #[serde(default = "default_notice_duration_ms")]
    pub duration_ms: u64,
}

fn default_notice_duration_ms() -> u64 {
    2500
}

impl Default for NoticeConfig {
    fn default() -> Self {
        NoticeConfig {
            duration_ms: default_notice_duration_ms(),
        }
    }
}

/// Predictive search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Idle window before a keystroke triggers a suggest request.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Maximum product results requested from the suggest endpoint.
    #[serde(default = "default_suggest_limit")]
    pub limit: u32,

    /// Minimum trimmed query length before any request fires.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_suggest_limit() -> u32 {
    5
}

fn default_min_query_len() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: default_debounce_ms(),
            limit: default_suggest_limit(),
            min_query_len: default_min_query_len(),
        }
    }
}

// =============================================================================
// Top-Level Config
// =============================================================================

/// Full storefront layer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub cart: CartConfig,

    #[serde(default)]
    pub notice: NoticeConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

impl StorefrontConfig {
    /// Loads configuration from a TOML file, then applies env overrides.
    ///
    /// A missing file is not an error: defaults apply, matching a theme
    /// deployed without a settings file.
    pub fn load(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            let parsed: StorefrontConfig = toml::from_str(&raw)?;
            info!(path = %path.display(), "Loaded storefront config");
            parsed
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            StorefrontConfig::default()
        };

        config.apply_env();
        Ok(config)
    }

    /// Parses configuration from a TOML string (no env overrides).
    pub fn from_toml(raw: &str) -> ClientResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Applies environment variable overrides.
    fn apply_env(&mut self) {
        if let Ok(base_url) = std::env::var("VITRINE_BASE_URL") {
            if !base_url.is_empty() {
                debug!(%base_url, "Base URL overridden from environment");
                self.http.base_url = base_url;
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
    use std::str::FromStr;

    #[test]
    fn test_defaults_match_source_timings() {
        let config = StorefrontConfig::default();
        assert_eq!(config.notice.duration_ms, 2500);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.limit, 5);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.cart.on_cart_page, CartPageBehavior::Reload);
        assert_eq!(config.http.timeout_ms, None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = StorefrontConfig::from_toml(
            r#"
            [http]
            base_url = "https://shop.example.com"

            [cart]
            on_cart_page = "render"
            "#,
        )
        .unwrap();
        assert_eq!(config.http.base_url, "https://shop.example.com");
        assert_eq!(config.cart.on_cart_page, CartPageBehavior::Render);
        // Unspecified sections keep their defaults
        assert_eq!(config.notice.duration_ms, 2500);
        assert_eq!(config.search.debounce_ms, 300);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config = StorefrontConfig::from_toml("").unwrap();
        assert_eq!(config.search.limit, 5);
    }

    #[test]
    fn test_invalid_toml_is_config_load_error() {
        let err = StorefrontConfig::from_toml("[http\nbase_url = ").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_cart_page_behavior_from_str() {
        assert_eq!(
            CartPageBehavior::from_str("reload").unwrap(),
            CartPageBehavior::Reload
        );
        assert_eq!(
            CartPageBehavior::from_str("RENDER").unwrap(),
            CartPageBehavior::Render
        );
        assert!(CartPageBehavior::from_str("sideways").is_err());
    }
}
