//! # vitrine-core: Pure Domain Logic for Vitrine
//!
//! This crate is the **heart** of the storefront layer. It contains every
//! piece of logic that can be expressed as a pure function over a server
//! cart snapshot, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrine Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host Page (markup contract)                  │   │
//! │  │    add-to-cart ──► qty controls ──► search box ──► badges      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Surface trait                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vitrine-ui (page layer)                      │   │
//! │  │    CartSync, Reconciler, Notifier, PredictiveSearch            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │ indicators │  │ validation│  │   │
//! │  │   │   Money   │  │   Cart    │  │ badge/dot/ │  │   rules   │  │   │
//! │  │   │ Formatter │  │ LineItem  │  │  summary   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PAGE ACCESS • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 vitrine-client (endpoint client)                │   │
//! │  │          /cart/add.js  /cart/change.js  /cart.js  suggest       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic plus the injected formatter
//! - [`cart`] - Server cart snapshots and the indicator view-model
//! - [`error`] - Domain error types
//! - [`validation`] - Input rule validation
//!
//! ## Design Principles
//!
//! 1. **Server truth**: a `Cart` is always a just-received snapshot; nothing
//!    in this crate accumulates cart state client-side
//! 2. **Integer money**: all amounts are minor currency units (i64)
//! 3. **Explicit errors**: all errors are typed, never strings or panics
//! 4. **Idempotent projections**: the same snapshot always produces the same
//!    indicator view-model

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Cart` instead of
// `use vitrine_core::cart::Cart`

pub use cart::{Cart, CartIndicators, LineItem, SummaryView};
pub use error::ValidationError;
pub use money::{Money, MoneyFormatter, SymbolFormatter};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted for a single cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
/// before the request ever leaves the page. The storefront backend applies
/// its own ceiling; this one just fails fast.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Maximum accepted length for a search query, in characters.
pub const MAX_QUERY_LENGTH: usize = 100;
