//! # Page Layer Error Type
//!
//! What an operation caller (a component, the host) sees when a storefront
//! operation fails. Wraps the lower layers; carries no page state.

use thiserror::Error;

use vitrine_client::ClientError;
use vitrine_core::ValidationError;

/// Result type alias for page layer operations.
pub type UiResult<T> = Result<T, UiError>;

/// Errors surfaced by storefront operations.
#[derive(Debug, Error)]
pub enum UiError {
    /// The input could never be valid; no request was issued.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The endpoint call failed (network rejection or HTTP status).
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl UiError {
    /// Returns true when no request left the page.
    pub fn is_validation(&self) -> bool {
        matches!(self, UiError::Validation(_))
    }
}
