//! # Validation Module
//!
//! Input validation for cart mutations and search queries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Markup (data attributes)                                     │
//! │  ├── Components parse variant ids / quantities at registration         │
//! │  └── Unparsable attributes never produce a component                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Rule checks before any request is issued                          │
//! │  └── A rejected input costs zero round trips                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Storefront backend                                           │
//! │  └── Authoritative stock / ceiling checks, surfaced as HTTP errors     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_LINE_QUANTITY, MAX_QUERY_LENGTH};

// =============================================================================
// Cart Mutation Validators
// =============================================================================

/// Validates a variant id.
///
/// ## Rules
/// - Must be positive (backend ids start at 1)
///
/// ## Example
/// ```rust
/// use vitrine_core::validation::validate_variant_id;
///
/// assert!(validate_variant_id(41234567).is_ok());
/// assert!(validate_variant_id(0).is_err());
/// ```
pub fn validate_variant_id(variant_id: u64) -> ValidationResult<()> {
    if variant_id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "variant id",
        });
    }
    Ok(())
}

/// Validates a quantity for an add operation.
///
/// ## Rules
/// - Must be at least 1 (adding zero of something is meaningless)
/// - Must not exceed [`MAX_LINE_QUANTITY`]
pub fn validate_add_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }
    validate_change_quantity(quantity)
}

/// Validates a quantity for a change operation.
///
/// ## Rules
/// - Zero is allowed (it removes the line)
/// - Must not exceed [`MAX_LINE_QUANTITY`]
pub fn validate_change_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            min: 0,
            max: MAX_LINE_QUANTITY,
        });
    }
    Ok(())
}

/// Validates a cart line key.
///
/// ## Rules
/// - Must not be empty after trimming (keys are opaque but never blank)
pub fn validate_line_key(key: &str) -> ValidationResult<()> {
    if key.trim().is_empty() {
        return Err(ValidationError::Required { field: "line key" });
    }
    Ok(())
}

// =============================================================================
// Search Validators
// =============================================================================

/// Validates and normalizes a search query.
///
/// ## Rules
/// - Leading/trailing whitespace is stripped
/// - Maximum [`MAX_QUERY_LENGTH`] characters
///
/// Minimum-length gating (2 characters before a suggest request fires) is a
/// flow decision, not a validity rule, so it lives with the search
/// controller rather than here.
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "query",
            max: MAX_QUERY_LENGTH,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_id() {
        assert!(validate_variant_id(1).is_ok());
        assert!(validate_variant_id(41234567).is_ok());
        assert!(validate_variant_id(0).is_err());
    }

    #[test]
    fn test_add_quantity_rejects_zero() {
        assert!(validate_add_quantity(0).is_err());
        assert!(validate_add_quantity(1).is_ok());
        assert!(validate_add_quantity(MAX_LINE_QUANTITY).is_ok());
        assert!(validate_add_quantity(MAX_LINE_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_change_quantity_allows_zero() {
        // Zero removes the line, so it must pass
        assert!(validate_change_quantity(0).is_ok());
        assert!(validate_change_quantity(MAX_LINE_QUANTITY).is_ok());
        assert!(validate_change_quantity(MAX_LINE_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_line_key() {
        assert!(validate_line_key("39897499729985:3a2d").is_ok());
        assert!(validate_line_key("").is_err());
        assert!(validate_line_key("   ").is_err());
    }

    #[test]
    fn test_search_query_trims() {
        assert_eq!(validate_search_query("  mug  ").unwrap(), "mug");
        assert_eq!(validate_search_query("").unwrap(), "");
    }

    #[test]
    fn test_search_query_length_bound() {
        let long = "a".repeat(MAX_QUERY_LENGTH + 1);
        assert!(validate_search_query(&long).is_err());

        let exact = "a".repeat(MAX_QUERY_LENGTH);
        assert!(validate_search_query(&exact).is_ok());
    }
}
