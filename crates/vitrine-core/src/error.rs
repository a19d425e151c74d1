//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                       │
//! │  └── ValidationError  - Input rule failures, caught before any I/O     │
//! │                                                                         │
//! │  vitrine-client errors (separate crate)                                │
//! │  └── ClientError      - Transport rejections, HTTP status failures     │
//! │                                                                         │
//! │  vitrine-ui errors (page layer)                                        │
//! │  └── UiError          - What the operation caller sees                 │
//! │                                                                         │
//! │  Flow: ValidationError → UiError ◄── ClientError                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These occur when an event carries values that can never be valid
/// (a zero variant id, an empty line key). They are caught before any
/// network request is issued.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
