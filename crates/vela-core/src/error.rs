//! # Error Types
//!
//! Domain-specific error types for vela-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vela-core errors (this file)                                           │
//! │  ├── CoreError        - Workflow/business rule failures                 │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  vela-db errors (separate crate)                                        │
//! │  └── DbError          - Database operation failures                     │
//! │                                                                         │
//! │  vela-api errors (adapter crate)                                        │
//! │  └── ApiError         - What the caller sees (serialized)               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → Caller        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (email, id, etc.)
//! 3. Errors are enum variants, never bare Strings
//! 4. Each error variant maps to a descriptive caller-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by the workflows.
///
/// These are the workflow failure kinds of the order-assembly and
/// customer/product creation paths. They should be caught by the API
/// adapter and translated to caller-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The customer referenced by an order does not exist.
    #[error("Invalid customer ID: {0}")]
    CustomerNotFound(String),

    /// A product reference in an order did not resolve.
    ///
    /// Order assembly rejects the whole operation on the first bad
    /// reference; no partial order is ever created.
    #[error("Invalid product ID: {0}")]
    ProductNotFound(String),

    /// Order assembly was invoked with an empty product list.
    #[error("At least one product must be selected for an order")]
    NoProductsSelected,

    /// A customer email that must be unique already exists.
    #[error("Email '{0}' already exists")]
    DuplicateEmail(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before any store access.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., malformed phone number or email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CustomerNotFound("abc-123".to_string());
        assert_eq!(err.to_string(), "Invalid customer ID: abc-123");

        let err = CoreError::DuplicateEmail("a@x.com".to_string());
        assert_eq!(err.to_string(), "Email 'a@x.com' already exists");

        let err = CoreError::NoProductsSelected;
        assert_eq!(
            err.to_string(),
            "At least one product must be selected for an order"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
