//! # Error Types
//!
//! Domain-specific error types for showroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  showroom-core errors (this file)                                      │
//! │  ├── CoreError        - Money decoding, arithmetic, filter errors      │
//! │  └── ValidationError  - Feed field validation failures                 │
//! │                                                                         │
//! │  price-tool errors (binary)                                            │
//! │  └── ConfigError      - Invalid environment configuration              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow::Error → stderr            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in error messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::currency::Currency;

// =============================================================================
// Core Error
// =============================================================================

/// Core model errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// An external value could not be decoded as a money amount.
    ///
    /// ## When This Occurs
    /// - Feed field is a string, bool, null, array or object
    /// - Float input is NaN or infinite
    #[error("Cannot decode money from value: {value}")]
    Decode { value: String },

    /// Two money values in different currencies were combined.
    #[error("Currency mismatch: {left:?} and {right:?}")]
    CurrencyMismatch { left: Currency, right: Currency },

    /// A discount was requested against an original price of zero.
    #[error("Cannot compute a discount from a zero original price")]
    ZeroOriginalPrice,

    /// Decimal arithmetic exceeded the representable range.
    #[error("Money arithmetic overflow")]
    Overflow,

    /// Currency code or label not recognised.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Price range bounds are inverted.
    #[error("Invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: String, max: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Feed validation errors.
///
/// These errors occur when a decoded product carries values the storefront
/// cannot display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
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
        let err = CoreError::Decode {
            value: "\"12,50\"".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot decode money from value: \"12,50\"");

        let err = CoreError::InvalidPriceRange {
            min: "50.00".to_string(),
            max: "10.00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid price range: min 50.00 is greater than max 10.00"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "fabrics".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "fabrics must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
