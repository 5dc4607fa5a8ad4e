//! # Error Types
//!
//! Domain-specific error types for layerline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  layerline-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  layerline-calculator errors (app)                                     │
//! │  └── ApiError         - What the website sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Website                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## When Errors Happen
//! Almost never at runtime. The calculator itself is total over its input
//! domain; errors come from building a product, a catalog, or an
//! hours-per-day value out of bad numbers. An unknown product name on the
//! permissive [`Catalog::lookup`](crate::Catalog::lookup) path is NOT an
//! error (it falls back to the first entry).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Product cannot be found by a strict lookup.
    ///
    /// ## When This Occurs
    /// Only through [`Catalog::require`](crate::Catalog::require). The
    /// calculator's own lookup never raises this.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when data doesn't meet the domain's requirements.
/// Used at construction time so the calculator never sees invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
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

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be a finite number (not NaN or infinite).
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Duplicate value (e.g., two catalog products with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
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
        let err = CoreError::ProductNotFound("Flexi Octopus".to_string());
        assert_eq!(err.to_string(), "Product not found: Flexi Octopus");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "hours_per_day".to_string(),
            min: 1,
            max: 24,
        };
        assert_eq!(err.to_string(), "hours_per_day must be between 1 and 24");

        let err = ValidationError::Duplicate {
            field: "name".to_string(),
            value: "Cosplay Helmet".to_string(),
        };
        assert_eq!(err.to_string(), "name 'Cosplay Helmet' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "print_time".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Validation error: print_time must be positive"
        );
    }
}
