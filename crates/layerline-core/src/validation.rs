//! # Validation Module
//!
//! Input validation utilities for Layerline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Website (TypeScript)                                         │
//! │  ├── Range sliders bound hours to [1, 24] and units to [0, max]        │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Calculator command (Rust)                                    │
//! │  └── THIS MODULE: domain checks when values are built                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: compute()                                                    │
//! │  └── Total over validated inputs; clamps desired units itself          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use layerline_core::validation::{validate_hours_per_day, validate_product_name};
//!
//! assert!(validate_product_name("Articulated Dragon").is_ok());
//! assert!(validate_hours_per_day(30.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{
    MAX_HOURS_PER_DAY, MAX_PRICE_CENTS, MAX_PRINT_MINUTES, MAX_PRODUCT_NAME_LEN, MIN_HOURS_PER_DAY,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Money Validators
// =============================================================================

/// Validates a sell price in cents.
///
/// ## Rules
/// - Must be positive (> 0); nobody prints to give things away
/// - Must not exceed [`MAX_PRICE_CENTS`], which keeps yearly totals within `i64`
pub fn validate_sell_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "sell_price".to_string(),
        });
    }

    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "sell_price".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a unit cost in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (e.g. filament from an offcut bin)
/// - Must not exceed [`MAX_PRICE_CENTS`]
pub fn validate_unit_cost_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "unit_cost".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Time Validators
// =============================================================================

/// Validates a per-unit print time in decimal hours.
///
/// ## Rules
/// - Must be a finite number
/// - Must be positive (> 0)
/// - Must be between one minute and one week
pub fn validate_print_time_hours(hours: f64) -> ValidationResult<()> {
    if !hours.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "print_time".to_string(),
        });
    }

    if hours <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "print_time".to_string(),
        });
    }

    let minutes = hours * 60.0;
    if !(1.0..=MAX_PRINT_MINUTES as f64).contains(&minutes) {
        return Err(ValidationError::OutOfRange {
            field: "print_time_minutes".to_string(),
            min: 1,
            max: MAX_PRINT_MINUTES as i64,
        });
    }

    Ok(())
}

/// Validates the hours a printer is available per day.
///
/// ## Rules
/// - Must be a finite number
/// - Must be within [1, 24]
///
/// ## User Workflow
/// ```text
/// Hours slider moved to 6
///      │
///      ▼
/// validate_hours_per_day(6.0) ← THIS FUNCTION
///      │
///      ├── NaN / ∞?   → Error: "hours_per_day must be a finite number"
///      ├── < 1 or > 24 → Error: "hours_per_day must be between 1 and 24"
///      └── OK → recompute
/// ```
pub fn validate_hours_per_day(hours: f64) -> ValidationResult<()> {
    if !hours.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "hours_per_day".to_string(),
        });
    }

    if hours < MIN_HOURS_PER_DAY as f64 || hours > MAX_HOURS_PER_DAY as f64 {
        return Err(ValidationError::OutOfRange {
            field: "hours_per_day".to_string(),
            min: MIN_HOURS_PER_DAY as i64,
            max: MAX_HOURS_PER_DAY as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
