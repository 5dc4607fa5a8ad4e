//! # layerline-core: Pure Business Logic for the Layerline Profit Calculator
//!
//! This crate answers one question for a would-be print-farm owner: "if I
//! print and sell this product, what can I earn?" It contains the product
//! catalog and the profit math as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Layerline Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Website (TypeScript)                         │   │
//! │  │    Product select ──► Units slider ──► Hours slider ──► Stats   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated bindings (ts-rs)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                layerline-calculator (session shell)             │   │
//! │  │    select_product, set_hours_per_day, set_desired_units        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ layerline-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ calculator │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  compute   │  │   rules   │  │   │
//! │  │   │ PrintTime │  │           │  │  Outputs   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                      ┌───────────┐                              │   │
//! │  │                      │  catalog  │                              │   │
//! │  │                      │  lookup   │                              │   │
//! │  │                      └───────────┘                              │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, PrintTime, HoursPerDay, DifficultyTier)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed product catalog and its permissive lookup
//! - [`calculator`] - The profit derivation (`compute`)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use layerline_core::{compute, CalculatorInputs, Catalog, HoursPerDay};
//!
//! let product = Catalog::builtin().unwrap().lookup("Custom Phone Stand");
//! let inputs = CalculatorInputs::new(HoursPerDay::from_hours(4.0).unwrap(), 50);
//!
//! let outputs = compute(product, &inputs);
//! assert_eq!(outputs.max_units_per_month, 80);
//! assert_eq!(outputs.monthly_profit.cents(), 65_000); // $650.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{
    compute, max_units_per_month, units_per_day, CalculatorInputs, CalculatorOutputs,
};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Days in a calculator month.
///
/// The calculator assumes a uniform 30-day month, not calendar months.
pub const DAYS_PER_MONTH: i64 = 30;

/// Months in a calculator year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Lowest accepted "hours available per day" slider value.
pub const MIN_HOURS_PER_DAY: u32 = 1;

/// Highest accepted "hours available per day" slider value.
pub const MAX_HOURS_PER_DAY: u32 = 24;

/// Longest accepted print time for a single unit, in minutes (one week).
pub const MAX_PRINT_MINUTES: u32 = 7 * 24 * 60;

/// Highest accepted sell price or unit cost, in cents ($1,000,000).
///
/// At most 43,200 units fit in a month (24 h/day at one minute per unit), so
/// yearly totals stay far inside `i64`.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 100;
