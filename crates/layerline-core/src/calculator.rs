//! # Profit Calculator
//!
//! Derives production and profitability metrics for one product under the
//! visitor's time budget.
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        compute(product, inputs)                         │
//! │                                                                         │
//! │  1. profit_per_unit     = sell_price − unit_cost                        │
//! │  2. units_per_day       = hours_per_day ÷ print_time                    │
//! │  3. max_units_per_month = floor(units_per_day × 30)                     │
//! │  4. actual_units_sold   = min(desired, max_units_per_month)             │
//! │  5. monthly_revenue     = actual_units_sold × sell_price                │
//! │  6. monthly_profit      = actual_units_sold × profit_per_unit           │
//! │  7. yearly_profit       = monthly_profit × 12                           │
//! │  8. profit_per_hour     = profit_per_unit ÷ print_time                  │
//! │                                                                         │
//! │  Steps 2–3 use the hours exactly as given (no rounding before floor).  │
//! │  Steps 5–7 are exact integer cents.                                    │
//! │  Step 8 rounds half away from zero to the cent.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use layerline_core::{compute, CalculatorInputs, DifficultyTier, HoursPerDay, Money, PrintTime, Product};
//!
//! let product = Product::new(
//!     "Custom Phone Stand",
//!     Money::from_cents(1500),
//!     Money::from_cents(200),
//!     PrintTime::from_hours(1.5).unwrap(),
//!     DifficultyTier::Easy,
//!     "High",
//! ).unwrap();
//!
//! let inputs = CalculatorInputs::new(HoursPerDay::from_hours(1.0).unwrap(), 50);
//! let outputs = compute(&product, &inputs);
//!
//! assert_eq!(outputs.max_units_per_month, 20);
//! assert_eq!(outputs.actual_units_sold, 20);
//! assert_eq!(outputs.monthly_profit.cents(), 26_000); // $260.00
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{HoursPerDay, Product};
use crate::{DAYS_PER_MONTH, MONTHS_PER_YEAR};

// =============================================================================
// Inputs
// =============================================================================

/// The visitor-controlled parameters of one calculation.
///
/// Built fresh on every slider change and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    /// Printer time available per day, already range-checked.
    pub hours_per_day: HoursPerDay,

    /// Units the visitor would like to sell per month. Negative values are
    /// treated as zero; values above the throughput ceiling are capped.
    pub desired_units_per_month: i64,
}

impl CalculatorInputs {
    pub fn new(hours_per_day: HoursPerDay, desired_units_per_month: i64) -> Self {
        CalculatorInputs {
            hours_per_day,
            desired_units_per_month,
        }
    }
}

// =============================================================================
// Outputs
// =============================================================================

/// Everything the calculator derives, plus the raw inputs for display.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorOutputs {
    /// Name of the product the figures are for.
    pub product_name: String,

    /// Hours per day the figures assume (raw input).
    pub hours_per_day: HoursPerDay,

    /// Desired units per month as requested (raw input, before clamping).
    pub desired_units_per_month: i64,

    /// Sell price minus unit cost.
    pub profit_per_unit: Money,

    /// Units one printer can finish per day. Display only.
    pub units_per_day: f64,

    /// Throughput ceiling: whole units printable in a 30-day month.
    pub max_units_per_month: i64,

    /// `min(desired, max_units_per_month)`, never negative.
    pub actual_units_sold: i64,

    pub monthly_revenue: Money,
    pub monthly_profit: Money,
    pub yearly_profit: Money,

    /// Profit earned per hour of printer time.
    pub profit_per_hour: Money,
}

// =============================================================================
// Derivation
// =============================================================================

/// Units one printer finishes per day: `hours_per_day ÷ print_time`.
pub fn units_per_day(product: &Product, hours_per_day: HoursPerDay) -> f64 {
    hours_per_day.hours() / product.print_time().hours()
}

/// Throughput ceiling: how many whole units fit into a 30-day month.
///
/// `floor(units_per_day × 30)`. At most 43,200 (24 h/day at one minute per
/// unit), so the conversion to `i64` never saturates.
pub fn max_units_per_month(product: &Product, hours_per_day: HoursPerDay) -> i64 {
    (units_per_day(product, hours_per_day) * DAYS_PER_MONTH as f64).floor() as i64
}

/// Derives all calculator metrics for `product` under `inputs`.
///
/// Pure and total: no I/O, no hidden state, no failure modes. The same
/// product and inputs always produce the same outputs.
pub fn compute(product: &Product, inputs: &CalculatorInputs) -> CalculatorOutputs {
    let profit_per_unit = product.profit_per_unit();
    let units_per_day = units_per_day(product, inputs.hours_per_day);
    let max_units = max_units_per_month(product, inputs.hours_per_day);
    let actual_units_sold = inputs.desired_units_per_month.clamp(0, max_units);

    let monthly_revenue = product.sell_price().multiply_quantity(actual_units_sold);
    let monthly_profit = profit_per_unit.multiply_quantity(actual_units_sold);
    let yearly_profit = monthly_profit * MONTHS_PER_YEAR;
    let profit_per_hour = profit_per_unit.per_hour(product.print_time().hours());

    CalculatorOutputs {
        product_name: product.name().to_string(),
        hours_per_day: inputs.hours_per_day,
        desired_units_per_month: inputs.desired_units_per_month,
        profit_per_unit,
        units_per_day,
        max_units_per_month: max_units,
        actual_units_sold,
        monthly_revenue,
        monthly_profit,
        yearly_profit,
        profit_per_hour,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
