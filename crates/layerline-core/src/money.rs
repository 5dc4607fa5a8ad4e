//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    50 units × $14.99 = 749.4999999999999  ❌ WRONG!                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    50 × 1499 cents = 74950 cents = $749.50                             │
//! │    monthly × 12 = yearly, exactly, every time                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use layerline_core::money::Money;
//!
//! let price = Money::from_cents(1500); // $15.00
//! let cost = Money::from_cents(200);   // $2.00
//!
//! let margin = price - cost;              // $13.00
//! let month = margin.multiply_quantity(50); // $650.00
//! assert_eq!(month.cents(), 65_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: a product priced below its cost yields negative profit
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Product.sell_price ──┬──► profit_per_unit ──► monthly_profit ──► yearly_profit
///                      │            │
/// Product.unit_cost ───┘            └──► profit_per_hour
///
/// Product.sell_price ──► monthly_revenue
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use layerline_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use layerline_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use layerline_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1500); // $15.00
    /// let revenue = unit_price.multiply_quantity(50);
    /// assert_eq!(revenue.cents(), 75_000); // $750.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Divides by a positive number of hours, rounded half away from zero
    /// to whole cents.
    ///
    /// Used for "profit per unit" into "profit per hour".
    ///
    /// ## Example
    /// ```rust
    /// use layerline_core::money::Money;
    ///
    /// // $13.00 per 1.5 h print = $8.666… per hour → $8.67
    /// let per_hour = Money::from_cents(1300).per_hour(1.5);
    /// assert_eq!(per_hour.cents(), 867);
    /// ```
    pub fn per_hour(&self, hours: f64) -> Money {
        // Amounts are capped well below 2^53 cents, so the f64 is exact
        Money::from_cents((self.0 as f64 / hours).round() as i64)
    }

    /// Rounds to whole major units (half away from zero).
    ///
    /// This is what the website shows next to the sliders: `$7,800`, not
    /// `$7,800.00`.
    ///
    /// ## Example
    /// ```rust
    /// use layerline_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(867).round_to_whole_units(), 9);
    /// assert_eq!(Money::from_cents(849).round_to_whole_units(), 8);
    /// assert_eq!(Money::from_cents(-250).round_to_whole_units(), -3);
    /// ```
    pub const fn round_to_whole_units(&self) -> i64 {
        if self.0 >= 0 {
            (self.0 + 50) / 100
        } else {
            (self.0 - 50) / 100
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Website display goes through the
/// calculator app's configured currency formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64 (unit counts, month-to-year scaling).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1500);
        let b = Money::from_cents(200);

        assert_eq!((a - b).cents(), 1300);
        assert_eq!((a * 12).cents(), 18_000);
        assert_eq!(a.multiply_quantity(50).cents(), 75_000);
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_per_hour_half_away_from_zero() {
        // 13.00 / 1.5 = 8.666.. -> 8.67
        assert_eq!(Money::from_cents(1300).per_hour(1.5).cents(), 867);
        // exact division stays exact
        assert_eq!(Money::from_cents(1000).per_hour(1.0).cents(), 1000);
        // 0.05 / 2 = 0.025 -> 0.03 (half rounds away from zero)
        assert_eq!(Money::from_cents(5).per_hour(2.0).cents(), 3);
        assert_eq!(Money::from_cents(-5).per_hour(2.0).cents(), -3);
        // 30 h helmet: 145.00 / 30 = 4.8333.. -> 4.83
        assert_eq!(Money::from_cents(14_500).per_hour(30.0).cents(), 483);
    }

    #[test]
    fn test_round_to_whole_units() {
        assert_eq!(Money::from_cents(780_000).round_to_whole_units(), 7800);
        assert_eq!(Money::from_cents(150).round_to_whole_units(), 2);
        assert_eq!(Money::from_cents(149).round_to_whole_units(), 1);
        assert_eq!(Money::from_cents(-150).round_to_whole_units(), -2);
        assert_eq!(Money::zero().round_to_whole_units(), 0);
    }
}
