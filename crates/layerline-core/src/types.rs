//! # Domain Types
//!
//! Core domain types used throughout Layerline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   PrintTime     │   │  HoursPerDay    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  hours (>0)     │   │  hours          │       │
//! │  │  sell_price     │   │  1 min..1 week  │   │  [1, 24]        │       │
//! │  │  unit_cost      │   └─────────────────┘   └─────────────────┘       │
//! │  │  print_time     │                                                    │
//! │  │  difficulty     │   ┌─────────────────┐                             │
//! │  │  demand_tier    │   │ DifficultyTier  │                             │
//! │  └─────────────────┘   │  Easy/Medium/   │                             │
//! │                        │  Hard           │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why f64 Hours?
//! Print time and available hours are kept exactly as given, in decimal
//! hours. The throughput ceiling `floor(hours / print_time × 30)` is then
//! evaluated on the same values the website's sliders produce: 1.999 h on a
//! 1.5 h print allows 39 units, never 40.

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_hours_per_day, validate_print_time_hours, validate_product_name,
    validate_sell_price_cents, validate_unit_cost_cents, ValidationResult,
};
use crate::{MAX_HOURS_PER_DAY, MIN_HOURS_PER_DAY};

// =============================================================================
// Difficulty Tier
// =============================================================================

/// How hard a product is to print well. Descriptive only; the calculator
/// never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DifficultyTier::Easy => "Easy",
            DifficultyTier::Medium => "Medium",
            DifficultyTier::Hard => "Hard",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Print Time
// =============================================================================

/// Machine time needed to print one unit, in decimal hours.
///
/// Always positive: a zero print time would make "units per day" infinite,
/// so it is rejected when the value is built rather than at division time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, TS)]
#[ts(export)]
pub struct PrintTime(f64);

impl PrintTime {
    /// Creates a print time from decimal hours.
    ///
    /// ## Rules
    /// - Must be a finite, positive number
    /// - Must be between one minute and one week
    ///
    /// ## Example
    /// ```rust
    /// use layerline_core::PrintTime;
    ///
    /// assert_eq!(PrintTime::from_hours(1.5).unwrap().hours(), 1.5);
    /// assert_eq!(PrintTime::from_hours(0.1).unwrap().hours(), 0.1);
    /// assert!(PrintTime::from_hours(0.0).is_err());
    /// ```
    pub fn from_hours(hours: f64) -> ValidationResult<Self> {
        validate_print_time_hours(hours)?;
        Ok(PrintTime(hours))
    }

    /// Returns the print time in hours.
    #[inline]
    pub const fn hours(&self) -> f64 {
        self.0
    }
}

// =============================================================================
// Hours Per Day
// =============================================================================

/// Printer hours available per day, within `[1, 24]`.
///
/// The website's slider is bounded the same way; building this type is the
/// one place the range is enforced, so [`compute`](crate::compute) never has
/// to clamp. The value is kept exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, TS)]
#[ts(export)]
pub struct HoursPerDay(f64);

impl HoursPerDay {
    /// Creates an hours-per-day value from decimal hours.
    ///
    /// ## Example
    /// ```rust
    /// use layerline_core::HoursPerDay;
    ///
    /// assert_eq!(HoursPerDay::from_hours(4.0).unwrap().hours(), 4.0);
    /// assert_eq!(HoursPerDay::from_hours(1.999).unwrap().hours(), 1.999);
    /// assert!(HoursPerDay::from_hours(0.5).is_err());
    /// assert!(HoursPerDay::from_hours(25.0).is_err());
    /// ```
    pub fn from_hours(hours: f64) -> ValidationResult<Self> {
        validate_hours_per_day(hours)?;
        Ok(HoursPerDay(hours))
    }

    /// Creates an hours-per-day value from whole hours.
    pub fn from_whole_hours(hours: u32) -> ValidationResult<Self> {
        if !(MIN_HOURS_PER_DAY..=MAX_HOURS_PER_DAY).contains(&hours) {
            return Err(ValidationError::OutOfRange {
                field: "hours_per_day".to_string(),
                min: MIN_HOURS_PER_DAY as i64,
                max: MAX_HOURS_PER_DAY as i64,
            });
        }
        Ok(HoursPerDay(hours as f64))
    }

    /// The full day: 24 hours.
    pub const fn full_day() -> Self {
        HoursPerDay(MAX_HOURS_PER_DAY as f64)
    }

    /// Returns the available time in hours.
    #[inline]
    pub const fn hours(&self) -> f64 {
        self.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A printable product the website lets visitors evaluate.
///
/// Products are immutable once built. `unit_cost < sell_price` is expected
/// but not enforced: a loss-making product still computes, its profit
/// figures just come out zero or negative.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name, unique within a catalog.
    name: String,

    /// Price per unit sold.
    sell_price: Money,

    /// Material and consumables cost per unit produced.
    unit_cost: Money,

    /// Machine time per unit.
    print_time: PrintTime,

    /// How tricky the print is. Descriptive only.
    difficulty: DifficultyTier,

    /// Free-text market demand label. Descriptive only.
    demand_tier: String,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Rules
    /// - Name must be non-empty and at most 100 characters
    /// - Sell price must be positive
    /// - Unit cost must be non-negative
    /// - Sell price and unit cost must not exceed $1,000,000
    /// - Print time is positive by construction ([`PrintTime`])
    pub fn new(
        name: impl Into<String>,
        sell_price: Money,
        unit_cost: Money,
        print_time: PrintTime,
        difficulty: DifficultyTier,
        demand_tier: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_sell_price_cents(sell_price.cents())?;
        validate_unit_cost_cents(unit_cost.cents())?;

        Ok(Product {
            name: name.trim().to_string(),
            sell_price,
            unit_cost,
            print_time,
            difficulty,
            demand_tier: demand_tier.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_price(&self) -> Money {
        self.sell_price
    }

    pub fn unit_cost(&self) -> Money {
        self.unit_cost
    }

    pub fn print_time(&self) -> PrintTime {
        self.print_time
    }

    pub fn difficulty(&self) -> DifficultyTier {
        self.difficulty
    }

    pub fn demand_tier(&self) -> &str {
        &self.demand_tier
    }

    /// Sell price minus unit cost.
    #[inline]
    pub fn profit_per_unit(&self) -> Money {
        self.sell_price - self.unit_cost
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_stand() -> Product {
        Product::new(
            "Custom Phone Stand",
            Money::from_cents(1500),
            Money::from_cents(200),
            PrintTime::from_hours(1.5).unwrap(),
            DifficultyTier::Easy,
            "High",
        )
        .unwrap()
    }

    #[test]
    fn test_print_time_from_hours() {
        assert_eq!(PrintTime::from_hours(1.5).unwrap().hours(), 1.5);
        assert_eq!(PrintTime::from_hours(0.1).unwrap().hours(), 0.1);
        // One minute is the shortest accepted print
        assert!(PrintTime::from_hours(1.0 / 60.0).is_ok());
    }

    #[test]
    fn test_print_time_rejects_non_positive() {
        assert!(PrintTime::from_hours(0.0).is_err());
        assert!(PrintTime::from_hours(-1.0).is_err());
        assert!(PrintTime::from_hours(f64::NAN).is_err());
        assert!(PrintTime::from_hours(0.001).is_err());
    }

    #[test]
    fn test_print_time_rejects_longer_than_a_week() {
        assert!(PrintTime::from_hours(168.0).is_ok());
        assert!(PrintTime::from_hours(168.5).is_err());
    }

    #[test]
    fn test_hours_per_day_bounds() {
        assert_eq!(HoursPerDay::from_hours(1.0).unwrap().hours(), 1.0);
        assert_eq!(HoursPerDay::from_hours(24.0).unwrap(), HoursPerDay::full_day());
        assert!(HoursPerDay::from_hours(0.99).is_err());
        assert!(HoursPerDay::from_hours(24.01).is_err());
        assert!(HoursPerDay::from_hours(f64::INFINITY).is_err());
    }

    #[test]
    fn test_hours_per_day_keeps_fractional_minutes() {
        // 1.999 h is 119.94 minutes; nothing rounds it to 2 h
        let hours = HoursPerDay::from_hours(1.999).unwrap();
        assert_eq!(hours.hours(), 1.999);
        assert_ne!(hours, HoursPerDay::from_whole_hours(2).unwrap());
    }

    #[test]
    fn test_hours_per_day_from_whole_hours() {
        assert_eq!(HoursPerDay::from_whole_hours(4).unwrap().hours(), 4.0);
        assert!(HoursPerDay::from_whole_hours(0).is_err());
        assert!(HoursPerDay::from_whole_hours(25).is_err());
    }

    #[test]
    fn test_hours_serialize_as_decimal_hours() {
        let json = serde_json::to_value(HoursPerDay::from_hours(6.5).unwrap()).unwrap();
        assert_eq!(json, 6.5);
        let json = serde_json::to_value(PrintTime::from_hours(1.5).unwrap()).unwrap();
        assert_eq!(json, 1.5);
    }

    #[test]
    fn test_product_accessors() {
        let product = phone_stand();
        assert_eq!(product.name(), "Custom Phone Stand");
        assert_eq!(product.sell_price().cents(), 1500);
        assert_eq!(product.unit_cost().cents(), 200);
        assert_eq!(product.print_time().hours(), 1.5);
        assert_eq!(product.difficulty(), DifficultyTier::Easy);
        assert_eq!(product.demand_tier(), "High");
        assert_eq!(product.profit_per_unit().cents(), 1300);
    }

    #[test]
    fn test_product_validation() {
        let print_time = PrintTime::from_hours(1.0).unwrap();

        let empty_name = Product::new(
            "  ",
            Money::from_cents(100),
            Money::zero(),
            print_time,
            DifficultyTier::Easy,
            "Low",
        );
        assert!(matches!(empty_name, Err(ValidationError::Required { .. })));

        let free = Product::new(
            "Freebie",
            Money::zero(),
            Money::zero(),
            print_time,
            DifficultyTier::Easy,
            "Low",
        );
        assert!(matches!(free, Err(ValidationError::MustBePositive { .. })));

        let negative_cost = Product::new(
            "Rebate",
            Money::from_cents(100),
            Money::from_cents(-1),
            print_time,
            DifficultyTier::Easy,
            "Low",
        );
        assert!(matches!(negative_cost, Err(ValidationError::OutOfRange { .. })));

        let priceless = Product::new(
            "Crown Jewels",
            Money::from_cents(crate::MAX_PRICE_CENTS + 1),
            Money::zero(),
            print_time,
            DifficultyTier::Hard,
            "Low",
        );
        assert!(matches!(priceless, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(phone_stand()).unwrap();
        assert_eq!(json["sellPrice"], 1500);
        assert_eq!(json["printTime"], 1.5);
        assert_eq!(json["demandTier"], "High");
    }

    #[test]
    fn test_product_allows_cost_above_price() {
        let product = Product::new(
            "Loss Leader",
            Money::from_cents(500),
            Money::from_cents(800),
            PrintTime::from_hours(1.0).unwrap(),
            DifficultyTier::Medium,
            "Low",
        )
        .unwrap();
        assert_eq!(product.profit_per_unit().cents(), -300);
    }

    #[test]
    fn test_difficulty_serializes_snake_case() {
        let json = serde_json::to_string(&DifficultyTier::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        assert_eq!(DifficultyTier::Hard.to_string(), "Hard");
    }
}
