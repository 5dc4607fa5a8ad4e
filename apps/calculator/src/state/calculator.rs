//! # Calculator Session State
//!
//! Owns the visitor's slider positions and the last computed figures.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands read and modify the session
//! 2. Only one command should modify it at a time
//! 3. The website bridge may call commands from any thread
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator Session Operations                        │
//! │                                                                         │
//! │  Website Action           Command                  Session Change       │
//! │  ──────────────           ───────                  ──────────────       │
//! │                                                                         │
//! │  Pick product ───────────► select_product() ─────► product + recompute │
//! │                                                                         │
//! │  Move hours slider ──────► set_hours_per_day() ──► hours + recompute   │
//! │                                                                         │
//! │  Move units slider ──────► set_desired_units() ──► units + recompute   │
//! │                                                                         │
//! │  Click reset ────────────► reset_calculator() ───► defaults            │
//! │                                                                         │
//! │  Every recompute clamps the stored units to [0, max_units_per_month],  │
//! │  which is also the units slider's new maximum.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use layerline_core::{
    compute, max_units_per_month, CalculatorInputs, CalculatorOutputs, Catalog, HoursPerDay,
    ValidationError,
};

/// One visitor's calculator.
///
/// ## Invariants
/// - `product_name` always names a product in `catalog`
/// - `inputs.desired_units_per_month` is within `[0, outputs.max_units_per_month]`
/// - `outputs` is `compute(product, inputs)` for the current product and inputs
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    id: Uuid,
    catalog: Arc<Catalog>,
    product_name: String,
    inputs: CalculatorInputs,
    outputs: CalculatorOutputs,
    defaults: CalculatorInputs,
    updated_at: DateTime<Utc>,
}

impl CalculatorSession {
    /// Starts a session on the catalog's first product with the given
    /// slider defaults.
    pub fn new(catalog: Arc<Catalog>, default_hours: HoursPerDay, default_units: i64) -> Self {
        let defaults = CalculatorInputs::new(default_hours, default_units);
        let product = catalog.first();
        let outputs = compute(product, &defaults);

        let mut session = CalculatorSession {
            id: Uuid::new_v4(),
            product_name: product.name().to_string(),
            inputs: defaults,
            outputs,
            defaults,
            catalog,
            updated_at: Utc::now(),
        };
        session.recompute();

        debug!(session_id = %session.id, product = %session.product_name, "calculator session started");
        session
    }

    /// Selects a product by name.
    ///
    /// Unknown names select the catalog's first product, as the website's
    /// dropdown does. Returns `true` when the name matched exactly.
    pub fn select_product(&mut self, name: &str) -> bool {
        let product = self.catalog.lookup(name);
        let matched = product.name() == name;

        if !matched {
            debug!(
                session_id = %self.id,
                requested = %name,
                fallback = %product.name(),
                "unknown product, using first catalog entry"
            );
        }

        self.product_name = product.name().to_string();
        self.recompute();
        matched
    }

    /// Moves the hours slider.
    ///
    /// ## Errors
    /// `ValidationError` when `hours` is not a finite number in [1, 24]; the
    /// session is left unchanged.
    pub fn set_hours(&mut self, hours: f64) -> Result<(), ValidationError> {
        self.inputs.hours_per_day = HoursPerDay::from_hours(hours)?;
        self.recompute();
        Ok(())
    }

    /// Moves the units slider. Values are clamped to `[0, max]`.
    pub fn set_desired_units(&mut self, units: i64) {
        self.inputs.desired_units_per_month = units;
        self.recompute();
    }

    /// Restores the starting product and slider defaults.
    pub fn reset(&mut self) {
        self.product_name = self.catalog.first().name().to_string();
        self.inputs = self.defaults;
        self.recompute();
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn outputs(&self) -> &CalculatorOutputs {
        &self.outputs
    }

    /// Upper bound of the units slider: the current throughput ceiling.
    pub fn desired_units_max(&self) -> i64 {
        self.outputs.max_units_per_month
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn recompute(&mut self) {
        let product = self.catalog.lookup(&self.product_name);
        let max_units = max_units_per_month(product, self.inputs.hours_per_day);

        self.inputs.desired_units_per_month = self.inputs.desired_units_per_month.clamp(0, max_units);
        self.outputs = compute(product, &self.inputs);
        self.updated_at = Utc::now();

        debug!(
            session_id = %self.id,
            max_units = max_units,
            monthly_profit = %self.outputs.monthly_profit,
            "calculation updated"
        );
    }
}

/// Shared calculator state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<CalculatorSession>>`:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one thread modifies the session at a time
#[derive(Debug, Clone)]
pub struct CalculatorState {
    session: Arc<Mutex<CalculatorSession>>,
}

impl CalculatorState {
    pub fn new(session: CalculatorSession) -> Self {
        CalculatorState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let max = calculator.with_session(|s| s.desired_units_max());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CalculatorSession) -> R,
    {
        let session = self.session.lock().expect("Calculator session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// calculator.with_session_mut(|s| s.set_hours(6.0))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CalculatorSession) -> R,
    {
        let mut session = self.session.lock().expect("Calculator session mutex poisoned");
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerline_core::{DifficultyTier, Money, PrintTime, Product};

    fn product(name: &str, sell_cents: i64, cost_cents: i64, print_hours: f64) -> Product {
        Product::new(
            name,
            Money::from_cents(sell_cents),
            Money::from_cents(cost_cents),
            PrintTime::from_hours(print_hours).unwrap(),
            DifficultyTier::Easy,
            "High",
        )
        .unwrap()
    }

    fn test_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                product("Phone Stand", 1500, 200, 1.5),
                product("Helmet", 18_000, 3500, 30.0),
            ])
            .unwrap(),
        )
    }

    fn test_session() -> CalculatorSession {
        CalculatorSession::new(test_catalog(), HoursPerDay::from_whole_hours(4).unwrap(), 50)
    }

    #[test]
    fn test_new_session_uses_first_product_and_defaults() {
        let session = test_session();
        assert_eq!(session.product_name(), "Phone Stand");
        assert_eq!(session.outputs().max_units_per_month, 80);
        assert_eq!(session.outputs().actual_units_sold, 50);
        assert_eq!(session.outputs().monthly_profit, Money::from_cents(65_000));
        assert_eq!(session.desired_units_max(), 80);
    }

    #[test]
    fn test_new_session_clamps_default_units() {
        let session = CalculatorSession::new(
            test_catalog(),
            HoursPerDay::from_whole_hours(1).unwrap(),
            500,
        );
        assert_eq!(session.inputs().desired_units_per_month, 20);
    }

    #[test]
    fn test_lowering_hours_clamps_desired_units() {
        let mut session = test_session();
        session.set_hours(1.0).unwrap();

        assert_eq!(session.desired_units_max(), 20);
        assert_eq!(session.inputs().desired_units_per_month, 20);
        assert_eq!(session.outputs().monthly_profit, Money::from_cents(26_000));

        // Raising hours again does not restore the clamped value
        session.set_hours(4.0).unwrap();
        assert_eq!(session.desired_units_max(), 80);
        assert_eq!(session.inputs().desired_units_per_month, 20);
    }

    #[test]
    fn test_fractional_hours_lower_slider_maximum() {
        let mut session = test_session();
        session.set_desired_units(80);

        session.set_hours(3.999).unwrap();
        assert_eq!(session.desired_units_max(), 79);
        assert_eq!(session.inputs().desired_units_per_month, 79);
        assert_eq!(session.outputs().hours_per_day.hours(), 3.999);
    }

    #[test]
    fn test_invalid_hours_leave_session_unchanged() {
        let mut session = test_session();
        let before = session.outputs().clone();

        assert!(session.set_hours(0.0).is_err());
        assert!(session.set_hours(f64::NAN).is_err());
        assert_eq!(session.outputs(), &before);
    }

    #[test]
    fn test_set_desired_units_clamps_to_range() {
        let mut session = test_session();

        session.set_desired_units(1000);
        assert_eq!(session.inputs().desired_units_per_month, 80);

        session.set_desired_units(-3);
        assert_eq!(session.inputs().desired_units_per_month, 0);
        assert!(session.outputs().monthly_revenue.is_zero());
    }

    #[test]
    fn test_select_product_recomputes() {
        let mut session = test_session();

        assert!(session.select_product("Helmet"));
        assert_eq!(session.product_name(), "Helmet");
        // 4 h/day * 30 / 30 h per helmet
        assert_eq!(session.desired_units_max(), 4);
        assert_eq!(session.inputs().desired_units_per_month, 4);
        assert_eq!(session.outputs().monthly_profit, Money::from_cents(58_000));
    }

    #[test]
    fn test_select_unknown_product_falls_back_to_first() {
        let mut session = test_session();
        session.select_product("Helmet");

        assert!(!session.select_product("Spaceship"));
        assert_eq!(session.product_name(), "Phone Stand");
        assert_eq!(session.outputs().product_name, "Phone Stand");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = test_session();
        session.select_product("Helmet");
        session.set_hours(12.0).unwrap();

        session.reset();
        assert_eq!(session.product_name(), "Phone Stand");
        assert_eq!(session.inputs().hours_per_day.hours(), 4.0);
        assert_eq!(session.inputs().desired_units_per_month, 50);
    }

    #[test]
    fn test_state_serializes_access() {
        let state = CalculatorState::new(test_session());
        let shared = state.clone();

        shared.with_session_mut(|s| s.set_desired_units(10));
        let sold = state.with_session(|s| s.outputs().actual_units_sold);
        assert_eq!(sold, 10);
    }
}
