//! # Calculator Commands
//!
//! Commands behind the calculator's dropdown, sliders and reset button.
//!
//! ## Recompute Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Slider Feedback Loop                                 │
//! │                                                                         │
//! │  ┌──────────┐   set_hours_per_day   ┌──────────┐                       │
//! │  │  Hours   │──────────────────────►│ Session  │                       │
//! │  │  slider  │                       │ recompute│                       │
//! │  └──────────┘                       └────┬─────┘                       │
//! │                                          │                              │
//! │                     desiredUnitsMax ◄────┤ (new slider maximum)        │
//! │                     desiredUnits    ◄────┤ (clamped slider value)      │
//! │                     outputs/display ◄────┘                              │
//! │                                                                         │
//! │  Every command returns the full CalculationResponse so the website     │
//! │  can redraw both sliders and all figures from one reply.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CalculatorSession, CalculatorState, ConfigState};
use layerline_core::CalculatorOutputs;

/// Calculator state after a command, shaped for the website.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    /// Selected product name
    pub product: String,

    /// Hours slider position
    pub hours_per_day: f64,

    /// Units slider position (already clamped)
    pub desired_units: i64,

    /// Units slider maximum
    pub desired_units_max: i64,

    /// Raw figures (amounts in cents)
    pub outputs: CalculatorOutputs,

    /// Figures formatted for display
    pub display: DisplayFigures,
}

/// Display strings for the result cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFigures {
    pub profit_per_unit: String,
    pub units_per_day: String,
    pub monthly_revenue: String,
    pub monthly_profit: String,
    pub yearly_profit: String,
    pub profit_per_hour: String,
}

impl CalculationResponse {
    pub fn new(session: &CalculatorSession, config: &ConfigState) -> Self {
        let outputs = session.outputs();

        CalculationResponse {
            product: session.product_name().to_string(),
            hours_per_day: session.inputs().hours_per_day.hours(),
            desired_units: session.inputs().desired_units_per_month,
            desired_units_max: session.desired_units_max(),
            display: DisplayFigures {
                profit_per_unit: config.format_money(outputs.profit_per_unit),
                units_per_day: format!("{:.1}", outputs.units_per_day),
                monthly_revenue: config.format_money(outputs.monthly_revenue),
                monthly_profit: config.format_money(outputs.monthly_profit),
                yearly_profit: config.format_money(outputs.yearly_profit),
                profit_per_hour: config.format_money(outputs.profit_per_hour),
            },
            outputs: outputs.clone(),
        }
    }
}

/// Gets the current calculation without changing anything.
pub fn get_calculation(calculator: &CalculatorState, config: &ConfigState) -> CalculationResponse {
    debug!("get_calculation command");
    calculator.with_session(|s| CalculationResponse::new(s, config))
}

/// Selects a product from the dropdown.
///
/// Unknown names select the first catalog product.
pub fn select_product(
    calculator: &CalculatorState,
    config: &ConfigState,
    name: &str,
) -> CalculationResponse {
    debug!(name = %name, "select_product command");
    calculator.with_session_mut(|s| {
        s.select_product(name);
        CalculationResponse::new(s, config)
    })
}

/// Moves the hours slider.
///
/// ## Errors
/// `VALIDATION_ERROR` when `hours` is outside [1, 24] or not a number.
pub fn set_hours_per_day(
    calculator: &CalculatorState,
    config: &ConfigState,
    hours: f64,
) -> Result<CalculationResponse, ApiError> {
    debug!(hours, "set_hours_per_day command");
    calculator.with_session_mut(|s| {
        s.set_hours(hours)?;
        Ok(CalculationResponse::new(s, config))
    })
}

/// Moves the units slider. Out-of-range values are clamped, not rejected.
pub fn set_desired_units(
    calculator: &CalculatorState,
    config: &ConfigState,
    units: i64,
) -> CalculationResponse {
    debug!(units, "set_desired_units command");
    calculator.with_session_mut(|s| {
        s.set_desired_units(units);
        CalculationResponse::new(s, config)
    })
}

/// Restores the first product and the configured slider defaults.
pub fn reset_calculator(calculator: &CalculatorState, config: &ConfigState) -> CalculationResponse {
    debug!("reset_calculator command");
    calculator.with_session_mut(|s| {
        s.reset();
        CalculationResponse::new(s, config)
    })
}
