//! # Commands Module
//!
//! All commands exposed to the website's calculator widget.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports + invoke dispatcher)
//! ├── catalog.rs     ◄─── Product list and strict product lookup
//! ├── calculator.rs  ◄─── Dropdown, sliders, reset
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Website                                                                │
//! │  ───────                                                                │
//! │  bridge.send({ command: 'set_hours_per_day', args: { hours: 6 } })      │
//! │         │                                                               │
//! │         │ (one JSON line)                                               │
//! │         ▼                                                               │
//! │  invoke(calculator, config, "set_hours_per_day", args)                  │
//! │         │                                                               │
//! │         │ args deserialized into SetHoursArgs                          │
//! │         ▼                                                               │
//! │  calculator::set_hours_per_day(calculator, config, 6.0)                 │
//! │      -> Result<CalculationResponse, ApiError>                           │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Website receives: CalculationResponse or ApiError                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command function declares only the state it needs, so they can
//! also be called directly from Rust.

pub mod calculator;
pub mod catalog;
pub mod config;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::{CalculatorState, ConfigState};

/// Command names accepted by [`invoke`].
pub const COMMANDS: &[&str] = &[
    "list_products",
    "get_product",
    "get_calculation",
    "select_product",
    "set_hours_per_day",
    "set_desired_units",
    "reset_calculator",
    "get_config",
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductArgs {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetHoursArgs {
    hours: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetUnitsArgs {
    units: i64,
}

/// Runs a command by name with JSON arguments and returns its JSON result.
///
/// ## Errors
/// - `UNKNOWN_COMMAND` for names not in [`COMMANDS`]
/// - `VALIDATION_ERROR` for missing or mistyped arguments
/// - Whatever the command itself returns
pub fn invoke(
    calculator: &CalculatorState,
    config: &ConfigState,
    command: &str,
    args: Value,
) -> Result<Value, ApiError> {
    match command {
        "list_products" => to_json(catalog::list_products(calculator, config)),
        "get_product" => {
            let args: ProductArgs = parse_args(args)?;
            to_json(catalog::get_product(calculator, config, &args.name)?)
        }
        "get_calculation" => to_json(calculator::get_calculation(calculator, config)),
        "select_product" => {
            let args: ProductArgs = parse_args(args)?;
            to_json(calculator::select_product(calculator, config, &args.name))
        }
        "set_hours_per_day" => {
            let args: SetHoursArgs = parse_args(args)?;
            to_json(calculator::set_hours_per_day(calculator, config, args.hours)?)
        }
        "set_desired_units" => {
            let args: SetUnitsArgs = parse_args(args)?;
            to_json(calculator::set_desired_units(calculator, config, args.units))
        }
        "reset_calculator" => to_json(calculator::reset_calculator(calculator, config)),
        "get_config" => to_json(config::get_config(config)),
        other => Err(ApiError::unknown_command(other)),
    }
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(args)?)
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| {
        tracing::error!("Response serialization failed: {}", e);
        ApiError::internal("Response serialization failed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::CalculatorSession;
    use layerline_core::Catalog;
    use serde_json::json;
    use std::sync::Arc;

    fn setup() -> (CalculatorState, ConfigState) {
        let config = ConfigState::default();
        let session = CalculatorSession::new(
            Arc::new(Catalog::builtin().unwrap().clone()),
            config.default_hours_per_day,
            config.default_units_per_month,
        );
        (CalculatorState::new(session), config)
    }

    #[test]
    fn test_every_listed_command_dispatches() {
        let (calculator, config) = setup();
        let args = json!({ "name": "Cosplay Helmet", "hours": 4, "units": 2 });

        for command in COMMANDS {
            let result = invoke(&calculator, &config, command, args.clone());
            assert!(result.is_ok(), "{} failed: {:?}", command, result);
        }
    }

    #[test]
    fn test_invoke_set_hours() {
        let (calculator, config) = setup();
        let value = invoke(&calculator, &config, "set_hours_per_day", json!({ "hours": 1 })).unwrap();
        assert_eq!(value["desiredUnitsMax"], 20);
        assert_eq!(value["outputs"]["monthlyProfit"], 26_000);
    }

    #[test]
    fn test_invoke_unknown_command() {
        let (calculator, config) = setup();
        let err = invoke(&calculator, &config, "buy_printer", Value::Null).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);
    }

    #[test]
    fn test_invoke_missing_or_mistyped_args() {
        let (calculator, config) = setup();

        let err = invoke(&calculator, &config, "set_hours_per_day", json!({})).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = invoke(&calculator, &config, "set_desired_units", json!({ "units": "ten" }))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_invoke_command_errors_pass_through() {
        let (calculator, config) = setup();

        let err = invoke(&calculator, &config, "get_product", json!({ "name": "Spaceship" }))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = invoke(&calculator, &config, "set_hours_per_day", json!({ "hours": 0.5 }))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_invoke_select_unknown_product_falls_back() {
        let (calculator, config) = setup();
        let value = invoke(&calculator, &config, "select_product", json!({ "name": "Spaceship" }))
            .unwrap();
        assert_eq!(value["product"], "Custom Phone Stand");
    }
}
