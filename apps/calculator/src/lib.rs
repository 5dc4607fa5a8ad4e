//! # Layerline Calculator Library
//!
//! The interactive profit calculator behind the Layerline website. Holds the
//! visitor's session, exposes commands, and speaks a line-based JSON bridge.
//!
//! ## Module Organization
//! ```text
//! layerline_calculator/
//! ├── lib.rs           ◄─── You are here (setup & run)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── calculator.rs◄─── Session state (sliders + last outputs)
//! │   └── config.rs    ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports + invoke dispatcher
//! │   ├── catalog.rs   ◄─── Product list / lookup commands
//! │   ├── calculator.rs◄─── Dropdown, slider and reset commands
//! │   └── config.rs    ◄─── Configuration command
//! ├── bridge.rs        ◄─── JSON-lines request/reply loop
//! └── error.rs         ◄─── API error type for commands
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────────────────┐ ┌──────────────────────────────────┐     │
//! │  │    CalculatorState       │ │    ConfigState                   │     │
//! │  │                          │ │                                  │     │
//! │  │  • Selected product      │ │  • Currency symbol / code        │     │
//! │  │  • Slider positions      │ │  • Whole-unit display            │     │
//! │  │  • Last outputs          │ │  • Slider defaults               │     │
//! │  └──────────────────────────┘ └──────────────────────────────────┘     │
//! │                                                                         │
//! │  Each command only receives the state it needs.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod bridge;
pub mod commands;
pub mod error;
pub mod state;

use std::error::Error;
use std::io;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use layerline_core::{Catalog, CoreResult};
use state::{CalculatorSession, CalculatorState, ConfigState};

/// Runs the calculator bridge on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ──────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO (layerline crates at DEBUG), RUST_LOG overrides     │
/// │                                                                         │
/// │  2. Load Configuration ──────────────────────────────────────────────► │
/// │     • LAYERLINE_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Start Session ───────────────────────────────────────────────────► │
/// │     • Built-in catalog, first product, configured slider defaults       │
/// │                                                                         │
/// │  4. Serve Bridge ────────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line, one reply per stdout line        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// Fails when the built-in catalog is invalid or stdin/stdout break.
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();

    info!("Starting Layerline calculator");

    let (config, calculator) = setup(ConfigState::from_env())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    bridge::run(&calculator, &config, stdin.lock(), stdout.lock())?;

    info!("Input closed, shutting down");
    Ok(())
}

/// Builds the application state from a configuration.
///
/// ## Errors
/// Returns the catalog error when a built-in product row is invalid.
pub fn setup(config: ConfigState) -> CoreResult<(ConfigState, CalculatorState)> {
    let catalog = Arc::new(Catalog::builtin()?.clone());
    info!(
        products = catalog.len(),
        currency = %config.currency_code,
        "Catalog loaded"
    );

    let session = CalculatorSession::new(
        catalog,
        config.default_hours_per_day,
        config.default_units_per_month,
    );
    info!(session_id = %session.id(), "State initialized");

    Ok((config, CalculatorState::new(session)))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=layerline=trace` - Show trace for layerline crates only
/// - Default: INFO, DEBUG for layerline crates
///
/// Logs go to stderr so stdout stays reserved for bridge replies. Calling
/// this twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,layerline=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_uses_configured_defaults() {
        let config = ConfigState::from_vars(|key| match key {
            "LAYERLINE_DEFAULT_HOURS" => Some("2".to_string()),
            "LAYERLINE_DEFAULT_UNITS" => Some("10".to_string()),
            _ => None,
        });
        let (_, calculator) = setup(config).unwrap();

        calculator.with_session(|s| {
            assert_eq!(s.product_name(), "Custom Phone Stand");
            assert_eq!(s.inputs().hours_per_day.hours(), 2.0);
            assert_eq!(s.inputs().desired_units_per_month, 10);
            assert_eq!(s.desired_units_max(), 40);
        });
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
