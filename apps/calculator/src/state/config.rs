//! # Configuration State
//!
//! Stores calculator configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LAYERLINE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::Serialize;
use tracing::warn;

use layerline_core::{HoursPerDay, Money};

/// Calculator configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Show amounts rounded to whole currency units ("$7,800")
    /// instead of two decimals ("$7,800.00")
    pub whole_units: bool,

    /// Hours slider position when a session starts
    pub default_hours_per_day: HoursPerDay,

    /// Units slider position when a session starts
    pub default_units_per_month: i64,
}

impl Default for ConfigState {
    /// Returns the website's default configuration.
    ///
    /// ## Default Values
    /// - Currency: USD ($), whole units
    /// - Hours slider: 4 h/day
    /// - Units slider: 50 units/month
    fn default() -> Self {
        ConfigState {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            whole_units: true,
            default_hours_per_day: HoursPerDay::from_whole_hours(4)
                .unwrap_or_else(|_| HoursPerDay::full_day()),
            default_units_per_month: 50,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LAYERLINE_CURRENCY_CODE`: Override currency code
    /// - `LAYERLINE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `LAYERLINE_WHOLE_UNITS`: `true`/`false` (also `1`/`0`)
    /// - `LAYERLINE_DEFAULT_HOURS`: Hours slider default (1-24, e.g. "6.5")
    /// - `LAYERLINE_DEFAULT_UNITS`: Units slider default (>= 0)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(code) = var("LAYERLINE_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Some(symbol) = var("LAYERLINE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = var("LAYERLINE_WHOLE_UNITS") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => config.whole_units = true,
                "false" | "0" | "no" => config.whole_units = false,
                _ => warn!(value = %raw, "ignoring invalid LAYERLINE_WHOLE_UNITS"),
            }
        }

        if let Some(raw) = var("LAYERLINE_DEFAULT_HOURS") {
            match raw.trim().parse::<f64>().map(HoursPerDay::from_hours) {
                Ok(Ok(hours)) => config.default_hours_per_day = hours,
                Ok(Err(e)) => warn!(value = %raw, error = %e, "ignoring invalid LAYERLINE_DEFAULT_HOURS"),
                Err(_) => warn!(value = %raw, "ignoring non-numeric LAYERLINE_DEFAULT_HOURS"),
            }
        }

        if let Some(raw) = var("LAYERLINE_DEFAULT_UNITS") {
            match raw.trim().parse::<i64>() {
                Ok(units) if units >= 0 => config.default_units_per_month = units,
                _ => warn!(value = %raw, "ignoring invalid LAYERLINE_DEFAULT_UNITS"),
            }
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use layerline_calculator::state::ConfigState;
    ///
    /// let mut config = ConfigState::default();
    /// assert_eq!(config.format_currency(780_000), "$7,800");
    ///
    /// config.whole_units = false;
    /// assert_eq!(config.format_currency(86_750), "$867.50");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };

        if self.whole_units {
            let whole = Money::from_cents(cents).round_to_whole_units();
            format!(
                "{}{}{}",
                if whole < 0 { "-" } else { "" },
                self.currency_symbol,
                group_thousands(whole.unsigned_abs())
            )
        } else {
            let abs = cents.unsigned_abs();
            format!(
                "{}{}{}.{:02}",
                sign,
                self.currency_symbol,
                group_thousands(abs / 100),
                abs % 100
            )
        }
    }

    /// Formats a Money value using the configured currency.
    pub fn format_money(&self, money: Money) -> String {
        self.format_currency(money.cents())
    }
}

/// Inserts thousands separators: 1234567 → "1,234,567".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
