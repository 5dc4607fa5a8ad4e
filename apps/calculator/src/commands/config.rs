//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Gets the calculator configuration.
///
/// ## When Used
/// - Page load (currency symbol, slider defaults)
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_returns_copy() {
        let config = ConfigState {
            currency_symbol: "£".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(get_config(&config).currency_symbol, "£");
    }
}
