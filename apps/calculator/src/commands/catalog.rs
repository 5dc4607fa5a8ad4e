//! # Catalog Commands
//!
//! Commands that populate the website's product dropdown and product cards.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CalculatorState, ConfigState};
use layerline_core::{DifficultyTier, Product};

/// Product data shaped for the website.
///
/// Amounts are in cents; `*_display` fields are formatted with the
/// configured currency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub name: String,
    pub sell_price: i64,
    pub unit_cost: i64,
    pub profit_per_unit: i64,
    pub print_time_hours: f64,
    pub difficulty: DifficultyTier,
    pub demand_tier: String,
    pub sell_price_display: String,
    pub profit_per_unit_display: String,
}

impl ProductSummary {
    pub fn new(product: &Product, config: &ConfigState) -> Self {
        ProductSummary {
            name: product.name().to_string(),
            sell_price: product.sell_price().cents(),
            unit_cost: product.unit_cost().cents(),
            profit_per_unit: product.profit_per_unit().cents(),
            print_time_hours: product.print_time().hours(),
            difficulty: product.difficulty(),
            demand_tier: product.demand_tier().to_string(),
            sell_price_display: config.format_money(product.sell_price()),
            profit_per_unit_display: config.format_money(product.profit_per_unit()),
        }
    }
}

/// Lists every catalog product in display order.
///
/// ## When Used
/// - Page load, to fill the product `<select>`
pub fn list_products(calculator: &CalculatorState, config: &ConfigState) -> Vec<ProductSummary> {
    debug!("list_products command");
    calculator.with_session(|s| {
        s.catalog()
            .products()
            .iter()
            .map(|p| ProductSummary::new(p, config))
            .collect()
    })
}

/// Gets one product by exact name.
///
/// Unlike `select_product`, an unknown name is reported instead of falling
/// back to the first entry.
///
/// ## Errors
/// `NOT_FOUND` when no product has this name.
pub fn get_product(
    calculator: &CalculatorState,
    config: &ConfigState,
    name: &str,
) -> Result<ProductSummary, ApiError> {
    debug!(name = %name, "get_product command");
    calculator.with_session(|s| {
        let product = s.catalog().require(name)?;
        Ok(ProductSummary::new(product, config))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::CalculatorSession;
    use layerline_core::{Catalog, HoursPerDay};
    use std::sync::Arc;

    fn setup() -> (CalculatorState, ConfigState) {
        let config = ConfigState::default();
        let session = CalculatorSession::new(
            Arc::new(Catalog::builtin().unwrap().clone()),
            HoursPerDay::from_whole_hours(4).unwrap(),
            50,
        );
        (CalculatorState::new(session), config)
    }

    #[test]
    fn test_list_products_in_catalog_order() {
        let (calculator, config) = setup();
        let products = list_products(&calculator, &config);

        assert_eq!(products.len(), Catalog::builtin().unwrap().len());
        assert_eq!(products[0].name, "Custom Phone Stand");
        assert_eq!(products[0].profit_per_unit, 1300);
        assert_eq!(products[0].print_time_hours, 1.5);
        assert_eq!(products[0].sell_price_display, "$15");
    }

    #[test]
    fn test_get_product_exact_name() {
        let (calculator, config) = setup();
        let helmet = get_product(&calculator, &config, "Cosplay Helmet").unwrap();
        assert_eq!(helmet.sell_price, 18_000);
        assert_eq!(helmet.difficulty, DifficultyTier::Hard);
        assert!((helmet.print_time_hours - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_get_product_unknown_is_not_found() {
        let (calculator, config) = setup();
        let err = get_product(&calculator, &config, "Spaceship").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let (calculator, config) = setup();
        let json = serde_json::to_value(&list_products(&calculator, &config)[0]).unwrap();
        assert_eq!(json["sellPrice"], 1500);
        assert_eq!(json["demandTier"], "High");
        assert_eq!(json["difficulty"], "easy");
    }
}
