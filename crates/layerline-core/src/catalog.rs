//! # Product Catalog
//!
//! The fixed list of products a visitor can pick in the profit calculator.
//!
//! ## Lookup Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lookup("Articulated Dragon")  ──► exact match ──► Articulated Dragon   │
//! │                                                                         │
//! │  lookup("Articulated Dragn")   ──► no match    ──► FIRST ENTRY          │
//! │                                                    (never an error)     │
//! │                                                                         │
//! │  require("Articulated Dragn")  ──► no match    ──► ProductNotFound      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator always shows *something*: an unknown name selects the
//! first catalog entry. Callers that need to know about a miss use
//! [`Catalog::get`] or [`Catalog::require`].

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{DifficultyTier, PrintTime, Product};
use crate::validation::ValidationResult;

// =============================================================================
// Built-in Product Table
// =============================================================================

struct CatalogRow {
    name: &'static str,
    sell_price_cents: i64,
    unit_cost_cents: i64,
    print_hours: f64,
    difficulty: DifficultyTier,
    demand_tier: &'static str,
}

/// Products featured on the website, in display order.
const BUILTIN_ROWS: &[CatalogRow] = &[
    CatalogRow {
        name: "Custom Phone Stand",
        sell_price_cents: 1500,
        unit_cost_cents: 200,
        print_hours: 1.5,
        difficulty: DifficultyTier::Easy,
        demand_tier: "High",
    },
    CatalogRow {
        name: "Personalized Keychain",
        sell_price_cents: 800,
        unit_cost_cents: 50,
        print_hours: 0.5,
        difficulty: DifficultyTier::Easy,
        demand_tier: "Very High",
    },
    CatalogRow {
        name: "Desk Cable Organizer",
        sell_price_cents: 1200,
        unit_cost_cents: 150,
        print_hours: 1.0,
        difficulty: DifficultyTier::Easy,
        demand_tier: "Steady",
    },
    CatalogRow {
        name: "Self-Watering Planter",
        sell_price_cents: 2800,
        unit_cost_cents: 450,
        print_hours: 5.0,
        difficulty: DifficultyTier::Medium,
        demand_tier: "Seasonal",
    },
    CatalogRow {
        name: "Articulated Dragon",
        sell_price_cents: 3500,
        unit_cost_cents: 600,
        print_hours: 8.0,
        difficulty: DifficultyTier::Medium,
        demand_tier: "Very High",
    },
    CatalogRow {
        name: "Lithophane Lamp",
        sell_price_cents: 5500,
        unit_cost_cents: 900,
        print_hours: 10.0,
        difficulty: DifficultyTier::Medium,
        demand_tier: "Peaks around holidays",
    },
    CatalogRow {
        name: "Tabletop Miniature Set",
        sell_price_cents: 4500,
        unit_cost_cents: 500,
        print_hours: 6.0,
        difficulty: DifficultyTier::Hard,
        demand_tier: "Niche but loyal",
    },
    CatalogRow {
        name: "Cosplay Helmet",
        sell_price_cents: 18_000,
        unit_cost_cents: 3500,
        print_hours: 30.0,
        difficulty: DifficultyTier::Hard,
        demand_tier: "Niche",
    },
];

impl CatalogRow {
    fn to_product(&self) -> ValidationResult<Product> {
        Product::new(
            self.name,
            Money::from_cents(self.sell_price_cents),
            Money::from_cents(self.unit_cost_cents),
            PrintTime::from_hours(self.print_hours)?,
            self.difficulty,
            self.demand_tier,
        )
    }
}

static BUILTIN: LazyLock<CoreResult<Catalog>> = LazyLock::new(|| {
    let products = BUILTIN_ROWS
        .iter()
        .map(CatalogRow::to_product)
        .collect::<ValidationResult<Vec<_>>>()?;
    Catalog::new(products)
});

// =============================================================================
// Catalog
// =============================================================================

/// A read-only, non-empty list of uniquely named products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from a list of products.
    ///
    /// ## Rules
    /// - At least one product (the lookup fallback needs a first entry)
    /// - Product names are unique
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        if products.is_empty() {
            return Err(ValidationError::Required {
                field: "catalog products".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.name()) {
                return Err(ValidationError::Duplicate {
                    field: "name".to_string(),
                    value: product.name().to_string(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// The brand's built-in catalog, built and validated once on first use.
    ///
    /// ## Errors
    /// The validation error of the first bad row, on every call.
    pub fn builtin() -> CoreResult<&'static Catalog> {
        BUILTIN.as_ref().map_err(CoreError::clone)
    }

    /// Returns the product with exactly this name, or the first catalog
    /// entry when there is no such product.
    ///
    /// ## Example
    /// ```rust
    /// use layerline_core::Catalog;
    ///
    /// let catalog = Catalog::builtin().unwrap();
    /// assert_eq!(catalog.lookup("Cosplay Helmet").name(), "Cosplay Helmet");
    /// assert_eq!(catalog.lookup("nonexistent"), catalog.first());
    /// ```
    pub fn lookup(&self, name: &str) -> &Product {
        self.get(name).unwrap_or_else(|| self.first())
    }

    /// Returns the product with exactly this name, if any.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Returns the product with exactly this name or `ProductNotFound`.
    pub fn require(&self, name: &str) -> CoreResult<&Product> {
        self.get(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
    }

    /// The first catalog entry (the default selection).
    pub fn first(&self) -> &Product {
        &self.products[0]
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false; a catalog cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
