//! Catalog queries.

use std::collections::BTreeSet;

use jewelcraft_core::{SellerId, SustainabilityFlag};
use jewelcraft_storefront::catalog::{Catalog, SortOrder};
use jewelcraft_storefront::store::{FilterState, FilterUpdate, PriceRange};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use crate::output::print_json;

/// Options of `catalog list`.
#[derive(Debug)]
pub struct ListQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub materials: Vec<String>,
    pub sustainability: Vec<SustainabilityFlag>,
    pub in_stock: bool,
    pub sort: SortOrder,
}

impl ListQuery {
    /// Build the filter state the category view would hold for these options.
    ///
    /// # Errors
    ///
    /// Returns an error if `min > max`.
    pub fn filters(&self) -> Result<FilterState, jewelcraft_storefront::error::StoreError> {
        let defaults = PriceRange::default();
        FilterState::default().merge(FilterUpdate {
            category: self.category.clone(),
            price_range: Some(PriceRange::new(
                self.min.unwrap_or(defaults.min),
                self.max.unwrap_or(defaults.max),
            )),
            materials: Some(self.materials.iter().cloned().collect()),
            sustainability: Some(self.sustainability.iter().copied().collect::<BTreeSet<_>>()),
            in_stock_only: Some(self.in_stock),
        })
    }
}

/// List products through the category filters.
///
/// # Errors
///
/// Returns an error if the price bounds are inverted or output fails.
#[instrument(skip(query), fields(sort = %query.sort))]
pub fn list(query: &ListQuery) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seeded();
    let filters = query.filters()?;
    let products = catalog.filter(&filters, query.subcategory.as_deref(), query.sort);
    info!(matched = products.len(), "catalog listed");
    print_json(&products)
}

/// # Errors
///
/// Returns an error if output fails.
#[instrument]
pub fn search(query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seeded();
    let products = catalog.search(query);
    info!(matched = products.len(), "catalog searched");
    print_json(&products)
}

/// # Errors
///
/// Returns an error if output fails.
pub fn featured() -> Result<(), Box<dyn std::error::Error>> {
    print_json(&Catalog::seeded().featured())
}

/// # Errors
///
/// Returns an error if output fails.
pub fn sustainable() -> Result<(), Box<dyn std::error::Error>> {
    print_json(&Catalog::seeded().sustainable())
}

/// # Errors
///
/// Returns an error if output fails.
pub fn by_seller(seller: SellerId) -> Result<(), Box<dyn std::error::Error>> {
    print_json(&Catalog::seeded().by_seller(seller))
}

/// # Errors
///
/// Returns an error if output fails.
pub fn categories() -> Result<(), Box<dyn std::error::Error>> {
    print_json(Catalog::seeded().categories())
}

/// A quick-pick price range with the number of products inside it.
#[derive(Debug, Serialize)]
pub struct PresetOutput {
    pub label: String,
    pub range: PriceRange,
    pub products: usize,
}

fn price_presets(catalog: &Catalog) -> Vec<PresetOutput> {
    PriceRange::presets()
        .into_iter()
        .map(|(label, range)| PresetOutput {
            products: catalog
                .products()
                .iter()
                .filter(|p| range.contains(p.price))
                .count(),
            label,
            range,
        })
        .collect()
}

/// # Errors
///
/// Returns an error if output fails.
pub fn price_ranges() -> Result<(), Box<dyn std::error::Error>> {
    print_json(&price_presets(&Catalog::seeded()))
}

/// # Errors
///
/// Returns an error if output fails.
pub fn materials() -> Result<(), Box<dyn std::error::Error>> {
    print_json(Catalog::seeded().materials())
}
