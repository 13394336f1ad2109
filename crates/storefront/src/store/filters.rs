//! Catalog filter state and partial updates.

use std::collections::BTreeSet;

use jewelcraft_core::{Price, SustainabilityFlag};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Upper bound of the default range.
    pub const DEFAULT_MAX: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Whether `price` lies within the bounds, both ends included.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }

    /// The quick-pick ranges offered next to the category listing.
    #[must_use]
    pub fn presets() -> Vec<(String, Self)> {
        let bounds = [(0, 500), (500, 1000), (1000, 2500), (2500, 5000)];
        let mut presets: Vec<(String, Self)> = bounds
            .iter()
            .map(|&(min, max)| {
                let range = Self::new(Decimal::new(min, 0), Decimal::new(max, 0));
                let label = if min == 0 {
                    format!("Under {}", whole_dollars(range.max))
                } else {
                    format!("{} - {}", whole_dollars(range.min), whole_dollars(range.max))
                };
                (label, range)
            })
            .collect();
        presets.push((
            "Over $5,000".to_string(),
            Self::new(Decimal::new(5000, 0), Decimal::MAX),
        ));
        presets
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(Decimal::ZERO, Self::DEFAULT_MAX)
    }
}

fn whole_dollars(amount: Decimal) -> String {
    let formatted = Price::usd(amount).display();
    formatted
        .strip_suffix(".00")
        .map_or(formatted.clone(), str::to_string)
}

/// Active catalog filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Category ID; empty means all categories.
    pub category: String,
    pub price_range: PriceRange,
    /// Material keywords; a product matches if any keyword appears in any of its materials.
    pub materials: BTreeSet<String>,
    /// Sustainability flags; a product must satisfy every flag.
    pub sustainability: BTreeSet<SustainabilityFlag>,
    pub in_stock_only: bool,
}

impl FilterState {
    /// Apply a partial update. Fields absent from `update` keep their value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPriceRange`] if the merged range has
    /// `min > max`; `self` is left untouched.
    pub fn merge(&self, update: FilterUpdate) -> Result<Self> {
        let merged = Self {
            category: update.category.unwrap_or_else(|| self.category.clone()),
            price_range: update.price_range.unwrap_or(self.price_range),
            materials: update.materials.unwrap_or_else(|| self.materials.clone()),
            sustainability: update
                .sustainability
                .unwrap_or_else(|| self.sustainability.clone()),
            in_stock_only: update.in_stock_only.unwrap_or(self.in_stock_only),
        };

        let PriceRange { min, max } = merged.price_range;
        if min > max {
            return Err(StoreError::InvalidPriceRange { min, max });
        }

        Ok(merged)
    }

    /// Whether any filter narrows the catalog.
    #[must_use]
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// A partial filter update. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterUpdate {
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
    pub materials: Option<BTreeSet<String>>,
    pub sustainability: Option<BTreeSet<SustainabilityFlag>>,
    pub in_stock_only: Option<bool>,
}

impl FilterUpdate {
    /// An update that restores every field to its default.
    #[must_use]
    pub fn reset() -> Self {
        let defaults = FilterState::default();
        Self {
            category: Some(defaults.category),
            price_range: Some(defaults.price_range),
            materials: Some(defaults.materials),
            sustainability: Some(defaults.sustainability),
            in_stock_only: Some(defaults.in_stock_only),
        }
    }

    /// An update that adds `material` if absent from `current`, or removes it if present.
    #[must_use]
    pub fn toggle_material(current: &FilterState, material: &str) -> Self {
        let mut materials = current.materials.clone();
        if !materials.remove(material) {
            materials.insert(material.to_string());
        }
        Self {
            materials: Some(materials),
            ..Self::default()
        }
    }

    /// An update that adds `flag` if absent from `current`, or removes it if present.
    #[must_use]
    pub fn toggle_sustainability(current: &FilterState, flag: SustainabilityFlag) -> Self {
        let mut flags = current.sustainability.clone();
        if !flags.remove(&flag) {
            flags.insert(flag);
        }
        Self {
            sustainability: Some(flags),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn materials(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_merge_keeps_omitted_fields() {
        let start = FilterState {
            price_range: PriceRange::new(Decimal::new(500, 0), Decimal::new(1000, 0)),
            ..FilterState::default()
        };

        let gold = start
            .merge(FilterUpdate {
                materials: Some(materials(&["gold"])),
                ..FilterUpdate::default()
            })
            .unwrap();
        let in_stock = gold
            .merge(FilterUpdate {
                in_stock_only: Some(true),
                ..FilterUpdate::default()
            })
            .unwrap();

        assert_eq!(in_stock.materials, materials(&["gold"]));
        assert!(in_stock.in_stock_only);
        assert_eq!(in_stock.price_range, start.price_range);
        assert_eq!(in_stock.category, "");
    }

    #[test]
    fn test_merge_rejects_inverted_range() {
        let err = FilterState::default()
            .merge(FilterUpdate {
                price_range: Some(PriceRange::new(Decimal::new(900, 0), Decimal::new(100, 0))),
                ..FilterUpdate::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidPriceRange { .. }));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let busy = FilterState {
            category: "rings".to_string(),
            in_stock_only: true,
            ..FilterState::default()
        };
        assert!(busy.is_active());
        let cleared = busy.merge(FilterUpdate::reset()).unwrap();
        assert_eq!(cleared, FilterState::default());
        assert!(!cleared.is_active());
    }

    #[test]
    fn test_toggles() {
        let state = FilterState::default();
        let on = state.merge(FilterUpdate::toggle_material(&state, "Pearl")).unwrap();
        assert!(on.materials.contains("Pearl"));
        let off = on.merge(FilterUpdate::toggle_material(&on, "Pearl")).unwrap();
        assert!(off.materials.is_empty());

        let flagged = state
            .merge(FilterUpdate::toggle_sustainability(
                &state,
                SustainabilityFlag::CarbonNeutral,
            ))
            .unwrap();
        assert!(flagged.sustainability.contains(&SustainabilityFlag::CarbonNeutral));
    }

    #[test]
    fn test_update_deserializes_partial_json() {
        let update: FilterUpdate =
            serde_json::from_str(r#"{"inStockOnly": true, "materials": ["gold"]}"#).unwrap();
        assert_eq!(update.in_stock_only, Some(true));
        assert!(update.category.is_none());
        assert!(update.price_range.is_none());
    }

    #[test]
    fn test_presets() {
        let presets = PriceRange::presets();
        assert_eq!(presets.len(), 5);
        assert_eq!(presets[0].0, "Under $500");
        assert_eq!(presets[1].0, "$500 - $1,000");
        assert!(presets[4].1.contains(Decimal::new(1_000_000, 0)));
    }
}
