//! Category listing: filter state applied to the catalog, then sorted.

use jewelcraft_core::Product;
use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::error::StoreError;
use crate::store::FilterState;

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
    /// Highest product ID first.
    Newest,
}

impl SortOrder {
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
        Self::Newest,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Highest Rated",
            Self::Newest => "Newest",
        }
    }

    fn sort(self, products: &mut [&Product]) {
        match self {
            Self::Featured => {}
            Self::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
            Self::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| StoreError::unknown("sort order", s))
    }
}

impl Catalog {
    /// Products matching `filters` (and `subcategory`, if given), in `sort` order.
    ///
    /// Materials match when any filter keyword is a case-insensitive substring
    /// of any product material. Every sustainability flag must hold.
    #[must_use]
    pub fn filter(
        &self,
        filters: &FilterState,
        subcategory: Option<&str>,
        sort: SortOrder,
    ) -> Vec<&Product> {
        let keywords: Vec<String> = filters.materials.iter().map(|m| m.to_lowercase()).collect();

        let mut matched: Vec<&Product> = self
            .products()
            .iter()
            .filter(|p| filters.category.is_empty() || p.category == filters.category)
            .filter(|p| subcategory.is_none_or(|sub| sub.is_empty() || p.subcategory == sub))
            .filter(|p| filters.price_range.contains(p.price))
            .filter(|p| {
                keywords.is_empty()
                    || keywords.iter().any(|keyword| {
                        p.materials
                            .iter()
                            .any(|m| m.to_lowercase().contains(keyword.as_str()))
                    })
            })
            .filter(|p| {
                filters
                    .sustainability
                    .iter()
                    .all(|flag| p.sustainability.satisfies(*flag))
            })
            .filter(|p| !filters.in_stock_only || p.in_stock)
            .collect();

        sort.sort(&mut matched);
        matched
    }
}
