//! Pricing commands.

use std::path::Path;
use std::str::FromStr;

use jewelcraft_storefront::catalog::Catalog;
use jewelcraft_storefront::config::StorefrontConfig;
use jewelcraft_storefront::pricing::{
    CustomDesign, LineAmount, PricingEngine, ShippingOptions, price_range,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::output::print_json;

/// Errors parsing a `PRICE:QUANTITY` argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineArgError {
    #[error("expected PRICE:QUANTITY, got {0:?}")]
    Format(String),
    #[error("invalid price {0:?}")]
    Price(String),
    #[error("invalid quantity {0:?}")]
    Quantity(String),
}

/// One `--item PRICE:QUANTITY` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineArg(pub LineAmount);

impl FromStr for LineArg {
    type Err = LineArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (price, quantity) = s
            .split_once(':')
            .ok_or_else(|| LineArgError::Format(s.to_string()))?;
        let unit_price = Decimal::from_str(price.trim())
            .map_err(|_| LineArgError::Price(price.to_string()))?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| LineArgError::Quantity(quantity.to_string()))?;
        Ok(Self(LineAmount {
            unit_price,
            quantity,
        }))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteOutput {
    quote: jewelcraft_storefront::pricing::Quote,
    estimate: jewelcraft_storefront::pricing::PriceEstimate,
}

/// Quote the design in a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or output fails.
#[instrument(skip(path, config), fields(path = %path.display()))]
pub async fn quote(path: &Path, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }
    let content = tokio::fs::read_to_string(path).await?;
    let design: CustomDesign = serde_yaml::from_str(&content)?;

    let catalog = Catalog::seeded();
    let quote = PricingEngine::new(&catalog, config.pricing).quote(&design);
    info!(total = %quote.total, "design quoted");

    print_json(&QuoteOutput {
        estimate: price_range(quote.total),
        quote,
    })
}

/// Print billing totals.
///
/// # Errors
///
/// Returns an error if output fails.
#[instrument(skip(items, config), fields(lines = items.len()))]
pub fn order_total(
    items: &[LineArg],
    state: Option<String>,
    expedited: bool,
    international: bool,
    config: &StorefrontConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let lines: Vec<LineAmount> = items.iter().map(|item| item.0).collect();
    let options = ShippingOptions {
        expedited,
        international,
        state,
    };
    let catalog = Catalog::seeded();
    let order = PricingEngine::new(&catalog, config.pricing).order_total(&lines, &options)?;
    print_json(&order)
}
