//! Expert review listings.

use jewelcraft_storefront::reviews::{AnalysisTier, experts as panel};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::output::print_json;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TierOutput {
    id: AnalysisTier,
    name: &'static str,
    price: Decimal,
    delivery_time: &'static str,
    includes: &'static [&'static str],
}

impl From<AnalysisTier> for TierOutput {
    fn from(tier: AnalysisTier) -> Self {
        Self {
            id: tier,
            name: tier.name(),
            price: tier.price(),
            delivery_time: tier.delivery_time(),
            includes: tier.includes(),
        }
    }
}

/// Print one tier, or all of them.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn tiers(tier: Option<AnalysisTier>) -> Result<(), Box<dyn std::error::Error>> {
    match tier {
        Some(tier) => print_json(&TierOutput::from(tier)),
        None => {
            let all: Vec<TierOutput> = AnalysisTier::ALL.into_iter().map(Into::into).collect();
            print_json(&all)
        }
    }
}

/// # Errors
///
/// Returns an error if output fails.
pub fn experts() -> Result<(), Box<dyn std::error::Error>> {
    print_json(&panel())
}
