//! Sustainability guide listings.

use jewelcraft_storefront::catalog::Catalog;
use jewelcraft_storefront::error::StoreError;
use jewelcraft_storefront::sustainability::{self, ArticleCategory, Certification, SustainabilityGuide};
use serde::Serialize;
use tracing::info;

use crate::output::print_json;

/// # Errors
///
/// Returns an error if output fails.
pub fn overview() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seeded();
    print_json(&SustainabilityGuide::new(&catalog))
}

/// All certifications, or the one with the given id.
///
/// # Errors
///
/// Returns an error if the id is unknown or output fails.
pub fn certifications(id: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let all = sustainability::certifications();
    match id {
        Some(id) => print_json(&find_certification(all, id)?),
        None => print_json(&all),
    }
}

fn find_certification(all: Vec<Certification>, id: &str) -> Result<Certification, StoreError> {
    let wanted = id.trim().to_lowercase();
    all.into_iter()
        .find(|c| c.id == wanted)
        .ok_or_else(|| StoreError::unknown("certification", id))
}

/// # Errors
///
/// Returns an error if output fails.
pub fn sourcing() -> Result<(), Box<dyn std::error::Error>> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sourcing {
        metals: sustainability::MetalSourcing,
        gemstones: sustainability::GemstoneEthics,
    }

    print_json(&Sourcing {
        metals: sustainability::metal_sourcing(),
        gemstones: sustainability::gemstone_ethics(),
    })
}

/// # Errors
///
/// Returns an error if output fails.
pub fn articles(category: Option<ArticleCategory>) -> Result<(), Box<dyn std::error::Error>> {
    let articles = sustainability::articles_in(category);
    info!(matched = articles.len(), "articles listed");
    print_json(&articles)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_find_certification_ignores_case() {
        let cert = find_certification(sustainability::certifications(), " SPI ").unwrap();
        assert_eq!(cert.name, "Sustainable Pearl Initiative");
    }

    #[test]
    fn test_unknown_certification() {
        let err = find_certification(sustainability::certifications(), "iso").unwrap_err();
        assert_eq!(err, StoreError::unknown("certification", "iso"));
    }
}
