//! Integration tests for the Smart Jewel Craft storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jewelcraft-integration-tests
//! ```
//!
//! # Test Files
//!
//! - `store_cart` - cart, wishlist, and filter intents through the handle
//! - `store_notifications` - notification lifecycle on a paused clock
//! - `storefront_flows` - catalog, pricing, style, and review flows feeding the store
//! - `intent_scripts` - intents decoded from JSON and YAML
//!
//! The helpers below build stores and cart items from the seeded catalog.

use std::collections::BTreeMap;

use jewelcraft_core::ProductId;
use jewelcraft_storefront::catalog::Catalog;
use jewelcraft_storefront::config::StorefrontConfig;
use jewelcraft_storefront::state::StoreHandle;
use jewelcraft_storefront::store::{AppState, CartItem, CartLineId};

/// A store with default configuration.
#[must_use]
pub fn store() -> StoreHandle {
    StoreHandle::new(StorefrontConfig::default())
}

/// Cart item for a seeded product at its list price.
///
/// # Panics
///
/// Panics if the product is not in the seeded catalog.
#[must_use]
#[allow(clippy::expect_used)]
pub fn item(product: i32) -> CartItem {
    let catalog = Catalog::seeded();
    let product = catalog
        .product(ProductId::new(product))
        .expect("product is seeded");
    CartItem::from_product(product)
}

/// Like [`item`], with customizations given as `(key, value)` pairs.
#[must_use]
pub fn customized(product: i32, pairs: &[(&str, &str)]) -> CartItem {
    let mut item = item(product);
    item.customizations = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect::<BTreeMap<_, _>>();
    item
}

/// ID of the only cart line.
///
/// # Panics
///
/// Panics unless the cart has exactly one line.
#[must_use]
#[allow(clippy::indexing_slicing)]
pub fn only_line(state: &AppState) -> CartLineId {
    let lines = state.cart().lines();
    assert_eq!(lines.len(), 1, "expected exactly one cart line");
    lines[0].id.clone()
}

/// Yield enough times for woken timer tasks to run.
pub async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}
