//! Read-only product catalog.
//!
//! Holds the seeded products, categories, materials, and sellers, and answers
//! the listing queries used across the storefront.

mod data;
mod filter;

pub use filter::SortOrder;

use jewelcraft_core::{Category, Material, Product, ProductId, Seller, SellerId};
use rust_decimal::Decimal;

use crate::error::{Result, StoreError};

const FEATURED_LIMIT: usize = 6;

/// Minimum rating for the home page's featured list (4.7).
const FEATURED_MIN_RATING: Decimal = Decimal::from_parts(47, 0, 0, false, 1);

/// The product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    materials: Vec<Material>,
    sellers: Vec<Seller>,
}

impl Catalog {
    /// Catalog with the storefront's built-in records.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(
            data::products(),
            data::categories(),
            data::materials(),
            data::sellers(),
        )
    }

    #[must_use]
    pub const fn new(
        products: Vec<Product>,
        categories: Vec<Category>,
        materials: Vec<Material>,
        sellers: Vec<Seller>,
    ) -> Self {
        Self {
            products,
            categories,
            materials,
            sellers,
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[must_use]
    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::product`], for callers that need the product to exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if there is no such product.
    pub fn require_product(&self, id: ProductId) -> Result<&Product> {
        self.product(id).ok_or(StoreError::UnknownProduct(id))
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    #[must_use]
    pub fn seller(&self, id: SellerId) -> Option<&Seller> {
        self.sellers.iter().find(|s| s.id == id)
    }

    /// Highest-rated in-stock products, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.in_stock && p.rating >= FEATURED_MIN_RATING)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// Products made with recycled metal or ethically sourced stones.
    #[must_use]
    pub fn sustainable(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.sustainability.recycled_metal || p.sustainability.ethical_stones)
            .collect()
    }

    /// Case-insensitive match against name, materials, and seller name.
    ///
    /// An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.materials
                        .iter()
                        .any(|m| m.to_lowercase().contains(&needle))
                    || p.seller.name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    #[must_use]
    pub fn by_seller(&self, seller: SellerId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.seller.id == seller)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
