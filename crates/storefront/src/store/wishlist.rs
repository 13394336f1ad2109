//! Wishlist with set semantics over product IDs.

use jewelcraft_core::{ProductId, ProductSnapshot};
use serde::{Deserialize, Serialize};

/// Saved products in the order they were added. Each product appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    entries: Vec<ProductSnapshot>,
}

impl Wishlist {
    #[must_use]
    pub fn entries(&self) -> &[ProductSnapshot] {
        &self.entries
    }

    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.entries.iter().any(|entry| entry.id == product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a product. Returns `false` if it was already saved.
    pub fn add(&mut self, snapshot: ProductSnapshot) -> bool {
        if self.contains(snapshot.id) {
            return false;
        }
        self.entries.push(snapshot);
        true
    }

    /// Remove a product. Returns `false` if it was not saved.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != product_id);
        self.entries.len() != before
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn snapshot(id: i32, name: &str) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::new(100, 0),
            materials: Vec::new(),
            in_stock: true,
        }
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut wishlist = Wishlist::default();
        assert!(wishlist.add(snapshot(1, "Ring")));
        assert!(!wishlist.add(snapshot(1, "Ring (renamed)")));
        assert_eq!(wishlist.len(), 1);
        assert_eq!(wishlist.entries()[0].name, "Ring");
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut wishlist = Wishlist::default();
        wishlist.add(snapshot(3, "Earrings"));
        wishlist.add(snapshot(1, "Ring"));
        wishlist.add(snapshot(2, "Bracelet"));
        assert!(wishlist.remove(ProductId::new(1)));
        assert!(!wishlist.remove(ProductId::new(1)));

        let ids: Vec<i32> = wishlist.entries().iter().map(|e| e.id.as_i32()).collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
