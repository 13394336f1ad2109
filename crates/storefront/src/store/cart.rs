//! Shopping cart lines and merge-or-append semantics.
//!
//! A line is identified by its product plus its customization map. Adding the
//! same pair again bumps the quantity of the existing line. Quantities are
//! always at least 1: setting a line to 0 removes it.

use std::collections::BTreeMap;

use jewelcraft_core::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Most units a single cart line can hold.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Highest unit price the cart accepts (1,000,000).
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Reject unit prices outside `0..=MAX_UNIT_PRICE`.
///
/// Together with [`MAX_LINE_QUANTITY`] this keeps line totals and subtotals
/// far from the `Decimal` range.
///
/// # Errors
///
/// Returns [`StoreError::InvalidUnitPrice`] for an out-of-range price.
pub fn check_unit_price(price: Decimal) -> Result<()> {
    if price < Decimal::ZERO || price > MAX_UNIT_PRICE {
        return Err(StoreError::InvalidUnitPrice(price));
    }
    Ok(())
}

/// Identifier of a cart line, generated when the line is created.
///
/// Formatted as `{product_id}-{sequence}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLineId(String);

impl CartLineId {
    fn generate(product_id: ProductId, sequence: u64) -> Self {
        Self(format!("{product_id}-{sequence}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CartLineId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for CartLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An item to add to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    #[serde(default)]
    pub name: String,
    /// Price per unit, captured now and never refreshed.
    pub unit_price: Decimal,
    #[serde(default)]
    pub materials: Vec<String>,
    /// Customization choices (engraving text, ring size...). Ordered, so
    /// equality does not depend on insertion order.
    #[serde(default)]
    pub customizations: BTreeMap<String, String>,
}

impl CartItem {
    /// An uncustomized item at the product's current list price.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            materials: product.materials.clone(),
            customizations: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_customization(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.customizations.insert(key.into(), value.into());
        self
    }
}

/// One row in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: CartLineId,
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub materials: Vec<String>,
    pub customizations: BTreeMap<String, String>,
}

impl CartLine {
    fn matches(&self, item: &CartItem) -> bool {
        self.product_id == item.product_id && self.customizations == item.customizations
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// What a quantity change did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Updated,
    Removed,
    /// No line with that ID.
    Missing,
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
    /// Sequence for the next generated line ID. Never reused, even after removal.
    next_sequence: u64,
}

impl Cart {
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, id: &CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Merge `item` into a matching line or append a new one. Returns the
    /// ID of the line that now holds it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUnitPrice`] for a negative price or one
    /// above [`MAX_UNIT_PRICE`], and [`StoreError::QuantityOverflow`] if the
    /// matching line is already at [`MAX_LINE_QUANTITY`].
    pub fn add(&mut self, item: CartItem) -> Result<CartLineId> {
        check_unit_price(item.unit_price)?;

        if let Some(line) = self.lines.iter_mut().find(|line| line.matches(&item)) {
            if line.quantity >= MAX_LINE_QUANTITY {
                return Err(StoreError::QuantityOverflow(line.id.to_string()));
            }
            line.quantity += 1;
            return Ok(line.id.clone());
        }

        self.next_sequence += 1;
        let id = CartLineId::generate(item.product_id, self.next_sequence);
        self.lines.push(CartLine {
            id: id.clone(),
            product_id: item.product_id,
            name: item.name,
            quantity: 1,
            unit_price: item.unit_price,
            materials: item.materials,
            customizations: item.customizations,
        });
        Ok(id)
    }

    /// Remove a line. Returns `false` if no such line exists.
    pub fn remove(&mut self, id: &CartLineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.id != id);
        self.lines.len() != before
    }

    /// Set a line's quantity. Zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidQuantity`] for negative quantities and
    /// [`StoreError::QuantityOverflow`] for quantities above
    /// [`MAX_LINE_QUANTITY`].
    pub fn set_quantity(&mut self, id: &CartLineId, quantity: i64) -> Result<QuantityChange> {
        if quantity < 0 {
            return Err(StoreError::InvalidQuantity {
                line_id: id.to_string(),
                quantity,
            });
        }
        let Some(line) = self.lines.iter_mut().find(|line| &line.id == id) else {
            return Ok(QuantityChange::Missing);
        };
        if quantity == 0 {
            self.remove(id);
            return Ok(QuantityChange::Removed);
        }
        line.quantity = u32::try_from(quantity)
            .ok()
            .filter(|quantity| *quantity <= MAX_LINE_QUANTITY)
            .ok_or_else(|| StoreError::QuantityOverflow(id.to_string()))?;
        Ok(QuantityChange::Updated)
    }

    /// Remove every line. The ID sequence keeps counting.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
