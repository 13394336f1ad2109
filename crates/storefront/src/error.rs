//! Unified error handling for the storefront.
//!
//! Every fallible store intent and domain operation returns
//! `Result<T, StoreError>`. A rejected intent never changes state.
//! References to entities that no longer exist (a removed cart line, an
//! already dismissed notification) are not errors and never reach this type.

use jewelcraft_core::{EmailError, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Cart quantity below zero.
    #[error("Invalid quantity {quantity} for cart line {line_id}")]
    InvalidQuantity { line_id: String, quantity: i64 },

    /// Quantity above the per-line maximum.
    #[error("Quantity overflow for line {0}")]
    QuantityOverflow(String),

    /// Unit price below zero or above the accepted maximum.
    #[error("Invalid unit price {0}")]
    InvalidUnitPrice(Decimal),

    /// Price filter with `min > max`.
    #[error("Invalid price range: min {min} exceeds max {max}")]
    InvalidPriceRange { min: Decimal, max: Decimal },

    /// Product not present in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// A string did not name a known value of a closed set (view, tier, sort...).
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    /// Contact email failed validation.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// Expert review submission is incomplete.
    #[error("Invalid review request: {0}")]
    InvalidReview(String),

    /// Promo code not recognised.
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),
}

impl StoreError {
    /// Shorthand for [`StoreError::UnknownValue`].
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::InvalidQuantity {
            line_id: "1-1".to_string(),
            quantity: -2,
        };
        assert_eq!(err.to_string(), "Invalid quantity -2 for cart line 1-1");

        let err = StoreError::unknown("view", "checkout-v2");
        assert_eq!(err.to_string(), "Unknown view: checkout-v2");

        let err = StoreError::InvalidPriceRange {
            min: Decimal::new(900, 0),
            max: Decimal::new(100, 0),
        };
        assert_eq!(err.to_string(), "Invalid price range: min 900 exceeds max 100");
    }

    #[test]
    fn test_amount_errors_display() {
        let err = StoreError::InvalidUnitPrice(Decimal::new(-5, 0));
        assert_eq!(err.to_string(), "Invalid unit price -5");

        let err = StoreError::QuantityOverflow("3-1".to_string());
        assert_eq!(err.to_string(), "Quantity overflow for line 3-1");
    }

    #[test]
    fn test_email_error_converts() {
        let err: StoreError = EmailError::Empty.into();
        assert!(matches!(err, StoreError::Email(EmailError::Empty)));
    }
}
