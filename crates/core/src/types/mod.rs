//! Core types for Smart Jewel Craft.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod email;
pub mod id;
pub mod price;

pub use catalog::*;
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, Price};
