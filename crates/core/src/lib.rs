//! Smart Jewel Craft Core - Shared types library.
//!
//! This crate provides common types used across all storefront components:
//! - `storefront` - Application state store, catalog, pricing, and style assistant
//! - `cli` - Command-line tools for exploring the catalog and replaying sessions
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clocks, no global state.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, emails, and catalog records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
