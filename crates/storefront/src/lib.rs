//! Smart Jewel Craft storefront library.
//!
//! The [`StoreHandle`](state::StoreHandle) owns all cross-view session state
//! and applies [`Intent`](store::Intent)s to it one at a time. The catalog,
//! pricing, style, review, and sustainability modules are read-only
//! collaborators the views consult alongside the store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;
pub mod reviews;
pub mod state;
pub mod store;
pub mod style;
pub mod sustainability;
