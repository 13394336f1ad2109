//! CLI command implementations.

pub mod catalog;
pub mod pricing;
pub mod review;
pub mod session;
pub mod style;
pub mod sustainability;
