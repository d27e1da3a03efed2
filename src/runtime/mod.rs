//! Runtime wiring and observability.
//!
//! - [`CoffeeShop`] - Owns the catalog and the ledger and runs sessions against them
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod coffee_shop;
pub mod tracing;

pub use coffee_shop::*;
pub use tracing::*;
