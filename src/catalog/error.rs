//! Error types for building the menu catalog.

use thiserror::Error;

/// Errors that can occur while constructing menu items.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The item name is empty or only whitespace.
    #[error("Menu item name must not be empty")]
    EmptyName,

    /// The price is negative, infinite or NaN.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
}
