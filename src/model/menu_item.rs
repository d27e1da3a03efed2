//! A purchasable item on the menu.
//!
//! Items are created once, when the [`MenuCatalog`](crate::catalog::MenuCatalog)
//! is built, and never change afterwards. Orders keep their own copy.
use crate::catalog::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;

/// Currency amount in dollars. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64")]
pub struct Price(f64);

impl TryFrom<f64> for Price {
    type Error = CatalogError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl Price {
    /// Validates and wraps a raw amount.
    pub fn new(amount: f64) -> Result<Self, CatalogError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CatalogError::InvalidPrice(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

/// Shortest round-trip form: `3`, `4.5`, `4.75`.
impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}

/// A named, priced entry on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MenuItemRaw")]
pub struct MenuItem {
    pub name: String,
    pub price: Price,
}

/// Wire shape of [`MenuItem`] before validation.
#[derive(Deserialize)]
struct MenuItemRaw {
    name: String,
    price: f64,
}

impl TryFrom<MenuItemRaw> for MenuItem {
    type Error = CatalogError;

    fn try_from(raw: MenuItemRaw) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.price)
    }
}

impl MenuItem {
    /// Creates a new MenuItem.
    ///
    /// # Arguments
    /// * `name` - Display name, must not be blank
    /// * `price` - Price in dollars, must be finite and non-negative
    ///
    /// # Errors
    /// [`CatalogError::EmptyName`] or [`CatalogError::InvalidPrice`].
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        Ok(Self {
            name,
            price: Price::new(price)?,
        })
    }
}
