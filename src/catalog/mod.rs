//! The fixed, ordered list of items the shop sells.

pub mod error;

pub use error::*;

use crate::model::MenuItem;

/// Reference menu offered at startup.
const REFERENCE_MENU: [(&str, f64); 5] = [
    ("Espresso", 3.00),
    ("Cappuccino", 4.50),
    ("Latte", 4.00),
    ("Mocha", 4.75),
    ("Tea", 2.50),
];

/// Ordered, read-only menu. Display index `n` always maps to position `n - 1`.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Builds the five-item coffee menu.
    pub fn reference() -> Result<Self, CatalogError> {
        let items = REFERENCE_MENU
            .iter()
            .map(|(name, price)| MenuItem::new(*name, *price))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(items))
    }

    /// All items in display order.
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 0-based lookup.
    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    /// Resolves a 1-based selection index typed by the customer.
    /// `None` when `selection` is outside `1..=len()`.
    pub fn select(&self, selection: i64) -> Option<&MenuItem> {
        usize::try_from(selection)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.get(index))
    }

    /// Numbered listing: a `Menu:` header and one `{index}. {name} - ${price}` line per item.
    pub fn render(&self) -> String {
        let lines: String = self
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| format!("{}. {} - ${}\n", position + 1, item.name, item.price))
            .collect();
        format!("Menu:\n{lines}")
    }
}
