//! Orders and their identifiers.

use crate::model::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Represents an order placed during the current session.
///
/// An order is created by [`OrderLedger::place`](crate::ledger::OrderLedger::place)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub item: MenuItem,
}

impl Order {
    /// Creates a new Order for `item`.
    ///
    /// # Arguments
    /// * `id` - Sequence number assigned by the ledger
    /// * `item` - Copy of the catalog entry that was chosen
    pub fn new(id: OrderId, item: MenuItem) -> Self {
        Self { id, item }
    }
}

/// Ledger line: `- {name} (${price})`.
impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "- {} (${})", self.item.name, self.item.price)
    }
}
