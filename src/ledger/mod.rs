//! Append-only record of the orders placed during a session.

use crate::model::{MenuItem, Order, OrderId, Price};
use tracing::info;

/// Orders in the order they were placed. Nothing is ever removed.
#[derive(Debug, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
    next_id: u32,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an order for `item` and returns it.
    ///
    /// Performs no validation; the caller resolves the selection first.
    pub fn place(&mut self, item: MenuItem) -> &Order {
        self.next_id += 1;
        let order = Order::new(OrderId(self.next_id), item);
        info!(order_id = %order.id, item = %order.item.name, price = %order.item.price, size = self.orders.len() + 1, "Order placed");
        self.orders.push(order);
        &self.orders[self.orders.len() - 1]
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Sum of the prices of every placed order.
    pub fn total(&self) -> Price {
        self.orders.iter().map(|o| o.item.price).sum()
    }

    /// `No orders placed yet.` or an `Orders:` header followed by one line per order.
    pub fn render(&self) -> String {
        if self.orders.is_empty() {
            return String::from("No orders placed yet.\n");
        }
        let lines: String = self.orders.iter().map(|order| format!("{order}\n")).collect();
        format!("Orders:\n{lines}")
    }
}
