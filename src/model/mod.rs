//! Plain data structures shared by the catalog, the ledger and the controller.

pub mod menu_item;
pub mod order;

pub use menu_item::*;
pub use order::*;
