//! # Coffee Shop
//!
//! > **A console ordering simulator.**
//!
//! The shop presents a fixed menu, accepts numeric selections, records orders in
//! memory and lists them back. Everything lives for one process and is discarded
//! on exit.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain values: [`MenuItem`](model::MenuItem), [`Price`](model::Price),
//! [`Order`](model::Order), [`OrderId`](model::OrderId).
//!
//! ### 2. The Services ([`catalog`], [`ledger`])
//! - [`MenuCatalog`](catalog::MenuCatalog): ordered, read-only menu with a 1-indexed listing.
//! - [`OrderLedger`](ledger::OrderLedger): append-only record of placed orders.
//!
//! ### 3. The Session ([`shop`])
//! [`ShopController`](shop::ShopController) runs the read-dispatch-act loop.
//! Input is parsed into a [`Command`](shop::Command); each variant maps to one handler.
//! Invalid input is reported as a [`ShopError`](shop::ShopError) message and the loop continues.
//!
//! ### 4. The Wiring ([`runtime`])
//! [`CoffeeShop`](runtime::CoffeeShop) owns both services and lends them to the
//! controller. [`setup_tracing`](runtime::setup_tracing) sends logs to stderr.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run with info logs on stderr
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog;
pub mod ledger;
pub mod model;
pub mod runtime;
pub mod shop;
