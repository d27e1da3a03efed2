//! The interactive session: command parsing, console plumbing and the controller loop.

pub mod command;
pub mod console;
pub mod controller;
pub mod error;

pub use command::*;
pub use console::*;
pub use controller::*;
pub use error::*;
