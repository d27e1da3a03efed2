//! Top-level menu commands.

use super::ShopError;
use std::fmt::Display;
use std::str::FromStr;

/// The four options offered on every pass through the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowMenu,
    PlaceOrder,
    ViewOrders,
    Exit,
}

impl Command {
    /// Menu order.
    pub const ALL: [Command; 4] = [
        Command::ShowMenu,
        Command::PlaceOrder,
        Command::ViewOrders,
        Command::Exit,
    ];

    /// The text a customer types to pick this command.
    pub fn key(self) -> &'static str {
        match self {
            Command::ShowMenu => "1",
            Command::PlaceOrder => "2",
            Command::ViewOrders => "3",
            Command::Exit => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::ShowMenu => "Show Menu",
            Command::PlaceOrder => "Place Order",
            Command::ViewOrders => "View Orders",
            Command::Exit => "Exit",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

impl FromStr for Command {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Command::ALL
            .into_iter()
            .find(|command| command.key() == key)
            .ok_or_else(|| ShopError::InvalidMenuChoice(key.to_string()))
    }
}
