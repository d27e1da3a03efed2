//! Error types for the interactive shop session.

use thiserror::Error;

/// Errors that can occur while serving a customer.
///
/// The two input variants are recovered inside the session loop by printing
/// their message. Only [`ShopError::Io`] ends a session early.
#[derive(Debug, Error)]
pub enum ShopError {
    /// The main menu input is not one of the listed options.
    #[error("Invalid option. Please try again.")]
    InvalidMenuChoice(String),

    /// The item number is not an integer or is outside the menu.
    #[error("Invalid selection.")]
    InvalidOrderSelection(String),

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
