//! The read-dispatch-act loop that serves one customer session.

use super::{Command, Console, ShopError};
use crate::catalog::MenuCatalog;
use crate::ledger::OrderLedger;
use crate::model::MenuItem;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, instrument, warn};

pub const WELCOME: &str = "Welcome to the Coffee Shop!";
pub const FAREWELL: &str = "Thank you for visiting!";
pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const ITEM_PROMPT: &str = "Enter the number of the item you'd like to order: ";

/// Where the session loop stands after handling a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminal,
}

/// Drives a session against a borrowed catalog and ledger.
///
/// The controller owns neither service; both are created once by the caller
/// (see [`CoffeeShop`](crate::runtime::CoffeeShop)) and outlive the session.
pub struct ShopController<'a> {
    catalog: &'a MenuCatalog,
    ledger: &'a mut OrderLedger,
}

impl<'a> ShopController<'a> {
    pub fn new(catalog: &'a MenuCatalog, ledger: &'a mut OrderLedger) -> Self {
        Self { catalog, ledger }
    }

    /// Runs the session until the customer exits or the input ends.
    ///
    /// Invalid input is reported on the console and the loop continues.
    ///
    /// # Errors
    /// Only [`ShopError::Io`], when the console cannot be read or written.
    #[instrument(skip_all)]
    pub async fn start<R, W>(&mut self, console: &mut Console<R, W>) -> Result<(), ShopError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        console.say(WELCOME).await?;

        let mut state = SessionState::Running;
        while state == SessionState::Running {
            self.show_options(console).await?;
            state = match console.read_line().await? {
                None => {
                    debug!("Input closed at main menu");
                    self.exit(console).await?
                }
                Some(line) => match line.parse::<Command>() {
                    Ok(command) => self.dispatch(command, console).await?,
                    Err(e) => {
                        warn!(input = %line, "Rejected menu choice");
                        console.say(&e.to_string()).await?;
                        SessionState::Running
                    }
                },
            };
        }

        console.flush().await?;
        Ok(())
    }

    async fn dispatch<R, W>(
        &mut self,
        command: Command,
        console: &mut Console<R, W>,
    ) -> Result<SessionState, ShopError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        debug!(?command, "Dispatching command");
        match command {
            Command::ShowMenu => self.show_menu(console).await,
            Command::PlaceOrder => self.place_order(console).await,
            Command::ViewOrders => self.view_orders(console).await,
            Command::Exit => self.exit(console).await,
        }
    }

    async fn show_options<R, W>(&self, console: &mut Console<R, W>) -> Result<(), ShopError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        console.say("").await?;
        for command in Command::ALL {
            console.say(&command.to_string()).await?;
        }
        console.prompt(CHOICE_PROMPT).await?;
        Ok(())
    }

    async fn show_menu<R, W>(&self, console: &mut Console<R, W>) -> Result<SessionState, ShopError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        console.say("").await?;
        console.write(&self.catalog.render()).await?;
        Ok(SessionState::Running)
    }

    async fn view_orders<R, W>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<SessionState, ShopError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        console.say("").await?;
        console.write(&self.ledger.render()).await?;
        Ok(SessionState::Running)
    }

    /// Shows the menu, reads an item number and records the order if it is valid.
    #[instrument(skip_all)]
    async fn place_order<R, W>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionState, ShopError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.show_menu(console).await?;
        console.prompt(ITEM_PROMPT).await?;

        let Some(line) = console.read_line().await? else {
            debug!("Input closed during order selection");
            return self.exit(console).await;
        };

        match self.resolve_selection(&line) {
            Ok(item) => {
                let order = self.ledger.place(item.clone());
                console.say(&format!("You ordered: {}", order.item.name)).await?;
            }
            Err(e) => {
                warn!(input = %line, "Rejected order selection");
                console.say(&e.to_string()).await?;
            }
        }
        Ok(SessionState::Running)
    }

    /// Parses a 1-based item number and looks it up in the catalog.
    fn resolve_selection(&self, line: &str) -> Result<&'a MenuItem, ShopError> {
        let selection = line
            .parse::<i64>()
            .map_err(|_| ShopError::InvalidOrderSelection(line.to_string()))?;
        let catalog: &'a MenuCatalog = self.catalog;
        catalog
            .select(selection)
            .ok_or_else(|| ShopError::InvalidOrderSelection(line.to_string()))
    }

    async fn exit<R, W>(&self, console: &mut Console<R, W>) -> Result<SessionState, ShopError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(orders = self.ledger.len(), "Customer left");
        console.say(FAREWELL).await?;
        Ok(SessionState::Terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(input: &str) -> (String, OrderLedger) {
        let catalog = MenuCatalog::reference().unwrap();
        let mut ledger = OrderLedger::new();
        let mut console = Console::new(input.as_bytes(), Vec::new());
        ShopController::new(&catalog, &mut ledger)
            .start(&mut console)
            .await
            .unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (output, ledger)
    }

    #[tokio::test]
    async fn exit_prints_farewell_and_stops() {
        let (output, ledger) = run("4\n1\n").await;
        assert!(output.starts_with("Welcome to the Coffee Shop!\n\n1. Show Menu\n"));
        assert!(output.ends_with("Enter your choice: Thank you for visiting!\n"));
        assert_eq!(output.matches(CHOICE_PROMPT).count(), 1);
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn end_of_input_is_treated_as_exit() {
        let (output, _) = run("").await;
        assert!(output.ends_with("Thank you for visiting!\n"));

        let (output, ledger) = run("2\n").await;
        assert!(output.ends_with(&format!("{ITEM_PROMPT}Thank you for visiting!\n")));
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn unknown_choice_keeps_running() {
        let (output, _) = run("7\nhello\n4\n").await;
        assert_eq!(output.matches("Invalid option. Please try again.").count(), 2);
        assert_eq!(output.matches(CHOICE_PROMPT).count(), 3);
    }

    #[tokio::test]
    async fn valid_selection_places_order() {
        let (output, ledger) = run("2\n 3 \n4\n").await;
        assert!(output.contains("You ordered: Latte\n"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.orders()[0].item.name, "Latte");
    }

    #[tokio::test]
    async fn invalid_selections_leave_ledger_unchanged() {
        for selection in ["0", "6", "-2", "two", "", "2.5", "99999999999999999999"] {
            let (output, ledger) = run(&format!("2\n{selection}\n4\n")).await;
            assert!(output.contains("Invalid selection.\n"), "input {selection:?}");
            assert!(ledger.is_empty(), "input {selection:?}");
        }
    }

    #[tokio::test]
    async fn invalid_utf8_is_reported_not_fatal() {
        let catalog = MenuCatalog::reference().unwrap();
        let mut ledger = OrderLedger::new();
        let mut console = Console::new(&b"\xff\n2\n\xfe3\n4\n"[..], Vec::new());
        ShopController::new(&catalog, &mut ledger)
            .start(&mut console)
            .await
            .unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Enter your choice: Invalid option. Please try again.\n"));
        assert!(output.contains(&format!("{ITEM_PROMPT}Invalid selection.\n")));
        assert!(output.ends_with("Thank you for visiting!\n"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn resolve_selection_maps_to_zero_based_position() {
        let catalog = MenuCatalog::reference().unwrap();
        let mut ledger = OrderLedger::new();
        let controller = ShopController::new(&catalog, &mut ledger);
        assert_eq!(controller.resolve_selection("2").unwrap().name, "Cappuccino");
        assert!(controller.resolve_selection("6").is_err());
    }
}
