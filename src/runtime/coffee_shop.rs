use crate::catalog::{CatalogError, MenuCatalog};
use crate::ledger::OrderLedger;
use crate::shop::{Console, ShopController, ShopError};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

/// The process-wide shop state.
///
/// `CoffeeShop` is responsible for:
/// - **Ownership**: Holding the [`MenuCatalog`] and [`OrderLedger`] for the process lifetime
/// - **Wiring**: Lending both to a [`ShopController`] for the duration of a session
///
/// # Example
///
/// ```ignore
/// let mut shop = CoffeeShop::new()?;
/// let input = tokio::io::BufReader::new(tokio::io::stdin());
/// shop.run(input, tokio::io::stdout()).await?;
/// ```
pub struct CoffeeShop {
    catalog: MenuCatalog,
    ledger: OrderLedger,
}

impl CoffeeShop {
    /// Creates a shop serving the reference menu with an empty ledger.
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Self::with_catalog(MenuCatalog::reference()?))
    }

    pub fn with_catalog(catalog: MenuCatalog) -> Self {
        Self {
            catalog,
            ledger: OrderLedger::new(),
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    /// Serves one interactive session over `input`/`output`.
    ///
    /// # Returns
    ///
    /// - `Ok(())` once the customer exits or the input ends
    /// - `Err(ShopError::Io)` if the console fails
    pub async fn run<R, W>(&mut self, input: R, output: W) -> Result<(), ShopError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(items = self.catalog.len(), "Starting session");

        let mut console = Console::new(input, output);
        ShopController::new(&self.catalog, &mut self.ledger)
            .start(&mut console)
            .await?;

        info!(
            orders = self.ledger.len(),
            total = %self.ledger.total(),
            "Session ended"
        );
        Ok(())
    }
}
