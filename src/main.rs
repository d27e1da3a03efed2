//! # Coffee Shop
//!
//! Interactive ordering console. Reads commands from stdin, writes the menu,
//! confirmations and order listings to stdout, and logs to stderr.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use coffee_shop::runtime::{setup_tracing, CoffeeShop};
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    setup_tracing();

    let mut shop = CoffeeShop::new().map_err(|e| e.to_string())?;

    let input = BufReader::new(tokio::io::stdin());
    if let Err(e) = shop.run(input, tokio::io::stdout()).await {
        error!(error = %e, "Session aborted");
        return Err(e.to_string());
    }

    info!("Application completed successfully");
    Ok(())
}
