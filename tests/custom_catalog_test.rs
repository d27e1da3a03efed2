use coffee_shop::catalog::MenuCatalog;
use coffee_shop::ledger::OrderLedger;
use coffee_shop::model::MenuItem;
use coffee_shop::runtime::CoffeeShop;
use coffee_shop::shop::{Console, ShopController};

fn catalog(items: &[(&str, f64)]) -> MenuCatalog {
    MenuCatalog::new(
        items
            .iter()
            .map(|(name, price)| MenuItem::new(*name, *price).unwrap())
            .collect(),
    )
}

/// Controller driven directly with borrowed services.
#[tokio::test]
async fn test_controller_with_borrowed_services() {
    let catalog = catalog(&[("Bagel", 2.25), ("Muffin", 3.1)]);
    let mut ledger = OrderLedger::new();
    let mut console = Console::new(&b"2\n2\n2\n3\n4\n"[..], Vec::new());

    ShopController::new(&catalog, &mut ledger)
        .start(&mut console)
        .await
        .unwrap();

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("\nMenu:\n1. Bagel - $2.25\n2. Muffin - $3.1\n"));
    assert!(output.contains("You ordered: Muffin\n"));
    // Only two items: "3" is out of range.
    assert!(output.contains("Invalid selection.\n"));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.orders()[0].item, catalog.list()[1]);
}

/// An empty menu still renders its header and rejects every selection.
#[tokio::test]
async fn test_empty_catalog_rejects_all_selections() {
    let mut shop = CoffeeShop::with_catalog(MenuCatalog::default());
    let mut output = Vec::new();

    shop.run(&b"1\n2\n1\n4\n"[..], &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("\nMenu:\n\n1. Show Menu\n"));
    assert!(output.contains("\nMenu:\nEnter the number of the item you'd like to order: Invalid selection.\n"));
    assert!(shop.ledger().is_empty());
    assert!(shop.catalog().is_empty());
}

/// Windows line endings and padding around numbers are accepted.
#[tokio::test]
async fn test_crlf_and_padded_input() {
    let mut shop = CoffeeShop::new().unwrap();
    let mut output = Vec::new();

    shop.run(&b" 2 \r\n\t3\r\n4\r\n"[..], &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("You ordered: Latte\n"));
    assert!(!output.contains("Invalid"));
}

/// Bytes that are not UTF-8 count as an unknown option; the session carries on.
#[tokio::test]
async fn test_invalid_utf8_keeps_session_running() {
    let mut shop = CoffeeShop::new().unwrap();
    let mut output = Vec::new();

    shop.run(&b"\xff\xfe\n2\n2\n4\n"[..], &mut output)
        .await
        .expect("Invalid bytes must not end the session");

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Invalid option. Please try again.\n"));
    assert!(output.contains("You ordered: Cappuccino\n"));
    assert!(output.ends_with("Thank you for visiting!\n"));
    assert_eq!(shop.ledger().len(), 1);
}
