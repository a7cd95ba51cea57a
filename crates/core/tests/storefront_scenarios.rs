//! Shopping scenarios against the built-in cookie catalog.

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use sweet_treats::{
    fixtures::sweet_treats,
    products::ProductId,
    receipt::Receipt,
    storefront::{CartAction, Storefront, StorefrontError},
};

const CHOCOLATE_CHIP: ProductId = ProductId::new(1);
const SUGAR_COOKIE: ProductId = ProductId::new(5);
const SNICKERDOODLE: ProductId = ProductId::new(6);

fn storefront() -> TestResult<Storefront<'static>> {
    Ok(Storefront::new(sweet_treats()?))
}

fn lines(storefront: &Storefront<'_>) -> Vec<(String, u32)> {
    storefront
        .cart()
        .iter()
        .map(|line| (line.product().name.clone(), line.quantity()))
        .collect()
}

#[test]
fn single_chocolate_chip() -> TestResult {
    let mut storefront = storefront()?;

    storefront.add_to_cart(CHOCOLATE_CHIP)?;

    assert_eq!(storefront.total_item_count(), 1);
    assert_eq!(storefront.total_price(), Money::from_minor(1299, USD));
    assert_eq!(storefront.total_price().to_string(), "$12.99");

    Ok(())
}

#[test]
fn chocolate_chip_twice_is_one_line() -> TestResult {
    let mut storefront = storefront()?;

    storefront.add_to_cart(CHOCOLATE_CHIP)?;
    storefront.add_to_cart(CHOCOLATE_CHIP)?;

    assert_eq!(lines(&storefront), vec![("Chocolate Chip".to_string(), 2)]);
    assert_eq!(storefront.total_price(), Money::from_minor(2598, USD));

    Ok(())
}

#[test]
fn removing_chocolate_chip_leaves_snickerdoodle() -> TestResult {
    let mut storefront = storefront()?;

    storefront.add_to_cart(CHOCOLATE_CHIP)?;
    storefront.add_to_cart(SNICKERDOODLE)?;
    storefront.remove_from_cart(CHOCOLATE_CHIP);

    assert_eq!(lines(&storefront), vec![("Snickerdoodle".to_string(), 1)]);

    Ok(())
}

#[test]
fn add_then_remove_snickerdoodle_empties_cart() -> TestResult {
    let mut storefront = storefront()?;

    storefront.add_to_cart(SNICKERDOODLE)?;
    storefront.remove_from_cart(SNICKERDOODLE);

    assert!(storefront.cart().is_empty());
    assert_eq!(storefront.total_item_count(), 0);
    assert_eq!(storefront.total_price().to_string(), "$0.00");

    Ok(())
}

#[test]
fn remove_from_empty_cart_is_noop() -> TestResult {
    let mut storefront = storefront()?;

    assert!(!storefront.remove_from_cart(CHOCOLATE_CHIP));
    assert!(storefront.cart().is_empty());

    Ok(())
}

#[test]
fn unknown_product_is_rejected_without_changing_cart() -> TestResult {
    let mut storefront = storefront()?;

    storefront.add_to_cart(SUGAR_COOKIE)?;

    let result = storefront.add_to_cart(ProductId::new(7));

    assert_eq!(
        result,
        Err(StorefrontError::UnknownProduct(ProductId::new(7)))
    );
    assert_eq!(lines(&storefront), vec![("Sugar Cookie".to_string(), 1)]);

    Ok(())
}

#[test]
fn cart_panel_starts_closed_and_toggles() -> TestResult {
    let mut storefront = storefront()?;

    assert!(!storefront.is_cart_visible());
    assert!(storefront.toggle_cart_visibility());
    assert!(storefront.is_cart_visible());
    assert!(!storefront.toggle_cart_visibility());

    storefront.toggle_cart_visibility();
    storefront.close_cart();

    assert!(!storefront.is_cart_visible());

    Ok(())
}

#[test]
fn toggling_panel_leaves_cart_untouched() -> TestResult {
    let mut storefront = storefront()?;

    storefront.add_to_cart(CHOCOLATE_CHIP)?;
    let before = storefront.cart().clone();

    storefront.toggle_cart_visibility();

    assert_eq!(storefront.cart(), &before);

    Ok(())
}

#[test]
fn apply_replays_parsed_actions() -> TestResult {
    let mut storefront = storefront()?;

    for action in ["add:1", "add:6", "add:1", "remove:1", "remove:3", "toggle"] {
        storefront.apply(action.parse::<CartAction>()?)?;
    }

    assert_eq!(
        lines(&storefront),
        vec![
            ("Chocolate Chip".to_string(), 1),
            ("Snickerdoodle".to_string(), 1),
        ]
    );
    assert!(storefront.is_cart_visible());

    Ok(())
}

#[test]
fn receipt_of_session() -> TestResult {
    let mut storefront = storefront()?;

    storefront.add_to_cart(SUGAR_COOKIE)?;
    storefront.add_to_cart(SUGAR_COOKIE)?;
    storefront.add_to_cart(CHOCOLATE_CHIP)?;

    let mut out = Vec::new();
    Receipt::from_cart(storefront.cart()).write_to(&mut out)?;
    let text = String::from_utf8(out)?;

    assert!(text.contains("Sugar Cookie"));
    assert!(text.contains("$21.98"));
    assert!(text.contains("Items: 3 items"));
    assert!(text.contains("Total: $34.97"));

    Ok(())
}
