//! Storefront
//!
//! A single shopping session: the catalog on display, the shopper's cart and whether the cart
//! panel is open. Every user interaction arrives as one of the session's input events and runs
//! to completion before the next.

use std::{num::NonZeroU32, str::FromStr};

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::Cart,
    catalog::Catalog,
    products::{Product, ProductId},
};

/// Errors raised at the storefront boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorefrontError {
    /// The requested product is not in the catalog.
    #[error("Product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    /// An action string could not be parsed.
    #[error("Invalid cart action '{0}', expected add:<id>, remove:<id> or toggle")]
    InvalidAction(String),
}

/// Input events accepted by a storefront session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a catalog product.
    Add(ProductId),

    /// Remove one unit of a product.
    Remove(ProductId),

    /// Open or close the cart panel.
    ToggleCart,
}

impl FromStr for CartAction {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StorefrontError::InvalidAction(s.to_string());

        match s.trim().split_once(':') {
            None if s.trim() == "toggle" => Ok(CartAction::ToggleCart),
            Some((verb, id)) => {
                let id = id
                    .trim()
                    .parse::<u32>()
                    .map(ProductId::new)
                    .map_err(|_err| invalid())?;

                match verb.trim() {
                    "add" => Ok(CartAction::Add(id)),
                    "remove" => Ok(CartAction::Remove(id)),
                    _ => Err(invalid()),
                }
            }
            None => Err(invalid()),
        }
    }
}

/// Storefront session
#[derive(Debug, Clone)]
pub struct Storefront<'a> {
    catalog: Catalog<'a>,
    cart: Cart<'a>,
    cart_visible: bool,
}

impl<'a> Storefront<'a> {
    /// Open a session with an empty cart and the cart panel closed.
    #[must_use]
    pub fn new(catalog: Catalog<'a>) -> Self {
        let cart = Cart::new(catalog.currency());

        Storefront {
            catalog,
            cart,
            cart_visible: false,
        }
    }

    /// Add one unit of a catalog product to the cart, returning the product's new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::UnknownProduct`] if the identifier is not in the catalog.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<NonZeroU32, StorefrontError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(StorefrontError::UnknownProduct(product_id))?;

        let quantity = self.cart.add(product);

        debug!(
            product_id = %product_id,
            quantity = quantity.get(),
            total_items = self.cart.total_item_count(),
            "added product to cart"
        );

        Ok(quantity)
    }

    /// Remove one unit of a product from the cart. Returns whether the cart changed.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let changed = self.cart.remove(product_id);

        debug!(
            product_id = %product_id,
            changed,
            quantity = self.cart.quantity(product_id),
            total_items = self.cart.total_item_count(),
            "removed product from cart"
        );

        changed
    }

    /// Open the cart panel if closed, close it if open. Returns the new visibility.
    pub fn toggle_cart_visibility(&mut self) -> bool {
        self.cart_visible = !self.cart_visible;

        debug!(visible = self.cart_visible, "toggled cart panel");

        self.cart_visible
    }

    /// Close the cart panel.
    pub fn close_cart(&mut self) {
        self.cart_visible = false;

        debug!(visible = self.cart_visible, "closed cart panel");
    }

    /// Apply a parsed input event.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::UnknownProduct`] if an add names a product outside the catalog.
    pub fn apply(&mut self, action: CartAction) -> Result<(), StorefrontError> {
        match action {
            CartAction::Add(product_id) => {
                self.add_to_cart(product_id)?;
            }
            CartAction::Remove(product_id) => {
                self.remove_from_cart(product_id);
            }
            CartAction::ToggleCart => {
                self.toggle_cart_visibility();
            }
        }

        Ok(())
    }

    /// Whether the cart panel is open.
    #[must_use]
    pub fn is_cart_visible(&self) -> bool {
        self.cart_visible
    }

    /// The catalog on display.
    #[must_use]
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// The shopper's cart.
    #[must_use]
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Look up a catalog product.
    pub fn product(&self, product_id: ProductId) -> Option<&Product<'a>> {
        self.catalog.get(product_id)
    }

    /// Total number of units in the cart, as shown on the cart button.
    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    /// Total price of the cart.
    pub fn total_price(&self) -> Money<'a, Currency> {
        self.cart.total_price()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use testresult::TestResult;
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    use crate::fixtures::sweet_treats;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> io::Result<String> {
            let bytes = self.0.lock().map_err(|err| io::Error::other(err.to_string()))?;

            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|err| io::Error::other(err.to_string()))?
                .extend_from_slice(buf);

            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn close_cart_hides_panel_and_logs() -> TestResult {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();

        let mut storefront = Storefront::new(sweet_treats()?);

        tracing::subscriber::with_default(subscriber, || {
            storefront.toggle_cart_visibility();
            storefront.close_cart();
            storefront.close_cart();
        });

        assert!(!storefront.is_cart_visible());

        let output = logs.contents()?;

        assert!(output.contains("toggled cart panel"));
        assert_eq!(output.matches("closed cart panel").count(), 2);

        Ok(())
    }

    #[test]
    fn parses_add_and_remove() -> TestResult {
        assert_eq!("add:1".parse::<CartAction>()?, CartAction::Add(ProductId::new(1)));
        assert_eq!(
            " remove: 6 ".parse::<CartAction>()?,
            CartAction::Remove(ProductId::new(6))
        );

        Ok(())
    }

    #[test]
    fn parses_toggle() -> TestResult {
        assert_eq!("toggle".parse::<CartAction>()?, CartAction::ToggleCart);

        Ok(())
    }

    #[test]
    fn rejects_unknown_verb() {
        assert_eq!(
            "buy:1".parse::<CartAction>(),
            Err(StorefrontError::InvalidAction("buy:1".to_string()))
        );
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(matches!(
            "add:cookie".parse::<CartAction>(),
            Err(StorefrontError::InvalidAction(_))
        ));
    }

    #[test]
    fn rejects_bare_word() {
        assert!(matches!(
            "checkout".parse::<CartAction>(),
            Err(StorefrontError::InvalidAction(_))
        ));
    }
}
