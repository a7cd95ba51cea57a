//! Cart

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::products::{Product, ProductId};

mod line;

pub use line::CartLine;

/// Cart
///
/// Lines are kept in the order their product was first added. Each product appears on at most
/// one line, and every line holds at least one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart<'a> {
    lines: SmallVec<[CartLine<'a>; 8]>,
    currency: &'a Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'a Currency) -> Self {
        Cart {
            lines: SmallVec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the product keeps its position and gains a unit; otherwise a new
    /// line is appended. Returns the line's quantity after the add.
    ///
    /// Products are expected to come from the catalog the cart was opened for, so their prices
    /// share the cart currency.
    pub fn add(&mut self, product: &Product<'a>) -> NonZeroU32 {
        if let Some(line) = self.line_mut(product.id) {
            return line.increment();
        }

        self.lines.push(CartLine::new(product.clone()));

        NonZeroU32::MIN
    }

    /// Remove one unit of a product.
    ///
    /// The line is dropped once its last unit is removed. Removing a product that is not in the
    /// cart does nothing. Returns whether the cart changed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let Some(position) = self.position(product_id) else {
            return false;
        };

        let emptied = self
            .lines
            .get_mut(position)
            .is_some_and(|line| line.decrement().is_none());

        if emptied {
            self.lines.remove(position);
        }

        true
    }

    /// Sum of the quantities across all lines.
    pub fn total_item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Sum of unit price times quantity across all lines.
    ///
    /// The running total is exact; rounding to the currency's minor unit is left to display.
    pub fn total_price(&self) -> Money<'a, Currency> {
        let zero = Decimal::new(0, self.currency.exponent);

        let total = self
            .lines
            .iter()
            .map(CartLine::subtotal_amount)
            .fold(zero, |acc, amount| acc + amount);

        Money::from_decimal(total, self.currency)
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Iterate over the lines in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Look up the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine<'a>> {
        self.lines
            .iter()
            .find(|line| line.product_id() == product_id)
    }

    /// Units of a product currently in the cart, zero when absent.
    pub fn quantity(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map_or(0, CartLine::quantity)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product_id() == product_id)
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine<'a>> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id() == product_id)
    }
}
