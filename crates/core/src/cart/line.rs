//! Cart Lines

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::products::{Product, ProductId};

/// One distinct product in the cart together with how many units were added.
///
/// The quantity is never zero: a line that would drop to zero is removed from the cart instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    product: Product<'a>,
    quantity: NonZeroU32,
}

impl<'a> CartLine<'a> {
    /// Create a new line holding a single unit of the product.
    pub(crate) fn new(product: Product<'a>) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    /// The product on this line.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Identifier of the product on this line.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Number of units on this line.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price multiplied by quantity.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        Money::from_decimal(self.subtotal_amount(), self.product.price.currency())
    }

    pub(crate) fn subtotal_amount(&self) -> Decimal {
        *self.product.price.amount() * Decimal::from(self.quantity.get())
    }

    pub(crate) fn increment(&mut self) -> NonZeroU32 {
        self.quantity = self.quantity.saturating_add(1);

        self.quantity
    }

    /// Take one unit off the line, returning `None` when the line would become empty.
    pub(crate) fn decrement(&mut self) -> Option<NonZeroU32> {
        let remaining = NonZeroU32::new(self.quantity.get() - 1)?;

        self.quantity = remaining;

        Some(remaining)
    }
}
