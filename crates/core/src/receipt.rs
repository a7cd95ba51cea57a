//! Receipt

use std::io;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::cart::{Cart, CartLine};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error writing the receipt
    #[error("Failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// A priced line on a receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine<'a> {
    /// Product glyph
    pub glyph: String,

    /// Product name
    pub name: String,

    /// Unit price
    pub unit_price: Money<'a, Currency>,

    /// Units purchased
    pub quantity: u32,

    /// Unit price times quantity
    pub line_total: Money<'a, Currency>,
}

impl<'a> From<&CartLine<'a>> for ReceiptLine<'a> {
    fn from(line: &CartLine<'a>) -> Self {
        let product = line.product();

        ReceiptLine {
            glyph: product.glyph.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: line.quantity(),
            line_total: line.subtotal(),
        }
    }
}

/// Snapshot of a cart for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt<'a> {
    lines: SmallVec<[ReceiptLine<'a>; 8]>,
    item_count: u64,
    total: Money<'a, Currency>,
}

impl<'a> Receipt<'a> {
    /// Build a receipt from the current state of a cart.
    #[must_use]
    pub fn from_cart(cart: &Cart<'a>) -> Self {
        Receipt {
            lines: cart.iter().map(ReceiptLine::from).collect(),
            item_count: cart.total_item_count(),
            total: cart.total_price(),
        }
    }

    /// Lines in cart order.
    #[must_use]
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Total number of units.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Total amount payable.
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Writes the receipt as a table followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Io`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.lines.is_empty() {
            writeln!(out, "\nYour cart is empty")?;
        } else {
            write_receipt_table(&mut out, &self.lines)?;
        }

        write_receipt_summary(&mut out, self)
    }
}

fn write_receipt_table(
    out: &mut impl io::Write,
    lines: &[ReceiptLine<'_>],
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Unit Price", "Qty", "Line Total"]);

    for line in lines {
        builder.push_record([
            line.glyph.clone(),
            line.name.clone(),
            format!("{}", line.unit_price),
            line.quantity.to_string(),
            format!("{}", line.line_total),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "\n{table}")?;

    Ok(())
}

fn write_receipt_summary(
    out: &mut impl io::Write,
    receipt: &Receipt<'_>,
) -> Result<(), ReceiptError> {
    let item_label = if receipt.item_count == 1 {
        "item"
    } else {
        "items"
    };

    writeln!(out, " Items: {} {item_label}", receipt.item_count)?;
    writeln!(out, " Total: {}", receipt.total)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::products::{Product, ProductId};

    use super::*;

    fn cookie<'a>(id: u32, name: &str, minor: i64) -> Product<'a> {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: Money::from_minor(minor, USD),
            glyph: "🍪".to_string(),
        }
    }

    #[test]
    fn from_cart_snapshots_lines_and_totals() {
        let mut cart = Cart::new(USD);
        let chip = cookie(1, "Chocolate Chip", 1299);

        cart.add(&chip);
        cart.add(&chip);
        cart.add(&cookie(5, "Sugar Cookie", 1099));

        let receipt = Receipt::from_cart(&cart);

        assert_eq!(receipt.lines().len(), 2);
        assert_eq!(receipt.item_count(), 3);
        assert_eq!(receipt.total(), Money::from_minor(3697, USD));
        assert_eq!(
            receipt.lines().first().map(|line| line.line_total),
            Some(Money::from_minor(2598, USD))
        );
    }

    #[test]
    fn write_to_lists_items_and_total() -> TestResult {
        let mut cart = Cart::new(USD);

        cart.add(&cookie(6, "Snickerdoodle", 1299));

        let mut out = Vec::new();
        Receipt::from_cart(&cart).write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Snickerdoodle"));
        assert!(text.contains("Items: 1 item"));
        assert!(text.contains("Total: $12.99"));

        Ok(())
    }

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_to_reports_writer_failure() {
        let mut cart = Cart::new(USD);

        cart.add(&cookie(2, "Double Chocolate", 1399));

        let result = Receipt::from_cart(&cart).write_to(BrokenPipe);

        assert!(matches!(
            result,
            Err(ReceiptError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe
        ));
        assert!(matches!(
            Receipt::from_cart(&Cart::new(USD)).write_to(BrokenPipe),
            Err(ReceiptError::Io(_))
        ));
    }

    #[test]
    fn write_to_empty_cart() -> TestResult {
        let cart = Cart::new(USD);

        let mut out = Vec::new();
        Receipt::from_cart(&cart).write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Your cart is empty"));
        assert!(text.contains("Items: 0 items"));
        assert!(text.contains("Total: $0.00"));

        Ok(())
    }
}
