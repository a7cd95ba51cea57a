//! Cart Example
//!
//! This example replays a shopping session against the cookie catalog and prints the receipt.
//!
//! Pass actions as positional arguments, e.g. `add:1 add:1 add:6 remove:1 toggle`
//! Use `-f` to load a catalog fixture file instead of the built-in catalog
//! Use `-l` to list the catalog first
//! Use `-v` (or set `RUST_LOG=sweet_treats=debug`) to trace each cart mutation

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sweet_treats::{receipt::Receipt, storefront::Storefront, utils::ExampleCartArgs};

/// Cart Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleCartArgs::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.default_log_filter())))
        .try_init()?;

    let mut storefront = Storefront::new(args.catalog()?);

    let store = storefront.catalog().store();
    println!("{} - {}", store.name, store.tagline);

    if args.list {
        for product in storefront.catalog().iter() {
            println!(
                "  {:>2}  {} {:<18} {}",
                product.id, product.glyph, product.name, product.price
            );
        }
    }

    for action in args.actions {
        storefront.apply(action)?;
    }

    println!(
        "Cart ({}) {}",
        storefront.total_item_count(),
        if storefront.is_cart_visible() {
            "[open]"
        } else {
            "[closed]"
        }
    );

    let stdout = io::stdout();
    let handle = stdout.lock();

    Receipt::from_cart(storefront.cart()).write_to(handle)?;

    Ok(())
}
