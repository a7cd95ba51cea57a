//! Sweet Treats
//!
//! Catalog, cart and storefront session logic for the Sweet Treats cookie shop demo.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod prelude;
pub mod products;
pub mod receipt;
pub mod storefront;
pub mod utils;
