//! Sweet Treats prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    catalog::{Catalog, CatalogError, StoreInfo},
    fixtures::{CatalogFixture, FixtureError, sweet_treats},
    products::{Product, ProductId},
    receipt::{Receipt, ReceiptError, ReceiptLine},
    storefront::{CartAction, Storefront, StorefrontError},
};
