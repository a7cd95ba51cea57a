//! Catalog

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use smallvec::SmallVec;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// The catalog has no products, so its currency is unknown.
    #[error("catalog has no products")]
    Empty,

    /// Two products share an identifier.
    #[error("Product {0} appears more than once")]
    DuplicateProduct(ProductId),

    /// A product is priced in a different currency from the rest of the catalog (product,
    /// product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// A product has a negative price.
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),
}

/// Store branding shown around the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    /// Store name
    pub name: String,

    /// Short strapline shown under the name
    pub tagline: String,

    /// Footer motto
    pub motto: String,
}

/// Catalog
///
/// An immutable, ordered list of products sharing a single currency.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    store: StoreInfo,
    products: SmallVec<[Product<'a>; 8]>,
    index: FxHashMap<ProductId, usize>,
    currency: &'a Currency,
}

impl<'a> Catalog<'a> {
    /// Create a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if there are no products, an identifier repeats, prices mix
    /// currencies, or a price is negative.
    pub fn new(
        store: StoreInfo,
        products: impl IntoIterator<Item = Product<'a>>,
    ) -> Result<Self, CatalogError> {
        let products: SmallVec<[Product<'a>; 8]> = products.into_iter().collect();

        let currency = products
            .first()
            .map(|product| product.price.currency())
            .ok_or(CatalogError::Empty)?;

        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            let product_currency = product.price.currency();

            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    product.id,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if *product.price.amount() < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(product.id));
            }

            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }

        Ok(Catalog {
            store,
            products,
            index,
            currency,
        })
    }

    /// Look up a product by identifier.
    pub fn get(&self, product_id: ProductId) -> Option<&Product<'a>> {
        self.index
            .get(&product_id)
            .and_then(|&position| self.products.get(position))
    }

    /// Iterate over the products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency shared by every product.
    #[must_use]
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Store branding.
    #[must_use]
    pub fn store(&self) -> &StoreInfo {
        &self.store
    }
}
