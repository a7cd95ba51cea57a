//! Fixtures
//!
//! Store branding and catalog definitions loaded from YAML.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError, StoreInfo},
    fixtures::products::ProductFixture,
    products::Product,
};

pub mod products;

/// The built-in six-cookie catalog.
pub const SWEET_TREATS_YAML: &str = include_str!("../../../../fixtures/products/cookies.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Catalog validation error
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Store section of a catalog fixture
#[derive(Debug, Deserialize)]
pub struct StoreFixture {
    /// Store name
    pub name: String,

    /// Store tagline
    #[serde(default)]
    pub tagline: String,

    /// Footer motto
    #[serde(default)]
    pub motto: String,
}

impl From<StoreFixture> for StoreInfo {
    fn from(fixture: StoreFixture) -> Self {
        StoreInfo {
            name: fixture.name,
            tagline: fixture.tagline,
            motto: fixture.motto,
        }
    }
}

/// Catalog Fixture
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Store branding
    pub store: StoreFixture,

    /// Products in display order
    pub products: Vec<ProductFixture>,
}

impl CatalogFixture {
    /// Parse a catalog fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError::Yaml`] if the document does not match the fixture shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Read and parse a catalog fixture file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }
}

impl TryFrom<CatalogFixture> for Catalog<'_> {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog::new(fixture.store.into(), products)?)
    }
}

/// Load the built-in Sweet Treats catalog.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded fixture fails to parse or validate.
pub fn sweet_treats() -> Result<Catalog<'static>, FixtureError> {
    Catalog::try_from(CatalogFixture::from_yaml(SWEET_TREATS_YAML)?)
}
