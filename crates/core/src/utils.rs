//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::{
    catalog::Catalog,
    fixtures::{self, CatalogFixture, FixtureError},
    storefront::CartAction,
};

/// Arguments for the cart example
#[derive(Debug, Parser)]
pub struct ExampleCartArgs {
    /// Catalog fixture file to load instead of the built-in cookie catalog
    #[clap(short, long)]
    pub fixture: Option<PathBuf>,

    /// Show the catalog before applying actions
    #[clap(short, long)]
    pub list: bool,

    /// Trace every cart mutation at debug level when `RUST_LOG` is not set
    #[clap(short, long)]
    pub verbose: bool,

    /// Actions to apply in order: `add:<id>`, `remove:<id>` or `toggle`
    pub actions: Vec<CartAction>,
}

impl ExampleCartArgs {
    /// Load the catalog selected by the arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the fixture cannot be read, parsed or validated.
    pub fn catalog(&self) -> Result<Catalog<'static>, FixtureError> {
        match &self.fixture {
            Some(path) => Catalog::try_from(CatalogFixture::from_path(path)?),
            None => fixtures::sweet_treats(),
        }
    }

    /// Tracing filter directive used when `RUST_LOG` is not set.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "sweet_treats=debug"
        } else {
            "warn"
        }
    }
}
