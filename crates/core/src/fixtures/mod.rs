//! Catalog Fixtures
//!
//! YAML-backed product catalogs for tests and examples.

mod products;

pub use products::{CatalogFixture, ProductFixture};

use thiserror::Error;

/// Fixture parse failure.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The YAML document did not match the fixture schema.
    #[error("invalid catalog fixture: {0}")]
    Yaml(#[from] serde_norway::Error),
}
