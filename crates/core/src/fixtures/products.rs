//! Product Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Wrapper for a product catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Map of product id -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Catalog category
    pub category: String,

    /// Unit price in cents
    pub price_cents: u64,

    /// Units in stock
    pub stock_qty: u32,

    /// Offered for sale; defaults to true
    #[serde(default = "default_active")]
    pub active: bool,

    /// Optional product photo
    #[serde(default)]
    pub photo_url: Option<String>,
}

fn default_active() -> bool {
    true
}

impl CatalogFixture {
    /// Parse a catalog fixture from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the document does not match the schema.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Materialise the catalog as products, ordered by id for determinism.
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .products
            .into_iter()
            .map(|(id, fixture)| Product {
                id: ProductId::from(id),
                name: fixture.name,
                category: fixture.category,
                price_cents: fixture.price_cents,
                stock_qty: fixture.stock_qty,
                is_active: fixture.active,
                photo_url: fixture.photo_url,
            })
            .collect();

        products.sort_by(|a, b| a.id.cmp(&b.id));

        products
    }
}
